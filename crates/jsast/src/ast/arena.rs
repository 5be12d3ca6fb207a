//! `Ast` arena storage and node construction (`add_*` methods).
//!
//! Nodes are built bottom-up: every constructor receives its mandatory
//! children already allocated, pushes the new node, and wires the children's
//! parent pointers to it. The root's parent stays `None`. After a structural
//! edit (replacing or moving a child) the caller must restore the parent
//! invariant with `set_parent`; `Ast::validate` re-checks it.

use serde::Serialize;

use super::node::*;
use crate::span::Span;

#[derive(Debug, Default, Serialize)]
pub struct Ast {
    pub(crate) nodes: Vec<Node>,
}

impl Ast {
    pub fn new() -> Ast {
        Ast::default()
    }

    /// Create an arena with pre-allocated node capacity.
    pub fn with_capacity(capacity: usize) -> Ast {
        Ast {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node. Panics on an out-of-range id: handles are only ever minted
    /// by this arena, so a bad one is a programmer error.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.node(id).span
    }

    #[inline]
    pub fn line(&self, id: NodeId) -> u32 {
        self.node(id).line
    }

    /// Re-wire a node's parent pointer. Transformation passes call this after
    /// moving a node; nothing else maintains the invariant for them.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) {
        tracing::trace!(child = child.0, parent = ?parent.map(|p| p.0), "set_parent");
        self.node_mut(child).parent = parent;
    }

    // ==========================================================================
    // Internal wiring helpers
    // ==========================================================================

    fn push(&mut self, kind: NodeKind, span: Span, line: u32) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            parent: None,
            span,
            line,
        });
        id
    }

    #[inline]
    fn wire(&mut self, child: NodeId, parent: NodeId) {
        self.nodes[child.index()].parent = Some(parent);
    }

    #[inline]
    fn wire_opt(&mut self, child: Option<NodeId>, parent: NodeId) {
        if let Some(c) = child {
            self.wire(c, parent);
        }
    }

    #[inline]
    fn wire_list(&mut self, children: &[NodeId], parent: NodeId) {
        for &c in children {
            self.wire(c, parent);
        }
    }

    #[inline]
    fn wire_slots(&mut self, slots: &[Option<NodeId>], parent: NodeId) {
        for &slot in slots {
            self.wire_opt(slot, parent);
        }
    }

    // ==========================================================================
    // Statement constructors
    // ==========================================================================

    pub fn add_empty(&mut self, span: Span, line: u32) -> NodeId {
        self.push(NodeKind::Empty, span, line)
    }

    pub fn add_block(&mut self, span: Span, line: u32, body: Vec<NodeId>) -> NodeId {
        let children = body.clone();
        let id = self.push(NodeKind::Block(BlockData { body }), span, line);
        self.wire_list(&children, id);
        id
    }

    pub fn add_expression_statement(
        &mut self,
        span: Span,
        line: u32,
        expression: NodeId,
    ) -> NodeId {
        let id = self.push(
            NodeKind::ExpressionStatement(ExpressionStatementData { expression }),
            span,
            line,
        );
        self.wire(expression, id);
        id
    }

    pub fn add_if(
        &mut self,
        span: Span,
        line: u32,
        condition: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
    ) -> NodeId {
        let id = self.push(
            NodeKind::If(IfData {
                condition,
                then_branch,
                else_branch,
            }),
            span,
            line,
        );
        self.wire(condition, id);
        self.wire(then_branch, id);
        self.wire_opt(else_branch, id);
        id
    }

    pub fn add_labeled(&mut self, span: Span, line: u32, label: NodeId, body: NodeId) -> NodeId {
        let id = self.push(NodeKind::Labeled(LabeledData { label, body }), span, line);
        self.wire(label, id);
        self.wire(body, id);
        id
    }

    pub fn add_break(&mut self, span: Span, line: u32, label: Option<NodeId>) -> NodeId {
        let id = self.push(NodeKind::Break(BreakData { label }), span, line);
        self.wire_opt(label, id);
        id
    }

    pub fn add_continue(&mut self, span: Span, line: u32, label: Option<NodeId>) -> NodeId {
        let id = self.push(NodeKind::Continue(ContinueData { label }), span, line);
        self.wire_opt(label, id);
        id
    }

    pub fn add_with(&mut self, span: Span, line: u32, object: NodeId, body: NodeId) -> NodeId {
        let id = self.push(NodeKind::With(WithData { object, body }), span, line);
        self.wire(object, id);
        self.wire(body, id);
        id
    }

    pub fn add_switch(
        &mut self,
        span: Span,
        line: u32,
        argument: NodeId,
        cases: Vec<NodeId>,
    ) -> NodeId {
        let children = cases.clone();
        let id = self.push(NodeKind::Switch(SwitchData { argument, cases }), span, line);
        self.wire(argument, id);
        self.wire_list(&children, id);
        id
    }

    pub fn add_return(&mut self, span: Span, line: u32, argument: Option<NodeId>) -> NodeId {
        let id = self.push(NodeKind::Return(ReturnData { argument }), span, line);
        self.wire_opt(argument, id);
        id
    }

    pub fn add_throw(&mut self, span: Span, line: u32, argument: NodeId) -> NodeId {
        let id = self.push(NodeKind::Throw(ThrowData { argument }), span, line);
        self.wire(argument, id);
        id
    }

    pub fn add_try(
        &mut self,
        span: Span,
        line: u32,
        block: NodeId,
        handler: Option<NodeId>,
        finalizer: Option<NodeId>,
    ) -> NodeId {
        let id = self.push(
            NodeKind::Try(TryData {
                block,
                handler,
                finalizer,
            }),
            span,
            line,
        );
        self.wire(block, id);
        self.wire_opt(handler, id);
        self.wire_opt(finalizer, id);
        id
    }

    pub fn add_while(&mut self, span: Span, line: u32, condition: NodeId, body: NodeId) -> NodeId {
        let id = self.push(NodeKind::While(WhileData { condition, body }), span, line);
        self.wire(condition, id);
        self.wire(body, id);
        id
    }

    pub fn add_do_while(
        &mut self,
        span: Span,
        line: u32,
        condition: NodeId,
        body: NodeId,
    ) -> NodeId {
        let id = self.push(
            NodeKind::DoWhile(DoWhileData { condition, body }),
            span,
            line,
        );
        self.wire(condition, id);
        self.wire(body, id);
        id
    }

    pub fn add_for(
        &mut self,
        span: Span,
        line: u32,
        init: Option<NodeId>,
        condition: Option<NodeId>,
        update: Option<NodeId>,
        body: NodeId,
    ) -> NodeId {
        let id = self.push(
            NodeKind::For(ForData {
                init,
                condition,
                update,
                body,
            }),
            span,
            line,
        );
        self.wire_opt(init, id);
        self.wire_opt(condition, id);
        self.wire_opt(update, id);
        self.wire(body, id);
        id
    }

    pub fn add_for_in(
        &mut self,
        span: Span,
        line: u32,
        left: NodeId,
        right: NodeId,
        body: NodeId,
    ) -> NodeId {
        let id = self.push(NodeKind::ForIn(ForInData { left, right, body }), span, line);
        self.wire(left, id);
        self.wire(right, id);
        self.wire(body, id);
        id
    }

    pub fn add_function_declaration(&mut self, span: Span, line: u32, function: NodeId) -> NodeId {
        let id = self.push(
            NodeKind::FunctionDeclaration(FunctionDeclarationData { function }),
            span,
            line,
        );
        self.wire(function, id);
        id
    }

    pub fn add_variable_declaration(
        &mut self,
        span: Span,
        line: u32,
        declarators: Vec<NodeId>,
    ) -> NodeId {
        let children = declarators.clone();
        let id = self.push(
            NodeKind::VariableDeclaration(VariableDeclarationData { declarators }),
            span,
            line,
        );
        self.wire_list(&children, id);
        id
    }

    pub fn add_debugger(&mut self, span: Span, line: u32) -> NodeId {
        self.push(NodeKind::Debugger, span, line)
    }

    // ==========================================================================
    // Expression constructors
    // ==========================================================================

    pub fn add_this(&mut self, span: Span, line: u32) -> NodeId {
        self.push(NodeKind::This, span, line)
    }

    pub fn add_array(&mut self, span: Span, line: u32, elements: Vec<Option<NodeId>>) -> NodeId {
        let slots = elements.clone();
        let id = self.push(NodeKind::Array(ArrayData { elements }), span, line);
        self.wire_slots(&slots, id);
        id
    }

    pub fn add_object(&mut self, span: Span, line: u32, properties: Vec<NodeId>) -> NodeId {
        let children = properties.clone();
        let id = self.push(NodeKind::Object(ObjectData { properties }), span, line);
        self.wire_list(&children, id);
        id
    }

    pub fn add_function_expression(&mut self, span: Span, line: u32, function: NodeId) -> NodeId {
        let id = self.push(
            NodeKind::FunctionExpression(FunctionExpressionData { function }),
            span,
            line,
        );
        self.wire(function, id);
        id
    }

    pub fn add_sequence(&mut self, span: Span, line: u32, expressions: Vec<NodeId>) -> NodeId {
        let children = expressions.clone();
        let id = self.push(NodeKind::Sequence(SequenceData { expressions }), span, line);
        self.wire_list(&children, id);
        id
    }

    pub fn add_unary(
        &mut self,
        span: Span,
        line: u32,
        operator: UnaryOp,
        argument: NodeId,
    ) -> NodeId {
        let id = self.push(NodeKind::Unary(UnaryData { operator, argument }), span, line);
        self.wire(argument, id);
        id
    }

    pub fn add_binary(
        &mut self,
        span: Span,
        line: u32,
        left: NodeId,
        operator: BinaryOp,
        right: NodeId,
    ) -> NodeId {
        let id = self.push(
            NodeKind::Binary(BinaryData {
                left,
                operator,
                right,
            }),
            span,
            line,
        );
        self.wire(left, id);
        self.wire(right, id);
        id
    }

    pub fn add_assignment(
        &mut self,
        span: Span,
        line: u32,
        left: NodeId,
        operator: AssignOp,
        right: NodeId,
    ) -> NodeId {
        let id = self.push(
            NodeKind::Assignment(AssignmentData {
                left,
                operator,
                right,
            }),
            span,
            line,
        );
        self.wire(left, id);
        self.wire(right, id);
        id
    }

    pub fn add_update(
        &mut self,
        span: Span,
        line: u32,
        operator: UpdateOp,
        argument: NodeId,
        prefix: bool,
    ) -> NodeId {
        let id = self.push(
            NodeKind::Update(UpdateData {
                operator,
                argument,
                prefix,
            }),
            span,
            line,
        );
        self.wire(argument, id);
        id
    }

    pub fn add_conditional(
        &mut self,
        span: Span,
        line: u32,
        condition: NodeId,
        then_branch: NodeId,
        else_branch: NodeId,
    ) -> NodeId {
        let id = self.push(
            NodeKind::Conditional(ConditionalData {
                condition,
                then_branch,
                else_branch,
            }),
            span,
            line,
        );
        self.wire(condition, id);
        self.wire(then_branch, id);
        self.wire(else_branch, id);
        id
    }

    pub fn add_call(
        &mut self,
        span: Span,
        line: u32,
        callee: NodeId,
        arguments: Vec<NodeId>,
        is_new: bool,
    ) -> NodeId {
        let children = arguments.clone();
        let id = self.push(
            NodeKind::Call(CallData {
                callee,
                arguments,
                is_new,
            }),
            span,
            line,
        );
        self.wire(callee, id);
        self.wire_list(&children, id);
        id
    }

    pub fn add_member(&mut self, span: Span, line: u32, object: NodeId, property: NodeId) -> NodeId {
        let id = self.push(NodeKind::Member(MemberData { object, property }), span, line);
        self.wire(object, id);
        self.wire(property, id);
        id
    }

    pub fn add_index(&mut self, span: Span, line: u32, object: NodeId, property: NodeId) -> NodeId {
        let id = self.push(NodeKind::Index(IndexData { object, property }), span, line);
        self.wire(object, id);
        self.wire(property, id);
        id
    }

    pub fn add_name_expression(&mut self, span: Span, line: u32, name: NodeId) -> NodeId {
        let id = self.push(
            NodeKind::NameExpression(NameExpressionData { name }),
            span,
            line,
        );
        self.wire(name, id);
        id
    }

    pub fn add_literal(
        &mut self,
        span: Span,
        line: u32,
        value: LiteralValue,
        raw: impl Into<String>,
    ) -> NodeId {
        self.push(
            NodeKind::Literal(LiteralData {
                value,
                raw: raw.into(),
            }),
            span,
            line,
        )
    }

    pub fn add_regexp(&mut self, span: Span, line: u32, raw: impl Into<String>) -> NodeId {
        self.push(NodeKind::Regexp(RegexpData { raw: raw.into() }), span, line)
    }

    // ==========================================================================
    // Structure constructors
    // ==========================================================================

    pub fn add_programs(&mut self, span: Span, line: u32, programs: Vec<NodeId>) -> NodeId {
        let children = programs.clone();
        let id = self.push(NodeKind::Programs(ProgramsData { programs }), span, line);
        self.wire_list(&children, id);
        id
    }

    pub fn add_program(
        &mut self,
        span: Span,
        line: u32,
        filename: impl Into<String>,
        body: Vec<NodeId>,
    ) -> NodeId {
        let children = body.clone();
        let filename = filename.into();
        tracing::trace!(filename = %filename, statements = children.len(), "add_program");
        let id = self.push(
            NodeKind::Program(ProgramData {
                filename,
                body,
                environment: Default::default(),
            }),
            span,
            line,
        );
        self.wire_list(&children, id);
        id
    }

    pub fn add_function_node(
        &mut self,
        span: Span,
        line: u32,
        name: Option<NodeId>,
        params: Vec<NodeId>,
        body: NodeId,
    ) -> NodeId {
        let param_children = params.clone();
        let id = self.push(
            NodeKind::FunctionNode(FunctionData {
                name,
                params,
                body,
                environment: Default::default(),
            }),
            span,
            line,
        );
        self.wire_opt(name, id);
        self.wire_list(&param_children, id);
        self.wire(body, id);
        id
    }

    /// `text` is the identifier with escapes already decoded; the producer
    /// resolves escapes before building the node.
    pub fn add_name(&mut self, span: Span, line: u32, text: impl Into<String>) -> NodeId {
        self.push(
            NodeKind::Name(NameData {
                text: text.into(),
                scope: None,
            }),
            span,
            line,
        )
    }

    pub fn add_property(
        &mut self,
        span: Span,
        line: u32,
        key: NodeId,
        value: NodeId,
        kind: PropertyKind,
    ) -> NodeId {
        let id = self.push(NodeKind::Property(PropertyData { key, value, kind }), span, line);
        self.wire(key, id);
        self.wire(value, id);
        id
    }

    pub fn add_switch_case(
        &mut self,
        span: Span,
        line: u32,
        expression: Option<NodeId>,
        body: Vec<NodeId>,
    ) -> NodeId {
        let children = body.clone();
        let id = self.push(
            NodeKind::SwitchCase(SwitchCaseData { expression, body }),
            span,
            line,
        );
        self.wire_opt(expression, id);
        self.wire_list(&children, id);
        id
    }

    pub fn add_variable_declarator(
        &mut self,
        span: Span,
        line: u32,
        name: NodeId,
        init: Option<NodeId>,
    ) -> NodeId {
        let id = self.push(
            NodeKind::VariableDeclarator(VariableDeclaratorData { name, init }),
            span,
            line,
        );
        self.wire(name, id);
        self.wire_opt(init, id);
        id
    }

    pub fn add_catch_clause(&mut self, span: Span, line: u32, param: NodeId, body: NodeId) -> NodeId {
        let id = self.push(
            NodeKind::CatchClause(CatchClauseData {
                param,
                body,
                environment: Default::default(),
            }),
            span,
            line,
        );
        self.wire(param, id);
        self.wire(body, id);
        id
    }
}
