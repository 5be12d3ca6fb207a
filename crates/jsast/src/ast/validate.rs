//! Tree well-formedness checking.
//!
//! `validate` walks a subtree and reports structural problems without
//! panicking: broken parent back-pointers after an edit, inverted spans,
//! role slots holding the wrong kind, Property accessor violations, and
//! duplicate default clauses in a switch. Construction never performs these
//! checks; transformation passes run `validate` after editing.

use super::arena::Ast;
use super::node::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AstErrorKind {
    SpanOrder,
    ParentMismatch,
    WrongChildKind,
    AccessorValueNotFunction,
    InitValueNotExpression,
    DuplicateDefaultClause,
}

#[derive(Debug)]
pub struct AstError {
    pub kind: AstErrorKind,
    pub node: NodeId,
    pub message: String,
}

impl std::fmt::Display for AstError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node {}: {}", self.node.0, self.message)
    }
}

struct Validator<'a> {
    ast: &'a Ast,
    errors: Vec<AstError>,
}

impl<'a> Validator<'a> {
    fn error(&mut self, kind: AstErrorKind, node: NodeId, message: String) {
        self.errors.push(AstError {
            kind,
            node,
            message,
        });
    }

    fn check(&mut self, id: NodeId) {
        let node = self.ast.node(id);
        if node.span.pos > node.span.end {
            self.error(
                AstErrorKind::SpanOrder,
                id,
                format!("span start {} exceeds end {}", node.span.pos, node.span.end),
            );
        }

        let children = self.ast.children(id);
        for &child in &children {
            if self.ast.parent(child) != Some(id) {
                self.error(
                    AstErrorKind::ParentMismatch,
                    child,
                    format!(
                        "child of {} node {} has parent {:?}",
                        node.kind.name(),
                        id.0,
                        self.ast.parent(child).map(|p| p.0)
                    ),
                );
            }
        }

        self.check_shape(id);

        for child in children {
            self.check(child);
        }
    }

    fn require(&mut self, slot: &str, parent: NodeId, child: NodeId, ok: bool) {
        if !ok {
            self.error(
                AstErrorKind::WrongChildKind,
                child,
                format!(
                    "{} slot of {} node {} holds {}",
                    slot,
                    self.ast.kind(parent).name(),
                    parent.0,
                    self.ast.kind(child).name()
                ),
            );
        }
    }

    fn require_stmt(&mut self, slot: &str, parent: NodeId, child: NodeId) {
        self.require(slot, parent, child, self.ast.kind(child).is_statement());
    }

    fn require_expr(&mut self, slot: &str, parent: NodeId, child: NodeId) {
        self.require(slot, parent, child, self.ast.kind(child).is_expression());
    }

    fn require_name(&mut self, slot: &str, parent: NodeId, child: NodeId) {
        self.require(
            slot,
            parent,
            child,
            matches!(self.ast.kind(child), NodeKind::Name(_)),
        );
    }

    /// Per-kind family and role checks for each slot, in the documented
    /// child order.
    fn check_shape(&mut self, id: NodeId) {
        match self.ast.kind(id) {
            NodeKind::Empty | NodeKind::Debugger | NodeKind::This => {}
            NodeKind::Block(d) => {
                for &s in &d.body {
                    self.require_stmt("body", id, s);
                }
            }
            NodeKind::ExpressionStatement(d) => self.require_expr("expression", id, d.expression),
            NodeKind::If(d) => {
                self.require_expr("condition", id, d.condition);
                self.require_stmt("then", id, d.then_branch);
                if let Some(e) = d.else_branch {
                    self.require_stmt("else", id, e);
                }
            }
            NodeKind::Labeled(d) => {
                self.require_name("label", id, d.label);
                self.require_stmt("body", id, d.body);
            }
            NodeKind::Break(d) => {
                if let Some(l) = d.label {
                    self.require_name("label", id, l);
                }
            }
            NodeKind::Continue(d) => {
                if let Some(l) = d.label {
                    self.require_name("label", id, l);
                }
            }
            NodeKind::With(d) => {
                self.require_expr("object", id, d.object);
                self.require_stmt("body", id, d.body);
            }
            NodeKind::Switch(d) => {
                self.require_expr("argument", id, d.argument);
                let mut defaults = 0usize;
                for &case in &d.cases {
                    self.require(
                        "case",
                        id,
                        case,
                        matches!(self.ast.kind(case), NodeKind::SwitchCase(_)),
                    );
                    if let NodeKind::SwitchCase(c) = self.ast.kind(case) {
                        if c.expression.is_none() {
                            defaults += 1;
                            if defaults > 1 {
                                self.error(
                                    AstErrorKind::DuplicateDefaultClause,
                                    case,
                                    format!("switch {} has more than one default clause", id.0),
                                );
                            }
                        }
                    }
                }
            }
            NodeKind::Return(d) => {
                if let Some(a) = d.argument {
                    self.require_expr("argument", id, a);
                }
            }
            NodeKind::Throw(d) => self.require_expr("argument", id, d.argument),
            NodeKind::Try(d) => {
                self.require(
                    "block",
                    id,
                    d.block,
                    matches!(self.ast.kind(d.block), NodeKind::Block(_)),
                );
                if let Some(h) = d.handler {
                    self.require(
                        "handler",
                        id,
                        h,
                        matches!(self.ast.kind(h), NodeKind::CatchClause(_)),
                    );
                }
                if let Some(f) = d.finalizer {
                    self.require(
                        "finalizer",
                        id,
                        f,
                        matches!(self.ast.kind(f), NodeKind::Block(_)),
                    );
                }
            }
            NodeKind::While(d) => {
                self.require_expr("condition", id, d.condition);
                self.require_stmt("body", id, d.body);
            }
            NodeKind::DoWhile(d) => {
                self.require_expr("condition", id, d.condition);
                self.require_stmt("body", id, d.body);
            }
            NodeKind::For(d) => {
                if let Some(c) = d.condition {
                    self.require_expr("condition", id, c);
                }
                if let Some(u) = d.update {
                    self.require_expr("update", id, u);
                }
                self.require_stmt("body", id, d.body);
            }
            NodeKind::ForIn(d) => {
                self.require_expr("right", id, d.right);
                self.require_stmt("body", id, d.body);
            }
            NodeKind::FunctionDeclaration(d) => {
                self.require(
                    "function",
                    id,
                    d.function,
                    matches!(self.ast.kind(d.function), NodeKind::FunctionNode(_)),
                );
            }
            NodeKind::VariableDeclaration(d) => {
                for &v in &d.declarators {
                    self.require(
                        "declarator",
                        id,
                        v,
                        matches!(self.ast.kind(v), NodeKind::VariableDeclarator(_)),
                    );
                }
            }
            NodeKind::Array(d) => {
                for &slot in &d.elements {
                    if let Some(e) = slot {
                        self.require_expr("element", id, e);
                    }
                }
            }
            NodeKind::Object(d) => {
                for &p in &d.properties {
                    self.require(
                        "property",
                        id,
                        p,
                        matches!(self.ast.kind(p), NodeKind::Property(_)),
                    );
                }
            }
            NodeKind::FunctionExpression(d) => {
                self.require(
                    "function",
                    id,
                    d.function,
                    matches!(self.ast.kind(d.function), NodeKind::FunctionNode(_)),
                );
            }
            NodeKind::Sequence(d) => {
                for &e in &d.expressions {
                    self.require_expr("expression", id, e);
                }
            }
            NodeKind::Unary(d) => self.require_expr("argument", id, d.argument),
            NodeKind::Binary(d) => {
                self.require_expr("left", id, d.left);
                self.require_expr("right", id, d.right);
            }
            NodeKind::Assignment(d) => {
                self.require_expr("left", id, d.left);
                self.require_expr("right", id, d.right);
            }
            NodeKind::Update(d) => self.require_expr("argument", id, d.argument),
            NodeKind::Conditional(d) => {
                self.require_expr("condition", id, d.condition);
                self.require_expr("then", id, d.then_branch);
                self.require_expr("else", id, d.else_branch);
            }
            NodeKind::Call(d) => {
                self.require_expr("callee", id, d.callee);
                for &a in &d.arguments {
                    self.require_expr("argument", id, a);
                }
            }
            NodeKind::Member(d) => {
                self.require_expr("object", id, d.object);
                self.require_name("property", id, d.property);
            }
            NodeKind::Index(d) => {
                self.require_expr("object", id, d.object);
                self.require_expr("property", id, d.property);
            }
            NodeKind::NameExpression(d) => self.require_name("name", id, d.name),
            NodeKind::Literal(_) | NodeKind::Regexp(_) | NodeKind::Name(_) => {}
            NodeKind::Programs(d) => {
                for &p in &d.programs {
                    self.require(
                        "program",
                        id,
                        p,
                        matches!(self.ast.kind(p), NodeKind::Program(_)),
                    );
                }
            }
            NodeKind::Program(d) => {
                for &s in &d.body {
                    self.require_stmt("body", id, s);
                }
            }
            NodeKind::FunctionNode(d) => {
                if let Some(n) = d.name {
                    self.require_name("name", id, n);
                }
                for &p in &d.params {
                    self.require_name("param", id, p);
                }
                self.require_stmt("body", id, d.body);
            }
            NodeKind::Property(d) => {
                self.require(
                    "key",
                    id,
                    d.key,
                    matches!(
                        self.ast.kind(d.key),
                        NodeKind::Name(_) | NodeKind::Literal(_)
                    ),
                );
                match d.kind {
                    PropertyKind::Get | PropertyKind::Set => {
                        if !matches!(self.ast.kind(d.value), NodeKind::FunctionNode(_)) {
                            self.error(
                                AstErrorKind::AccessorValueNotFunction,
                                d.value,
                                format!(
                                    "accessor property {} has {} value",
                                    id.0,
                                    self.ast.kind(d.value).name()
                                ),
                            );
                        }
                    }
                    PropertyKind::Init => {
                        if !self.ast.kind(d.value).is_expression() {
                            self.error(
                                AstErrorKind::InitValueNotExpression,
                                d.value,
                                format!(
                                    "init property {} has {} value",
                                    id.0,
                                    self.ast.kind(d.value).name()
                                ),
                            );
                        }
                    }
                }
            }
            NodeKind::SwitchCase(d) => {
                if let Some(e) = d.expression {
                    self.require_expr("expression", id, e);
                }
                for &s in &d.body {
                    self.require_stmt("body", id, s);
                }
            }
            NodeKind::VariableDeclarator(d) => {
                self.require_name("name", id, d.name);
                if let Some(i) = d.init {
                    self.require_expr("init", id, i);
                }
            }
            NodeKind::CatchClause(d) => {
                self.require_name("param", id, d.param);
                self.require(
                    "body",
                    id,
                    d.body,
                    matches!(self.ast.kind(d.body), NodeKind::Block(_)),
                );
            }
        }
    }
}

impl Ast {
    /// Check the subtree rooted at `root` and collect every violation.
    /// An empty result means the tree upholds the structural invariants.
    pub fn validate(&self, root: NodeId) -> Vec<AstError> {
        let mut v = Validator {
            ast: self,
            errors: Vec::new(),
        };
        v.check(root);
        tracing::trace!(root = root.0, errors = v.errors.len(), "validate");
        v.errors
    }
}
