//! Typed payload accessors, ancestor queries, and structural classification.
//!
//! Accessors panic on a kind mismatch: asking for the If payload of a node
//! that is not an If means the caller is already operating on a corrupt view
//! of the tree. Ancestor queries fail soft and return `None` for orphans.

use super::arena::Ast;
use super::node::*;
use crate::span::Location;

macro_rules! data_accessors {
    ($(($name:ident, $name_mut:ident, $variant:ident, $ty:ty)),+ $(,)?) => {
        impl Ast {
            $(
                #[inline]
                pub fn $name(&self, id: NodeId) -> &$ty {
                    match &self.node(id).kind {
                        NodeKind::$variant(data) => data,
                        other => panic!(
                            concat!("expected ", stringify!($variant), " node, found {}"),
                            other.name()
                        ),
                    }
                }

                #[inline]
                pub fn $name_mut(&mut self, id: NodeId) -> &mut $ty {
                    match &mut self.node_mut(id).kind {
                        NodeKind::$variant(data) => data,
                        other => panic!(
                            concat!("expected ", stringify!($variant), " node, found {}"),
                            other.name()
                        ),
                    }
                }
            )+
        }
    };
}

data_accessors!(
    (block_data, block_data_mut, Block, BlockData),
    (expression_statement_data, expression_statement_data_mut, ExpressionStatement, ExpressionStatementData),
    (if_data, if_data_mut, If, IfData),
    (labeled_data, labeled_data_mut, Labeled, LabeledData),
    (break_data, break_data_mut, Break, BreakData),
    (continue_data, continue_data_mut, Continue, ContinueData),
    (with_data, with_data_mut, With, WithData),
    (switch_data, switch_data_mut, Switch, SwitchData),
    (return_data, return_data_mut, Return, ReturnData),
    (throw_data, throw_data_mut, Throw, ThrowData),
    (try_data, try_data_mut, Try, TryData),
    (while_data, while_data_mut, While, WhileData),
    (do_while_data, do_while_data_mut, DoWhile, DoWhileData),
    (for_data, for_data_mut, For, ForData),
    (for_in_data, for_in_data_mut, ForIn, ForInData),
    (function_declaration_data, function_declaration_data_mut, FunctionDeclaration, FunctionDeclarationData),
    (variable_declaration_data, variable_declaration_data_mut, VariableDeclaration, VariableDeclarationData),
    (array_data, array_data_mut, Array, ArrayData),
    (object_data, object_data_mut, Object, ObjectData),
    (function_expression_data, function_expression_data_mut, FunctionExpression, FunctionExpressionData),
    (sequence_data, sequence_data_mut, Sequence, SequenceData),
    (unary_data, unary_data_mut, Unary, UnaryData),
    (binary_data, binary_data_mut, Binary, BinaryData),
    (assignment_data, assignment_data_mut, Assignment, AssignmentData),
    (update_data, update_data_mut, Update, UpdateData),
    (conditional_data, conditional_data_mut, Conditional, ConditionalData),
    (call_data, call_data_mut, Call, CallData),
    (member_data, member_data_mut, Member, MemberData),
    (index_data, index_data_mut, Index, IndexData),
    (name_expression_data, name_expression_data_mut, NameExpression, NameExpressionData),
    (literal_data, literal_data_mut, Literal, LiteralData),
    (regexp_data, regexp_data_mut, Regexp, RegexpData),
    (programs_data, programs_data_mut, Programs, ProgramsData),
    (program_data, program_data_mut, Program, ProgramData),
    (function_data, function_data_mut, FunctionNode, FunctionData),
    (name_data, name_data_mut, Name, NameData),
    (property_data, property_data_mut, Property, PropertyData),
    (switch_case_data, switch_case_data_mut, SwitchCase, SwitchCaseData),
    (variable_declarator_data, variable_declarator_data_mut, VariableDeclarator, VariableDeclaratorData),
    (catch_clause_data, catch_clause_data_mut, CatchClause, CatchClauseData),
);

impl Ast {
    // ==========================================================================
    // Ancestor queries (fail soft: orphans yield None)
    // ==========================================================================

    /// Nearest enclosing Program, starting at the node itself so a Program's
    /// own location resolves to its own filename.
    pub fn enclosing_program(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if matches!(self.kind(current), NodeKind::Program(_)) {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }

    /// Nearest enclosing FunctionNode, starting at the parent: asking from a
    /// FunctionNode finds the next function out, not itself.
    pub fn enclosing_function(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = self.parent(id);
        while let Some(current) = cursor {
            if matches!(self.kind(current), NodeKind::FunctionNode(_)) {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }

    /// Filename of the enclosing Program plus the node's own line.
    pub fn location(&self, id: NodeId) -> Option<Location> {
        let program = self.enclosing_program(id)?;
        Some(Location {
            filename: self.program_data(program).filename.clone(),
            line: self.line(id),
        })
    }

    // ==========================================================================
    // Name classification
    //
    // Computed from the parent's variant and the slot this Name occupies,
    // never cached: re-parenting a Name changes the answers on the next call.
    // ==========================================================================

    /// True when this Name is a property mention: the `property` slot of a
    /// Member expression, or the `key` slot of an object Property.
    pub fn name_is_property(&self, id: NodeId) -> bool {
        let _ = self.name_data(id);
        match self.parent(id) {
            Some(parent) => match self.kind(parent) {
                NodeKind::Member(m) => m.property == id,
                NodeKind::Property(p) => p.key == id,
                _ => false,
            },
            None => false,
        }
    }

    /// True when this Name is a statement label: the label of a Labeled
    /// statement or the target of a Break/Continue.
    pub fn name_is_label(&self, id: NodeId) -> bool {
        let _ = self.name_data(id);
        match self.parent(id) {
            Some(parent) => match self.kind(parent) {
                NodeKind::Labeled(l) => l.label == id,
                NodeKind::Break(b) => b.label == Some(id),
                NodeKind::Continue(c) => c.label == Some(id),
                _ => false,
            },
            None => false,
        }
    }

    /// True when this Name denotes a variable: any position that is neither
    /// a property mention nor a label (declarator names, parameters, function
    /// names, catch parameters, NameExpression mentions, …).
    pub fn name_is_variable(&self, id: NodeId) -> bool {
        !self.name_is_property(id) && !self.name_is_label(id)
    }

    // ==========================================================================
    // FunctionNode / Property classification
    // ==========================================================================

    pub fn function_is_expression(&self, id: NodeId) -> bool {
        let _ = self.function_data(id);
        match self.parent(id) {
            Some(parent) => match self.kind(parent) {
                NodeKind::FunctionExpression(f) => f.function == id,
                _ => false,
            },
            None => false,
        }
    }

    pub fn function_is_declaration(&self, id: NodeId) -> bool {
        let _ = self.function_data(id);
        match self.parent(id) {
            Some(parent) => match self.kind(parent) {
                NodeKind::FunctionDeclaration(f) => f.function == id,
                _ => false,
            },
            None => false,
        }
    }

    /// True when this FunctionNode is the value of a getter or setter
    /// Property. A function-valued `init` property is not an accessor.
    pub fn function_is_accessor(&self, id: NodeId) -> bool {
        let _ = self.function_data(id);
        match self.parent(id) {
            Some(parent) => match self.kind(parent) {
                NodeKind::Property(p) => p.value == id && p.kind != PropertyKind::Init,
                _ => false,
            },
            None => false,
        }
    }

    pub fn property_is_accessor(&self, id: NodeId) -> bool {
        self.property_data(id).kind != PropertyKind::Init
    }
}
