//! Double-dispatch visitor protocol.
//!
//! Two trait arities: `Visitor<T>` for stateless traversal and
//! `Visitor1<T, A>` for traversal threading one caller-supplied argument.
//! Each trait has exactly one required method per node kind and no default
//! bodies, so adding a kind refuses to compile until every implementation
//! is extended; the `accept`/`accept1` matches are exhaustive for the same
//! reason. Handlers receive the arena, the node id, and the payload; pure
//! recursion is written by calling `for_each_child` and re-dispatching.

use super::arena::Ast;
use super::node::*;

/// Handler set, one method per node kind, dispatched without an extra
/// argument.
pub trait Visitor<T> {
    fn visit_empty(&mut self, ast: &Ast, node: NodeId) -> T;
    fn visit_block(&mut self, ast: &Ast, node: NodeId, data: &BlockData) -> T;
    fn visit_expression_statement(
        &mut self,
        ast: &Ast,
        node: NodeId,
        data: &ExpressionStatementData,
    ) -> T;
    fn visit_if(&mut self, ast: &Ast, node: NodeId, data: &IfData) -> T;
    fn visit_labeled(&mut self, ast: &Ast, node: NodeId, data: &LabeledData) -> T;
    fn visit_break(&mut self, ast: &Ast, node: NodeId, data: &BreakData) -> T;
    fn visit_continue(&mut self, ast: &Ast, node: NodeId, data: &ContinueData) -> T;
    fn visit_with(&mut self, ast: &Ast, node: NodeId, data: &WithData) -> T;
    fn visit_switch(&mut self, ast: &Ast, node: NodeId, data: &SwitchData) -> T;
    fn visit_return(&mut self, ast: &Ast, node: NodeId, data: &ReturnData) -> T;
    fn visit_throw(&mut self, ast: &Ast, node: NodeId, data: &ThrowData) -> T;
    fn visit_try(&mut self, ast: &Ast, node: NodeId, data: &TryData) -> T;
    fn visit_while(&mut self, ast: &Ast, node: NodeId, data: &WhileData) -> T;
    fn visit_do_while(&mut self, ast: &Ast, node: NodeId, data: &DoWhileData) -> T;
    fn visit_for(&mut self, ast: &Ast, node: NodeId, data: &ForData) -> T;
    fn visit_for_in(&mut self, ast: &Ast, node: NodeId, data: &ForInData) -> T;
    fn visit_function_declaration(
        &mut self,
        ast: &Ast,
        node: NodeId,
        data: &FunctionDeclarationData,
    ) -> T;
    fn visit_variable_declaration(
        &mut self,
        ast: &Ast,
        node: NodeId,
        data: &VariableDeclarationData,
    ) -> T;
    fn visit_debugger(&mut self, ast: &Ast, node: NodeId) -> T;

    fn visit_this(&mut self, ast: &Ast, node: NodeId) -> T;
    fn visit_array(&mut self, ast: &Ast, node: NodeId, data: &ArrayData) -> T;
    fn visit_object(&mut self, ast: &Ast, node: NodeId, data: &ObjectData) -> T;
    fn visit_function_expression(
        &mut self,
        ast: &Ast,
        node: NodeId,
        data: &FunctionExpressionData,
    ) -> T;
    fn visit_sequence(&mut self, ast: &Ast, node: NodeId, data: &SequenceData) -> T;
    fn visit_unary(&mut self, ast: &Ast, node: NodeId, data: &UnaryData) -> T;
    fn visit_binary(&mut self, ast: &Ast, node: NodeId, data: &BinaryData) -> T;
    fn visit_assignment(&mut self, ast: &Ast, node: NodeId, data: &AssignmentData) -> T;
    fn visit_update(&mut self, ast: &Ast, node: NodeId, data: &UpdateData) -> T;
    fn visit_conditional(&mut self, ast: &Ast, node: NodeId, data: &ConditionalData) -> T;
    fn visit_call(&mut self, ast: &Ast, node: NodeId, data: &CallData) -> T;
    fn visit_member(&mut self, ast: &Ast, node: NodeId, data: &MemberData) -> T;
    fn visit_index(&mut self, ast: &Ast, node: NodeId, data: &IndexData) -> T;
    fn visit_name_expression(&mut self, ast: &Ast, node: NodeId, data: &NameExpressionData) -> T;
    fn visit_literal(&mut self, ast: &Ast, node: NodeId, data: &LiteralData) -> T;
    fn visit_regexp(&mut self, ast: &Ast, node: NodeId, data: &RegexpData) -> T;

    fn visit_programs(&mut self, ast: &Ast, node: NodeId, data: &ProgramsData) -> T;
    fn visit_program(&mut self, ast: &Ast, node: NodeId, data: &ProgramData) -> T;
    fn visit_function_node(&mut self, ast: &Ast, node: NodeId, data: &FunctionData) -> T;
    fn visit_name(&mut self, ast: &Ast, node: NodeId, data: &NameData) -> T;
    fn visit_property(&mut self, ast: &Ast, node: NodeId, data: &PropertyData) -> T;
    fn visit_switch_case(&mut self, ast: &Ast, node: NodeId, data: &SwitchCaseData) -> T;
    fn visit_variable_declarator(
        &mut self,
        ast: &Ast,
        node: NodeId,
        data: &VariableDeclaratorData,
    ) -> T;
    fn visit_catch_clause(&mut self, ast: &Ast, node: NodeId, data: &CatchClauseData) -> T;
}

/// Handler set, one method per node kind, dispatched with one caller-supplied
/// argument of type `A`.
pub trait Visitor1<T, A> {
    fn visit_empty(&mut self, ast: &Ast, node: NodeId, arg: A) -> T;
    fn visit_block(&mut self, ast: &Ast, node: NodeId, data: &BlockData, arg: A) -> T;
    fn visit_expression_statement(
        &mut self,
        ast: &Ast,
        node: NodeId,
        data: &ExpressionStatementData,
        arg: A,
    ) -> T;
    fn visit_if(&mut self, ast: &Ast, node: NodeId, data: &IfData, arg: A) -> T;
    fn visit_labeled(&mut self, ast: &Ast, node: NodeId, data: &LabeledData, arg: A) -> T;
    fn visit_break(&mut self, ast: &Ast, node: NodeId, data: &BreakData, arg: A) -> T;
    fn visit_continue(&mut self, ast: &Ast, node: NodeId, data: &ContinueData, arg: A) -> T;
    fn visit_with(&mut self, ast: &Ast, node: NodeId, data: &WithData, arg: A) -> T;
    fn visit_switch(&mut self, ast: &Ast, node: NodeId, data: &SwitchData, arg: A) -> T;
    fn visit_return(&mut self, ast: &Ast, node: NodeId, data: &ReturnData, arg: A) -> T;
    fn visit_throw(&mut self, ast: &Ast, node: NodeId, data: &ThrowData, arg: A) -> T;
    fn visit_try(&mut self, ast: &Ast, node: NodeId, data: &TryData, arg: A) -> T;
    fn visit_while(&mut self, ast: &Ast, node: NodeId, data: &WhileData, arg: A) -> T;
    fn visit_do_while(&mut self, ast: &Ast, node: NodeId, data: &DoWhileData, arg: A) -> T;
    fn visit_for(&mut self, ast: &Ast, node: NodeId, data: &ForData, arg: A) -> T;
    fn visit_for_in(&mut self, ast: &Ast, node: NodeId, data: &ForInData, arg: A) -> T;
    fn visit_function_declaration(
        &mut self,
        ast: &Ast,
        node: NodeId,
        data: &FunctionDeclarationData,
        arg: A,
    ) -> T;
    fn visit_variable_declaration(
        &mut self,
        ast: &Ast,
        node: NodeId,
        data: &VariableDeclarationData,
        arg: A,
    ) -> T;
    fn visit_debugger(&mut self, ast: &Ast, node: NodeId, arg: A) -> T;

    fn visit_this(&mut self, ast: &Ast, node: NodeId, arg: A) -> T;
    fn visit_array(&mut self, ast: &Ast, node: NodeId, data: &ArrayData, arg: A) -> T;
    fn visit_object(&mut self, ast: &Ast, node: NodeId, data: &ObjectData, arg: A) -> T;
    fn visit_function_expression(
        &mut self,
        ast: &Ast,
        node: NodeId,
        data: &FunctionExpressionData,
        arg: A,
    ) -> T;
    fn visit_sequence(&mut self, ast: &Ast, node: NodeId, data: &SequenceData, arg: A) -> T;
    fn visit_unary(&mut self, ast: &Ast, node: NodeId, data: &UnaryData, arg: A) -> T;
    fn visit_binary(&mut self, ast: &Ast, node: NodeId, data: &BinaryData, arg: A) -> T;
    fn visit_assignment(&mut self, ast: &Ast, node: NodeId, data: &AssignmentData, arg: A) -> T;
    fn visit_update(&mut self, ast: &Ast, node: NodeId, data: &UpdateData, arg: A) -> T;
    fn visit_conditional(&mut self, ast: &Ast, node: NodeId, data: &ConditionalData, arg: A) -> T;
    fn visit_call(&mut self, ast: &Ast, node: NodeId, data: &CallData, arg: A) -> T;
    fn visit_member(&mut self, ast: &Ast, node: NodeId, data: &MemberData, arg: A) -> T;
    fn visit_index(&mut self, ast: &Ast, node: NodeId, data: &IndexData, arg: A) -> T;
    fn visit_name_expression(
        &mut self,
        ast: &Ast,
        node: NodeId,
        data: &NameExpressionData,
        arg: A,
    ) -> T;
    fn visit_literal(&mut self, ast: &Ast, node: NodeId, data: &LiteralData, arg: A) -> T;
    fn visit_regexp(&mut self, ast: &Ast, node: NodeId, data: &RegexpData, arg: A) -> T;

    fn visit_programs(&mut self, ast: &Ast, node: NodeId, data: &ProgramsData, arg: A) -> T;
    fn visit_program(&mut self, ast: &Ast, node: NodeId, data: &ProgramData, arg: A) -> T;
    fn visit_function_node(&mut self, ast: &Ast, node: NodeId, data: &FunctionData, arg: A) -> T;
    fn visit_name(&mut self, ast: &Ast, node: NodeId, data: &NameData, arg: A) -> T;
    fn visit_property(&mut self, ast: &Ast, node: NodeId, data: &PropertyData, arg: A) -> T;
    fn visit_switch_case(&mut self, ast: &Ast, node: NodeId, data: &SwitchCaseData, arg: A) -> T;
    fn visit_variable_declarator(
        &mut self,
        ast: &Ast,
        node: NodeId,
        data: &VariableDeclaratorData,
        arg: A,
    ) -> T;
    fn visit_catch_clause(&mut self, ast: &Ast, node: NodeId, data: &CatchClauseData, arg: A) -> T;
}

impl Ast {
    /// Dispatch to the single `Visitor` method matching the node's kind.
    pub fn accept<T, V: Visitor<T> + ?Sized>(&self, node: NodeId, visitor: &mut V) -> T {
        match self.kind(node) {
            NodeKind::Empty => visitor.visit_empty(self, node),
            NodeKind::Block(d) => visitor.visit_block(self, node, d),
            NodeKind::ExpressionStatement(d) => visitor.visit_expression_statement(self, node, d),
            NodeKind::If(d) => visitor.visit_if(self, node, d),
            NodeKind::Labeled(d) => visitor.visit_labeled(self, node, d),
            NodeKind::Break(d) => visitor.visit_break(self, node, d),
            NodeKind::Continue(d) => visitor.visit_continue(self, node, d),
            NodeKind::With(d) => visitor.visit_with(self, node, d),
            NodeKind::Switch(d) => visitor.visit_switch(self, node, d),
            NodeKind::Return(d) => visitor.visit_return(self, node, d),
            NodeKind::Throw(d) => visitor.visit_throw(self, node, d),
            NodeKind::Try(d) => visitor.visit_try(self, node, d),
            NodeKind::While(d) => visitor.visit_while(self, node, d),
            NodeKind::DoWhile(d) => visitor.visit_do_while(self, node, d),
            NodeKind::For(d) => visitor.visit_for(self, node, d),
            NodeKind::ForIn(d) => visitor.visit_for_in(self, node, d),
            NodeKind::FunctionDeclaration(d) => visitor.visit_function_declaration(self, node, d),
            NodeKind::VariableDeclaration(d) => visitor.visit_variable_declaration(self, node, d),
            NodeKind::Debugger => visitor.visit_debugger(self, node),
            NodeKind::This => visitor.visit_this(self, node),
            NodeKind::Array(d) => visitor.visit_array(self, node, d),
            NodeKind::Object(d) => visitor.visit_object(self, node, d),
            NodeKind::FunctionExpression(d) => visitor.visit_function_expression(self, node, d),
            NodeKind::Sequence(d) => visitor.visit_sequence(self, node, d),
            NodeKind::Unary(d) => visitor.visit_unary(self, node, d),
            NodeKind::Binary(d) => visitor.visit_binary(self, node, d),
            NodeKind::Assignment(d) => visitor.visit_assignment(self, node, d),
            NodeKind::Update(d) => visitor.visit_update(self, node, d),
            NodeKind::Conditional(d) => visitor.visit_conditional(self, node, d),
            NodeKind::Call(d) => visitor.visit_call(self, node, d),
            NodeKind::Member(d) => visitor.visit_member(self, node, d),
            NodeKind::Index(d) => visitor.visit_index(self, node, d),
            NodeKind::NameExpression(d) => visitor.visit_name_expression(self, node, d),
            NodeKind::Literal(d) => visitor.visit_literal(self, node, d),
            NodeKind::Regexp(d) => visitor.visit_regexp(self, node, d),
            NodeKind::Programs(d) => visitor.visit_programs(self, node, d),
            NodeKind::Program(d) => visitor.visit_program(self, node, d),
            NodeKind::FunctionNode(d) => visitor.visit_function_node(self, node, d),
            NodeKind::Name(d) => visitor.visit_name(self, node, d),
            NodeKind::Property(d) => visitor.visit_property(self, node, d),
            NodeKind::SwitchCase(d) => visitor.visit_switch_case(self, node, d),
            NodeKind::VariableDeclarator(d) => visitor.visit_variable_declarator(self, node, d),
            NodeKind::CatchClause(d) => visitor.visit_catch_clause(self, node, d),
        }
    }

    /// Dispatch to the single `Visitor1` method matching the node's kind,
    /// threading the caller-supplied argument through.
    pub fn accept1<T, A, V: Visitor1<T, A> + ?Sized>(
        &self,
        node: NodeId,
        visitor: &mut V,
        arg: A,
    ) -> T {
        match self.kind(node) {
            NodeKind::Empty => visitor.visit_empty(self, node, arg),
            NodeKind::Block(d) => visitor.visit_block(self, node, d, arg),
            NodeKind::ExpressionStatement(d) => {
                visitor.visit_expression_statement(self, node, d, arg)
            }
            NodeKind::If(d) => visitor.visit_if(self, node, d, arg),
            NodeKind::Labeled(d) => visitor.visit_labeled(self, node, d, arg),
            NodeKind::Break(d) => visitor.visit_break(self, node, d, arg),
            NodeKind::Continue(d) => visitor.visit_continue(self, node, d, arg),
            NodeKind::With(d) => visitor.visit_with(self, node, d, arg),
            NodeKind::Switch(d) => visitor.visit_switch(self, node, d, arg),
            NodeKind::Return(d) => visitor.visit_return(self, node, d, arg),
            NodeKind::Throw(d) => visitor.visit_throw(self, node, d, arg),
            NodeKind::Try(d) => visitor.visit_try(self, node, d, arg),
            NodeKind::While(d) => visitor.visit_while(self, node, d, arg),
            NodeKind::DoWhile(d) => visitor.visit_do_while(self, node, d, arg),
            NodeKind::For(d) => visitor.visit_for(self, node, d, arg),
            NodeKind::ForIn(d) => visitor.visit_for_in(self, node, d, arg),
            NodeKind::FunctionDeclaration(d) => {
                visitor.visit_function_declaration(self, node, d, arg)
            }
            NodeKind::VariableDeclaration(d) => {
                visitor.visit_variable_declaration(self, node, d, arg)
            }
            NodeKind::Debugger => visitor.visit_debugger(self, node, arg),
            NodeKind::This => visitor.visit_this(self, node, arg),
            NodeKind::Array(d) => visitor.visit_array(self, node, d, arg),
            NodeKind::Object(d) => visitor.visit_object(self, node, d, arg),
            NodeKind::FunctionExpression(d) => {
                visitor.visit_function_expression(self, node, d, arg)
            }
            NodeKind::Sequence(d) => visitor.visit_sequence(self, node, d, arg),
            NodeKind::Unary(d) => visitor.visit_unary(self, node, d, arg),
            NodeKind::Binary(d) => visitor.visit_binary(self, node, d, arg),
            NodeKind::Assignment(d) => visitor.visit_assignment(self, node, d, arg),
            NodeKind::Update(d) => visitor.visit_update(self, node, d, arg),
            NodeKind::Conditional(d) => visitor.visit_conditional(self, node, d, arg),
            NodeKind::Call(d) => visitor.visit_call(self, node, d, arg),
            NodeKind::Member(d) => visitor.visit_member(self, node, d, arg),
            NodeKind::Index(d) => visitor.visit_index(self, node, d, arg),
            NodeKind::NameExpression(d) => visitor.visit_name_expression(self, node, d, arg),
            NodeKind::Literal(d) => visitor.visit_literal(self, node, d, arg),
            NodeKind::Regexp(d) => visitor.visit_regexp(self, node, d, arg),
            NodeKind::Programs(d) => visitor.visit_programs(self, node, d, arg),
            NodeKind::Program(d) => visitor.visit_program(self, node, d, arg),
            NodeKind::FunctionNode(d) => visitor.visit_function_node(self, node, d, arg),
            NodeKind::Name(d) => visitor.visit_name(self, node, d, arg),
            NodeKind::Property(d) => visitor.visit_property(self, node, d, arg),
            NodeKind::SwitchCase(d) => visitor.visit_switch_case(self, node, d, arg),
            NodeKind::VariableDeclarator(d) => {
                visitor.visit_variable_declarator(self, node, d, arg)
            }
            NodeKind::CatchClause(d) => visitor.visit_catch_clause(self, node, d, arg),
        }
    }
}
