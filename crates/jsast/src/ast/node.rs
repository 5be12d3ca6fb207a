//! The node catalog: `NodeId`, the thin `Node` record, `NodeKind` with one
//! variant per concrete kind, and the per-variant payload structs.
//!
//! Kinds fall into three disjoint families: statements, expressions, and
//! structural helpers (Program, FunctionNode, Name, Property, SwitchCase,
//! VariableDeclarator, CatchClause, plus the Programs batching container).
//! Optional children are `Option<NodeId>`; the only list allowed to contain
//! holes is an array literal's element list, where a `None` slot is an
//! elision (`[1, , 3]`).

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::span::Span;

/// Arena handle for a node. Plain index into `Ast::nodes`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One tree element: its kind (with payload), a non-owning parent back-link,
/// and source bookkeeping. The parent pointer is wired by `Ast::add_*` when
/// the parent is constructed; after a structural edit the caller must re-wire
/// it with `Ast::set_parent`.
#[derive(Debug, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub span: Span,
    /// 1-based source line.
    pub line: u32,
}

/// Literal values carry their own tag so downstream handling of literal
/// kinds stays exhaustive.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Delete,
    Void,
    TypeOf,
    Plus,
    Minus,
    BitNot,
    Not,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Delete => "delete",
            UnaryOp::Void => "void",
            UnaryOp::TypeOf => "typeof",
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::BitNot => "~",
            UnaryOp::Not => "!",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Shl,
    Shr,
    UShr,
    BitAnd,
    BitOr,
    BitXor,
    LogicalAnd,
    LogicalOr,
    In,
    InstanceOf,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::StrictEq => "===",
            BinaryOp::StrictNotEq => "!==",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::UShr => ">>>",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
            BinaryOp::In => "in",
            BinaryOp::InstanceOf => "instanceof",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    ShlAssign,
    ShrAssign,
    UShrAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
            AssignOp::MulAssign => "*=",
            AssignOp::DivAssign => "/=",
            AssignOp::ModAssign => "%=",
            AssignOp::ShlAssign => "<<=",
            AssignOp::ShrAssign => ">>=",
            AssignOp::UShrAssign => ">>>=",
            AssignOp::BitAndAssign => "&=",
            AssignOp::BitOrAssign => "|=",
            AssignOp::BitXorAssign => "^=",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum UpdateOp {
    Increment,
    Decrement,
}

impl UpdateOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateOp::Increment => "++",
            UpdateOp::Decrement => "--",
        }
    }
}

// ============================================================================
// Payload structs (statements)
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BlockData {
    pub body: Vec<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct ExpressionStatementData {
    pub expression: NodeId,
}

#[derive(Debug, Serialize)]
pub struct IfData {
    pub condition: NodeId,
    pub then_branch: NodeId,
    pub else_branch: Option<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct LabeledData {
    /// Always a Name.
    pub label: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Serialize)]
pub struct BreakData {
    pub label: Option<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct ContinueData {
    pub label: Option<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct WithData {
    pub object: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Serialize)]
pub struct SwitchData {
    pub argument: NodeId,
    /// SwitchCase nodes, in source order.
    pub cases: Vec<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct ReturnData {
    pub argument: Option<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct ThrowData {
    pub argument: NodeId,
}

#[derive(Debug, Serialize)]
pub struct TryData {
    pub block: NodeId,
    /// CatchClause, absent for try/finally.
    pub handler: Option<NodeId>,
    pub finalizer: Option<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct WhileData {
    pub condition: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Serialize)]
pub struct DoWhileData {
    pub condition: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Serialize)]
pub struct ForData {
    pub init: Option<NodeId>,
    pub condition: Option<NodeId>,
    pub update: Option<NodeId>,
    pub body: NodeId,
}

#[derive(Debug, Serialize)]
pub struct ForInData {
    pub left: NodeId,
    pub right: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Serialize)]
pub struct FunctionDeclarationData {
    /// Always a FunctionNode.
    pub function: NodeId,
}

#[derive(Debug, Serialize)]
pub struct VariableDeclarationData {
    /// VariableDeclarator nodes, in declaration (evaluation) order.
    pub declarators: Vec<NodeId>,
}

// ============================================================================
// Payload structs (expressions)
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ArrayData {
    /// `None` slots are elisions and survive as holes; enumeration skips
    /// them but the slot count is preserved.
    pub elements: Vec<Option<NodeId>>,
}

#[derive(Debug, Serialize)]
pub struct ObjectData {
    /// Property nodes, in source order.
    pub properties: Vec<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct FunctionExpressionData {
    /// Always a FunctionNode.
    pub function: NodeId,
}

#[derive(Debug, Serialize)]
pub struct SequenceData {
    pub expressions: Vec<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct UnaryData {
    pub operator: UnaryOp,
    pub argument: NodeId,
}

#[derive(Debug, Serialize)]
pub struct BinaryData {
    pub left: NodeId,
    pub operator: BinaryOp,
    pub right: NodeId,
}

#[derive(Debug, Serialize)]
pub struct AssignmentData {
    pub left: NodeId,
    pub operator: AssignOp,
    pub right: NodeId,
}

#[derive(Debug, Serialize)]
pub struct UpdateData {
    pub operator: UpdateOp,
    pub argument: NodeId,
    pub prefix: bool,
}

#[derive(Debug, Serialize)]
pub struct ConditionalData {
    pub condition: NodeId,
    pub then_branch: NodeId,
    pub else_branch: NodeId,
}

#[derive(Debug, Serialize)]
pub struct CallData {
    pub callee: NodeId,
    pub arguments: Vec<NodeId>,
    /// `new f(...)` shares the call shape.
    pub is_new: bool,
}

#[derive(Debug, Serialize)]
pub struct MemberData {
    pub object: NodeId,
    /// Always a Name (`a.b`); computed access is the Index kind.
    pub property: NodeId,
}

#[derive(Debug, Serialize)]
pub struct IndexData {
    pub object: NodeId,
    /// An arbitrary expression (`a[b]`).
    pub property: NodeId,
}

#[derive(Debug, Serialize)]
pub struct NameExpressionData {
    /// Always a Name.
    pub name: NodeId,
}

#[derive(Debug, Serialize)]
pub struct LiteralData {
    pub value: LiteralValue,
    /// Raw source spelling, kept for faithful re-printing.
    pub raw: String,
}

#[derive(Debug, Serialize)]
pub struct RegexpData {
    /// Raw source spelling including delimiters and flags.
    pub raw: String,
}

// ============================================================================
// Payload structs (structure)
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProgramsData {
    /// Program roots. Batching convenience only; never produced by parsing.
    pub programs: Vec<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct ProgramData {
    /// Diagnostic label chosen by the producer; not validated as a path.
    pub filename: String,
    pub body: Vec<NodeId>,
    /// Locally declared identifiers. Empty until a binding pass runs.
    pub environment: FxHashSet<String>,
}

#[derive(Debug, Serialize)]
pub struct FunctionData {
    /// Absent for anonymous function expressions. Always a Name when present.
    pub name: Option<NodeId>,
    /// Parameter Names, in declaration order.
    pub params: Vec<NodeId>,
    pub body: NodeId,
    /// Locally declared identifiers. A binding pass also inserts the
    /// implicit "arguments" entry; construction leaves this empty.
    pub environment: FxHashSet<String>,
}

#[derive(Debug, Serialize)]
pub struct NameData {
    /// Identifier text with escapes already decoded.
    pub text: String,
    /// Declaring scope, written by a binding pass. The model never verifies
    /// the target is an ancestor.
    pub scope: Option<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct PropertyData {
    /// Name or Literal.
    pub key: NodeId,
    /// FunctionNode for Get/Set, an expression for Init.
    pub value: NodeId,
    pub kind: PropertyKind,
}

#[derive(Debug, Serialize)]
pub struct SwitchCaseData {
    /// Absent exactly for the default clause.
    pub expression: Option<NodeId>,
    pub body: Vec<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct VariableDeclaratorData {
    /// Always a Name.
    pub name: NodeId,
    pub init: Option<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct CatchClauseData {
    /// Always a Name.
    pub param: NodeId,
    /// Always a Block.
    pub body: NodeId,
    /// The catch parameter's scope; empty until a binding pass runs.
    pub environment: FxHashSet<String>,
}

// ============================================================================
// NodeKind
// ============================================================================

/// One variant per concrete node kind. Matches over this enum are the single
/// source of exhaustiveness: adding a variant breaks every dispatch site and
/// both visitor traits until they are extended.
#[derive(Debug, Serialize)]
pub enum NodeKind {
    // Statements
    Empty,
    Block(BlockData),
    ExpressionStatement(ExpressionStatementData),
    If(IfData),
    Labeled(LabeledData),
    Break(BreakData),
    Continue(ContinueData),
    With(WithData),
    Switch(SwitchData),
    Return(ReturnData),
    Throw(ThrowData),
    Try(TryData),
    While(WhileData),
    DoWhile(DoWhileData),
    For(ForData),
    ForIn(ForInData),
    FunctionDeclaration(FunctionDeclarationData),
    VariableDeclaration(VariableDeclarationData),
    Debugger,

    // Expressions
    This,
    Array(ArrayData),
    Object(ObjectData),
    FunctionExpression(FunctionExpressionData),
    Sequence(SequenceData),
    Unary(UnaryData),
    Binary(BinaryData),
    Assignment(AssignmentData),
    Update(UpdateData),
    Conditional(ConditionalData),
    Call(CallData),
    Member(MemberData),
    Index(IndexData),
    NameExpression(NameExpressionData),
    Literal(LiteralData),
    Regexp(RegexpData),

    // Structure
    Programs(ProgramsData),
    Program(ProgramData),
    FunctionNode(FunctionData),
    Name(NameData),
    Property(PropertyData),
    SwitchCase(SwitchCaseData),
    VariableDeclarator(VariableDeclaratorData),
    CatchClause(CatchClauseData),
}

impl NodeKind {
    /// Kind name for diagnostics and dumps.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Empty => "Empty",
            NodeKind::Block(_) => "Block",
            NodeKind::ExpressionStatement(_) => "ExpressionStatement",
            NodeKind::If(_) => "If",
            NodeKind::Labeled(_) => "Labeled",
            NodeKind::Break(_) => "Break",
            NodeKind::Continue(_) => "Continue",
            NodeKind::With(_) => "With",
            NodeKind::Switch(_) => "Switch",
            NodeKind::Return(_) => "Return",
            NodeKind::Throw(_) => "Throw",
            NodeKind::Try(_) => "Try",
            NodeKind::While(_) => "While",
            NodeKind::DoWhile(_) => "DoWhile",
            NodeKind::For(_) => "For",
            NodeKind::ForIn(_) => "ForIn",
            NodeKind::FunctionDeclaration(_) => "FunctionDeclaration",
            NodeKind::VariableDeclaration(_) => "VariableDeclaration",
            NodeKind::Debugger => "Debugger",
            NodeKind::This => "This",
            NodeKind::Array(_) => "Array",
            NodeKind::Object(_) => "Object",
            NodeKind::FunctionExpression(_) => "FunctionExpression",
            NodeKind::Sequence(_) => "Sequence",
            NodeKind::Unary(_) => "Unary",
            NodeKind::Binary(_) => "Binary",
            NodeKind::Assignment(_) => "Assignment",
            NodeKind::Update(_) => "Update",
            NodeKind::Conditional(_) => "Conditional",
            NodeKind::Call(_) => "Call",
            NodeKind::Member(_) => "Member",
            NodeKind::Index(_) => "Index",
            NodeKind::NameExpression(_) => "NameExpression",
            NodeKind::Literal(_) => "Literal",
            NodeKind::Regexp(_) => "Regexp",
            NodeKind::Programs(_) => "Programs",
            NodeKind::Program(_) => "Program",
            NodeKind::FunctionNode(_) => "FunctionNode",
            NodeKind::Name(_) => "Name",
            NodeKind::Property(_) => "Property",
            NodeKind::SwitchCase(_) => "SwitchCase",
            NodeKind::VariableDeclarator(_) => "VariableDeclarator",
            NodeKind::CatchClause(_) => "CatchClause",
        }
    }

    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::Empty
                | NodeKind::Block(_)
                | NodeKind::ExpressionStatement(_)
                | NodeKind::If(_)
                | NodeKind::Labeled(_)
                | NodeKind::Break(_)
                | NodeKind::Continue(_)
                | NodeKind::With(_)
                | NodeKind::Switch(_)
                | NodeKind::Return(_)
                | NodeKind::Throw(_)
                | NodeKind::Try(_)
                | NodeKind::While(_)
                | NodeKind::DoWhile(_)
                | NodeKind::For(_)
                | NodeKind::ForIn(_)
                | NodeKind::FunctionDeclaration(_)
                | NodeKind::VariableDeclaration(_)
                | NodeKind::Debugger
        )
    }

    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::This
                | NodeKind::Array(_)
                | NodeKind::Object(_)
                | NodeKind::FunctionExpression(_)
                | NodeKind::Sequence(_)
                | NodeKind::Unary(_)
                | NodeKind::Binary(_)
                | NodeKind::Assignment(_)
                | NodeKind::Update(_)
                | NodeKind::Conditional(_)
                | NodeKind::Call(_)
                | NodeKind::Member(_)
                | NodeKind::Index(_)
                | NodeKind::NameExpression(_)
                | NodeKind::Literal(_)
                | NodeKind::Regexp(_)
        )
    }

    /// The three kinds hosting locally declared names.
    pub fn is_scope(&self) -> bool {
        matches!(
            self,
            NodeKind::Program(_) | NodeKind::FunctionNode(_) | NodeKind::CatchClause(_)
        )
    }
}
