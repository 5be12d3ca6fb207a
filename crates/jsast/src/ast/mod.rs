//! Arena-backed AST: node catalog, construction, traversal, dispatch,
//! scoping, and validation.

mod access;
mod arena;
mod children;
mod dump;
mod node;
mod scope;
mod validate;
mod visit;

pub use arena::Ast;
pub use node::*;
pub use validate::{AstError, AstErrorKind};
pub use visit::{Visitor, Visitor1};
