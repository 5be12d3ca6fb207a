//! JavaScript AST representation layer.
//!
//! This crate defines the node vocabulary of the language together with a
//! uniform traversal and dispatch mechanism and a minimal scoping layer:
//! - Arena storage (`Ast`, `NodeId`) with parent pointers wired at
//!   construction (`add_*` methods)
//! - One `NodeKind` variant per concrete kind, ~43 in total, split into
//!   statements, expressions, and structural helpers
//! - Direct-child enumeration in documented slot order (`for_each_child`)
//! - Double-dispatch visitors in two arities (`Visitor<T>`,
//!   `Visitor1<T, A>`) with compile-time exhaustiveness
//! - Structural classification of names, functions, and properties from
//!   parent shape (`name_is_property`, `function_is_expression`, …)
//! - Scope environments and the Name→scope slot for an external binding pass
//! - Well-formedness checking (`validate`) for transformation passes
//!
//! Parsing, printing, and binding resolution are external collaborators: a
//! producer builds nodes bottom-up and hands back a Program root; consumers
//! implement a visitor or recurse over children.

pub mod ast;
pub mod span;

pub use ast::*;
pub use span::{Location, Span};
