//! Scope environments and the Name→scope slot.
//!
//! The model only provides the mutable state; a binding pass running after
//! construction fills it in (parameters, hoisted var/function declarations,
//! catch parameters, plus the implicit "arguments" entry per function).
//! Nothing here verifies that a Name's recorded scope is an ancestor; that
//! invariant belongs to the binding pass. An unbound Name keeps `scope ==
//! None`, with no implicit fallback to the nearest Program.

use rustc_hash::FxHashSet;

use super::arena::Ast;
use super::node::{NodeId, NodeKind};

impl Ast {
    /// True for the three kinds hosting locally declared names: Program,
    /// FunctionNode, CatchClause.
    pub fn is_scope(&self, id: NodeId) -> bool {
        self.kind(id).is_scope()
    }

    /// The scope's declared-identifier set. Panics if the node is not a
    /// scope kind.
    pub fn environment(&self, scope: NodeId) -> &FxHashSet<String> {
        match self.kind(scope) {
            NodeKind::Program(d) => &d.environment,
            NodeKind::FunctionNode(d) => &d.environment,
            NodeKind::CatchClause(d) => &d.environment,
            other => panic!("expected a scope node, found {}", other.name()),
        }
    }

    pub fn environment_mut(&mut self, scope: NodeId) -> &mut FxHashSet<String> {
        match &mut self.node_mut(scope).kind {
            NodeKind::Program(d) => &mut d.environment,
            NodeKind::FunctionNode(d) => &mut d.environment,
            NodeKind::CatchClause(d) => &mut d.environment,
            other => panic!("expected a scope node, found {}", other.name()),
        }
    }

    /// Record a locally declared identifier on a scope. Returns false if the
    /// name was already declared there.
    pub fn declare(&mut self, scope: NodeId, name: impl Into<String>) -> bool {
        let name = name.into();
        tracing::trace!(scope = scope.0, name = %name, "declare");
        self.environment_mut(scope).insert(name)
    }

    /// The declaring scope recorded on a Name, if a binding pass has run.
    pub fn name_scope(&self, name: NodeId) -> Option<NodeId> {
        self.name_data(name).scope
    }

    /// Write the Name→scope slot. Panics if `scope` is `Some` of a non-scope
    /// node; does not check that it is an ancestor.
    pub fn set_name_scope(&mut self, name: NodeId, scope: Option<NodeId>) {
        if let Some(s) = scope {
            assert!(
                self.is_scope(s),
                "set_name_scope target must be a scope node, found {}",
                self.kind(s).name()
            );
        }
        self.name_data_mut(name).scope = scope;
    }

    /// Nearest enclosing scope node, starting at the parent.
    pub fn enclosing_scope(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = self.parent(id);
        while let Some(current) = cursor {
            if self.is_scope(current) {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }
}
