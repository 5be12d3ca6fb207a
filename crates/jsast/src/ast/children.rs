//! Direct-child enumeration.
//!
//! `for_each_child` invokes the callback exactly once per present child, in
//! the documented slot order for each kind, skipping absent optionals and
//! elided array slots. It never recurses; recursive walks are composed by
//! the caller (see `find_all` and `height`).

use super::arena::Ast;
use super::node::*;

impl Ast {
    pub fn for_each_child(&self, id: NodeId, mut f: impl FnMut(NodeId)) {
        self.each_child(id, &mut f);
    }

    fn each_child(&self, id: NodeId, f: &mut dyn FnMut(NodeId)) {
        match self.kind(id) {
            // Statements
            NodeKind::Empty | NodeKind::Debugger => {}
            NodeKind::Block(d) => {
                for &s in &d.body {
                    f(s);
                }
            }
            NodeKind::ExpressionStatement(d) => f(d.expression),
            NodeKind::If(d) => {
                f(d.condition);
                f(d.then_branch);
                if let Some(e) = d.else_branch {
                    f(e);
                }
            }
            NodeKind::Labeled(d) => {
                f(d.label);
                f(d.body);
            }
            NodeKind::Break(d) => {
                if let Some(l) = d.label {
                    f(l);
                }
            }
            NodeKind::Continue(d) => {
                if let Some(l) = d.label {
                    f(l);
                }
            }
            NodeKind::With(d) => {
                f(d.object);
                f(d.body);
            }
            NodeKind::Switch(d) => {
                f(d.argument);
                for &c in &d.cases {
                    f(c);
                }
            }
            NodeKind::Return(d) => {
                if let Some(a) = d.argument {
                    f(a);
                }
            }
            NodeKind::Throw(d) => f(d.argument),
            NodeKind::Try(d) => {
                f(d.block);
                if let Some(h) = d.handler {
                    f(h);
                }
                if let Some(fin) = d.finalizer {
                    f(fin);
                }
            }
            NodeKind::While(d) => {
                f(d.condition);
                f(d.body);
            }
            NodeKind::DoWhile(d) => {
                f(d.condition);
                f(d.body);
            }
            NodeKind::For(d) => {
                if let Some(i) = d.init {
                    f(i);
                }
                if let Some(c) = d.condition {
                    f(c);
                }
                if let Some(u) = d.update {
                    f(u);
                }
                f(d.body);
            }
            NodeKind::ForIn(d) => {
                f(d.left);
                f(d.right);
                f(d.body);
            }
            NodeKind::FunctionDeclaration(d) => f(d.function),
            NodeKind::VariableDeclaration(d) => {
                for &v in &d.declarators {
                    f(v);
                }
            }

            // Expressions
            NodeKind::This => {}
            NodeKind::Array(d) => {
                for &slot in &d.elements {
                    if let Some(e) = slot {
                        f(e);
                    }
                }
            }
            NodeKind::Object(d) => {
                for &p in &d.properties {
                    f(p);
                }
            }
            NodeKind::FunctionExpression(d) => f(d.function),
            NodeKind::Sequence(d) => {
                for &e in &d.expressions {
                    f(e);
                }
            }
            NodeKind::Unary(d) => f(d.argument),
            NodeKind::Binary(d) => {
                f(d.left);
                f(d.right);
            }
            NodeKind::Assignment(d) => {
                f(d.left);
                f(d.right);
            }
            NodeKind::Update(d) => f(d.argument),
            NodeKind::Conditional(d) => {
                f(d.condition);
                f(d.then_branch);
                f(d.else_branch);
            }
            NodeKind::Call(d) => {
                f(d.callee);
                for &a in &d.arguments {
                    f(a);
                }
            }
            NodeKind::Member(d) => {
                f(d.object);
                f(d.property);
            }
            NodeKind::Index(d) => {
                f(d.object);
                f(d.property);
            }
            NodeKind::NameExpression(d) => f(d.name),
            NodeKind::Literal(_) | NodeKind::Regexp(_) => {}

            // Structure
            NodeKind::Programs(d) => {
                for &p in &d.programs {
                    f(p);
                }
            }
            NodeKind::Program(d) => {
                for &s in &d.body {
                    f(s);
                }
            }
            NodeKind::FunctionNode(d) => {
                if let Some(n) = d.name {
                    f(n);
                }
                for &p in &d.params {
                    f(p);
                }
                f(d.body);
            }
            NodeKind::Name(_) => {}
            NodeKind::Property(d) => {
                f(d.key);
                f(d.value);
            }
            NodeKind::SwitchCase(d) => {
                if let Some(e) = d.expression {
                    f(e);
                }
                for &s in &d.body {
                    f(s);
                }
            }
            NodeKind::VariableDeclarator(d) => {
                f(d.name);
                if let Some(i) = d.init {
                    f(i);
                }
            }
            NodeKind::CatchClause(d) => {
                f(d.param);
                f(d.body);
            }
        }
    }

    /// Direct children collected in enumeration order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.for_each_child(id, |c| out.push(c));
        out
    }

    /// Preorder search of the subtree rooted at `root` for nodes matching
    /// the predicate. The root itself is a candidate.
    pub fn find_all(&self, root: NodeId, mut pred: impl FnMut(&Ast, NodeId) -> bool) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if pred(self, id) {
                out.push(id);
            }
            // Reverse so children pop in enumeration order.
            let children = self.children(id);
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// Height of the subtree rooted at `id`: a leaf has height 0.
    pub fn height(&self, id: NodeId) -> usize {
        let mut max = 0;
        self.for_each_child(id, |c| {
            max = max.max(self.height(c) + 1);
        });
        max
    }
}
