//! Compact JSON view of a subtree for debugging and golden assertions.

use serde_json::{Map, Value, json};

use super::arena::Ast;
use super::node::{NodeId, NodeKind};

impl Ast {
    /// Render the subtree as `{"kind": ..., "children": [...]}`, with the
    /// few scalar payloads (names, literals, operators) inlined.
    pub fn dump(&self, id: NodeId) -> Value {
        let mut obj = Map::new();
        obj.insert("kind".into(), json!(self.kind(id).name()));

        match self.kind(id) {
            NodeKind::Name(d) => {
                obj.insert("text".into(), json!(d.text));
            }
            NodeKind::Literal(d) => {
                obj.insert("raw".into(), json!(d.raw));
            }
            NodeKind::Regexp(d) => {
                obj.insert("raw".into(), json!(d.raw));
            }
            NodeKind::Program(d) => {
                obj.insert("filename".into(), json!(d.filename));
            }
            NodeKind::Unary(d) => {
                obj.insert("operator".into(), json!(d.operator.as_str()));
            }
            NodeKind::Binary(d) => {
                obj.insert("operator".into(), json!(d.operator.as_str()));
            }
            NodeKind::Assignment(d) => {
                obj.insert("operator".into(), json!(d.operator.as_str()));
            }
            NodeKind::Update(d) => {
                obj.insert("operator".into(), json!(d.operator.as_str()));
            }
            _ => {}
        }

        let children: Vec<Value> = self.children(id).into_iter().map(|c| self.dump(c)).collect();
        if !children.is_empty() {
            obj.insert("children".into(), Value::Array(children));
        }
        Value::Object(obj)
    }
}
