use crate::node::{Node, NodeId};
use crate::value::Value;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Dense storage for every node created through one [`Graph`].
///
/// Nodes are only ever appended, so a `NodeId` handed out by `push` stays valid
/// for the lifetime of the arena, and operands always have smaller ids than the
/// nodes that reference them.
#[derive(Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn zero_grad(&mut self) {
        for node in &mut self.nodes {
            node.grad = 0.0;
        }
    }
}

/// Shared handle to a computation graph.
///
/// Cloning a `Graph` is cheap and yields another handle to the same arena. The
/// arena (and every node in it) is freed once the last `Graph` or [`Value`]
/// handle pointing at it is dropped.
#[derive(Clone, Default)]
pub struct Graph {
    arena: Rc<RefCell<Arena>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a leaf node holding `value` with a zero gradient.
    pub fn leaf(&self, value: f64) -> Value {
        self.push(Node::leaf(value, None))
    }

    /// Creates a leaf node carrying a debug label.
    pub fn leaf_with_label(&self, value: f64, label: impl Into<String>) -> Value {
        self.push(Node::leaf(value, Some(label.into())))
    }

    /// Creates one leaf per input number, in order.
    pub fn leaves(&self, values: &[f64]) -> Vec<Value> {
        values.iter().map(|&v| self.leaf(v)).collect()
    }

    /// Number of nodes currently stored in the arena.
    pub fn len(&self) -> usize {
        self.read_arena().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resets the gradient of every node in the graph to 0.
    pub fn zero_grad(&self) {
        self.write_arena().zero_grad();
    }

    /// Returns `true` if both handles point to the same arena.
    pub fn ptr_eq(&self, other: &Graph) -> bool {
        Rc::ptr_eq(&self.arena, &other.arena)
    }

    pub(crate) fn push(&self, node: Node) -> Value {
        let id = self.write_arena().push(node);
        Value::from_parts(self.clone(), id)
    }

    pub(crate) fn read_arena(&self) -> Ref<'_, Arena> {
        self.arena.borrow()
    }

    pub(crate) fn write_arena(&self) -> RefMut<'_, Arena> {
        self.arena.borrow_mut()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph").field("nodes", &self.len()).finish()
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
