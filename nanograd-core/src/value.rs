use crate::graph::Graph;
use crate::node::{NodeId, Op};
use std::fmt;

/// Handle to one scalar node of a [`Graph`].
///
/// A `Value` is a `(graph, id)` pair: cloning it is cheap and the clone refers
/// to the same node. Two values with equal data are still distinct nodes unless
/// [`Value::same_node`] says otherwise.
///
/// Arithmetic goes through the operators in [`crate::ops`]; gradients are filled
/// in by [`Value::backward`].
#[derive(Clone)]
pub struct Value {
    graph: Graph,
    id: NodeId,
}

impl Value {
    pub(crate) fn from_parts(graph: Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    /// Graph the node lives in.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Forward value.
    pub fn data(&self) -> f64 {
        self.graph.read_arena().node(self.id).value
    }

    /// Accumulated gradient. Zero until a backward pass reaches this node.
    pub fn grad(&self) -> f64 {
        self.graph.read_arena().node(self.id).grad
    }

    pub fn set_grad(&self, grad: f64) {
        self.graph.write_arena().node_mut(self.id).grad = grad;
    }

    pub fn zero_grad(&self) {
        self.set_grad(0.0);
    }

    /// Operation that produced this node.
    pub fn op(&self) -> Op {
        self.graph.read_arena().node(self.id).op
    }

    /// Handles to the operands of this node, in operation order.
    pub fn operands(&self) -> Vec<Value> {
        let arena = self.graph.read_arena();
        arena
            .node(self.id)
            .operands
            .as_slice()
            .iter()
            .map(|&id| Value::from_parts(self.graph.clone(), id))
            .collect()
    }

    pub fn is_leaf(&self) -> bool {
        self.op() == Op::Leaf
    }

    pub fn label(&self) -> Option<String> {
        self.graph.read_arena().node(self.id).label.clone()
    }

    /// Attaches a debug label. Labels have no effect on computation.
    pub fn set_label(&self, label: impl Into<String>) {
        self.graph.write_arena().node_mut(self.id).label = Some(label.into());
    }

    /// Identity comparison: same graph and same node.
    pub fn same_node(&self, other: &Value) -> bool {
        self.id == other.id && self.graph.ptr_eq(&other.graph)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={})", self.data())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = self.graph.read_arena();
        let node = arena.node(self.id);
        f.debug_struct("Value")
            .field("id", &self.id)
            .field("data", &node.value)
            .field("grad", &node.grad)
            .field("op", &node.op)
            .field("label", &node.label)
            .finish()
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
