//! Reverse-mode differentiation over the node arena.

pub mod grad_check;
pub(crate) mod graph;

use crate::graph::Arena;
use crate::node::{Node, NodeId, Op};
use crate::value::Value;
use self::graph::topological_sort;
use log::{debug, trace, warn};
use std::collections::HashMap;

/// Applies the local backward rule of `node`, adding its contribution to each
/// operand's entry in `grad_map`.
///
/// `upstream` is the fully accumulated gradient of `node` for this pass.
fn apply_local_rule(
    arena: &Arena,
    node: &Node,
    upstream: f64,
    grad_map: &mut HashMap<NodeId, f64>,
) {
    let mut accumulate = |id: NodeId, contribution: f64| {
        *grad_map.entry(id).or_insert(0.0) += contribution;
    };

    match (node.op, node.operands.as_slice()) {
        (Op::Leaf, _) => {}
        (Op::Add, &[a, b]) => {
            accumulate(a, 1.0 * upstream);
            accumulate(b, 1.0 * upstream);
        }
        (Op::Mul, &[a, b]) => {
            let a_value = arena.node(a).value;
            let b_value = arena.node(b).value;
            // Both statements run even when a == b.
            accumulate(a, b_value * upstream);
            accumulate(b, a_value * upstream);
        }
        (Op::Pow(exponent), &[a]) => {
            let base = arena.node(a).value;
            accumulate(a, exponent * base.powf(exponent - 1.0) * upstream);
        }
        (Op::Tanh, &[a]) => {
            let t = node.value;
            accumulate(a, (1.0 - t * t) * upstream);
        }
        (Op::Exp, &[a]) => {
            accumulate(a, node.value * upstream);
        }
        (Op::ReLU, &[a]) => {
            let slope = if node.value > 0.0 { 1.0 } else { 0.0 };
            accumulate(a, slope * upstream);
        }
        (op, operands) => {
            warn!(
                "Skipping backward rule: {:?} recorded with {} operands",
                op,
                operands.len()
            );
        }
    }
}

impl Value {
    /// Runs a backward pass from this node.
    ///
    /// Seeds this node with a gradient of `1.0`, walks the reachable subgraph in
    /// reverse topological order and adds `d self / d n` to the `grad` of every
    /// reachable node `n`. Gradients are never cleared here, so a second call
    /// without zeroing adds a second, identical contribution.
    pub fn backward(&self) {
        let mut arena = self.graph().write_arena();
        let sorted_nodes = topological_sort(&arena, self.id());
        debug!(
            "backward from {}: {} reachable nodes",
            self.id(),
            sorted_nodes.len()
        );

        let mut grad_map: HashMap<NodeId, f64> = HashMap::with_capacity(sorted_nodes.len());
        grad_map.insert(self.id(), 1.0);

        for &node_id in sorted_nodes.iter().rev() {
            let upstream = grad_map.get(&node_id).copied().unwrap_or(0.0);
            let node = arena.node(node_id);
            trace!("backward {} ({:?}): upstream grad {}", node_id, node.op, upstream);
            apply_local_rule(&arena, node, upstream, &mut grad_map);
        }

        for (node_id, grad) in grad_map {
            arena.node_mut(node_id).grad += grad;
        }
    }

    /// Nodes reachable from this one, each listed after all of its operands.
    pub fn topological_order(&self) -> Vec<Value> {
        let sorted_nodes = topological_sort(&self.graph().read_arena(), self.id());
        sorted_nodes
            .into_iter()
            .map(|id| Value::from_parts(self.graph().clone(), id))
            .collect()
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
