use crate::graph::Arena;
use crate::node::NodeId;
use std::collections::HashSet;

/// Builds a topological order of the subgraph reachable from `root`.
///
/// Each node is appended only after all of its operands, so walking the result
/// backwards visits the root first and every node after all of its consumers.
/// The traversal uses an explicit stack but produces the same post-order as a
/// recursive depth-first search over operands in operation order. Nodes are
/// keyed by id, never by value.
pub(crate) fn topological_sort(arena: &Arena, root: NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<NodeId> = Vec::new();
    // (node, index of the next operand to visit)
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    visited.insert(root);

    while let Some(frame) = stack.last_mut() {
        let (node_id, next) = *frame;
        let operands = arena.node(node_id).operands.as_slice();
        if next < operands.len() {
            frame.1 += 1;
            let operand = operands[next];
            if visited.insert(operand) {
                stack.push((operand, 0));
            }
        } else {
            sorted_list.push(node_id);
            stack.pop();
        }
    }

    sorted_list
}
