use std::fmt;

/// Index of a node inside its graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tag recording how a node was produced.
///
/// The tag carries only data. The matching local backward rule is dispatched
/// once per variant in `autograd::apply_local_rule`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add,
    Mul,
    /// Power with a real, constant exponent.
    Pow(f64),
    Tanh,
    Exp,
    ReLU,
}

impl Op {
    /// Number of operands a node with this tag references.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Pow(_) | Op::Tanh | Op::Exp | Op::ReLU => 1,
            Op::Add | Op::Mul => 2,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => Ok(()),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Pow(exponent) => write!(f, "**{}", exponent),
            Op::Tanh => write!(f, "tanh"),
            Op::Exp => write!(f, "exp"),
            Op::ReLU => write!(f, "ReLU"),
        }
    }
}

/// Operand ids of a node, in the order they were passed to the operation.
///
/// At most two operands exist for any `Op`, so they are stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    ids: [NodeId; 2],
    len: usize,
}

impl Operands {
    pub fn none() -> Self {
        Operands { ids: [NodeId(0); 2], len: 0 }
    }

    pub fn unary(a: NodeId) -> Self {
        Operands { ids: [a, a], len: 1 }
    }

    pub fn binary(a: NodeId, b: NodeId) -> Self {
        Operands { ids: [a, b], len: 2 }
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.ids[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// One scalar in the arena: forward value, gradient accumulator and derivation.
///
/// `value`, `op` and `operands` never change after construction; only `grad`
/// (and the debug `label`) are written afterwards.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) operands: Operands,
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn leaf(value: f64, label: Option<String>) -> Self {
        Node {
            value,
            grad: 0.0,
            op: Op::Leaf,
            operands: Operands::none(),
            label,
        }
    }

    pub(crate) fn with_operands(value: f64, op: Op, operands: Operands) -> Self {
        debug_assert_eq!(op.arity(), operands.len(), "operand count does not match {:?}", op);
        Node {
            value,
            grad: 0.0,
            op,
            operands,
            label: None,
        }
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;
