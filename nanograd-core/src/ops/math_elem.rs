use crate::node::{Node, Op, Operands};
use crate::value::Value;

/// `e^a`. Overflows to infinity for large inputs.
pub fn exp_op(a: &Value) -> Value {
    let value = a.data().exp();
    a.graph()
        .push(Node::with_operands(value, Op::Exp, Operands::unary(a.id())))
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}
