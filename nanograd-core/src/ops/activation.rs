use crate::node::{Node, Op, Operands};
use crate::value::Value;

/// Hyperbolic tangent, evaluated as `(e^{2x} - 1) / (e^{2x} + 1)`.
pub fn tanh_op(a: &Value) -> Value {
    let x = a.data();
    let e2x = (2.0 * x).exp();
    let t = (e2x - 1.0) / (e2x + 1.0);
    a.graph()
        .push(Node::with_operands(t, Op::Tanh, Operands::unary(a.id())))
}

/// `max(0, a)`. Negative inputs map to 0; NaN passes through.
pub fn relu_op(a: &Value) -> Value {
    let x = a.data();
    let value = if x < 0.0 { 0.0 } else { x };
    a.graph()
        .push(Node::with_operands(value, Op::ReLU, Operands::unary(a.id())))
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }

    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
