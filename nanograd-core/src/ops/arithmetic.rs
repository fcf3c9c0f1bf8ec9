use crate::node::{Node, Op, Operands};
use crate::ops::assert_same_graph;
use crate::ops::pow::pow_op;
use crate::value::Value;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// `a + b`.
///
/// # Panics
/// If `a` and `b` belong to different graphs.
pub fn add_op(a: &Value, b: &Value) -> Value {
    assert_same_graph(a, b, "add");
    let value = a.data() + b.data();
    a.graph()
        .push(Node::with_operands(value, Op::Add, Operands::binary(a.id(), b.id())))
}

/// `a * b`. `a` and `b` may be the same node.
///
/// # Panics
/// If `a` and `b` belong to different graphs.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    assert_same_graph(a, b, "mul");
    let value = a.data() * b.data();
    a.graph()
        .push(Node::with_operands(value, Op::Mul, Operands::binary(a.id(), b.id())))
}

/// `-a`, built as `a * -1`.
pub fn neg_op(a: &Value) -> Value {
    let minus_one = a.graph().leaf(-1.0);
    mul_op(a, &minus_one)
}

/// `a - b`, built as `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

/// `a / b`, built as `a * b**-1`.
pub fn div_op(a: &Value, b: &Value) -> Value {
    assert_same_graph(a, b, "div");
    mul_op(a, &pow_op(b, -1.0))
}

// --- std::ops overloads ---
//
// Plain numbers are promoted to a fresh leaf in the node operand's graph and
// then go through the same canonical op, whichever side they are on.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                let rhs = self.graph().leaf(rhs);
                $op_fn(self, &rhs)
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                <&Value as $trait<f64>>::$method(&self, rhs)
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                let lhs = rhs.graph().leaf(self);
                $op_fn(&lhs, rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                <f64 as $trait<&Value>>::$method(self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

// `x += y` rebinds `x` to the new result node; the old node is left untouched.
macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Value> for Value {
            fn $method(&mut self, rhs: &Value) {
                *self = $op_fn(self, rhs);
            }
        }

        impl $trait<Value> for Value {
            fn $method(&mut self, rhs: Value) {
                *self = $op_fn(self, &rhs);
            }
        }

        impl $trait<f64> for Value {
            fn $method(&mut self, rhs: f64) {
                let rhs = self.graph().leaf(rhs);
                *self = $op_fn(self, &rhs);
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, add_op);
impl_assign_op!(SubAssign, sub_assign, sub_op);
impl_assign_op!(MulAssign, mul_assign, mul_op);
impl_assign_op!(DivAssign, div_assign, div_op);

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
