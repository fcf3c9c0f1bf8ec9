//! Forward operations.
//!
//! Every function here computes a forward value and records the operation tag
//! on a new node; the matching backward rule lives in [`crate::autograd`].
//! `neg_op`, `sub_op` and `div_op` are compositions and add no rule of their own.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod pow;

pub use activation::{relu_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
pub use math_elem::exp_op;
pub use pow::{pow_op, try_pow_op, Exponent};

use crate::value::Value;

/// Panics if `a` and `b` live in different graphs.
pub(crate) fn assert_same_graph(a: &Value, b: &Value, operation: &str) {
    assert!(
        a.graph().ptr_eq(b.graph()),
        "{}: operands {} and {} belong to different graphs",
        operation,
        a.id(),
        b.id()
    );
}
