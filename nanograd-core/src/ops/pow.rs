use crate::error::NanogradError;
use crate::node::{Node, Op, Operands};
use crate::value::Value;

/// Exponent accepted by [`try_pow_op`].
///
/// Only `Real` exponents are supported; a node-valued exponent is rejected.
#[derive(Debug, Clone)]
pub enum Exponent {
    Real(f64),
    Node(Value),
}

impl From<f64> for Exponent {
    fn from(exponent: f64) -> Self {
        Exponent::Real(exponent)
    }
}

impl From<f32> for Exponent {
    fn from(exponent: f32) -> Self {
        Exponent::Real(f64::from(exponent))
    }
}

impl From<i32> for Exponent {
    fn from(exponent: i32) -> Self {
        Exponent::Real(f64::from(exponent))
    }
}

impl From<Value> for Exponent {
    fn from(exponent: Value) -> Self {
        Exponent::Node(exponent)
    }
}

impl From<&Value> for Exponent {
    fn from(exponent: &Value) -> Self {
        Exponent::Node(exponent.clone())
    }
}

/// `base ** exponent` for a constant real exponent.
///
/// No domain checks: a negative base with a fractional exponent gives NaN, and
/// the gradient at `base == 0` with `exponent < 1` is infinite or NaN.
pub fn pow_op(base: &Value, exponent: f64) -> Value {
    let value = base.data().powf(exponent);
    base.graph().push(Node::with_operands(
        value,
        Op::Pow(exponent),
        Operands::unary(base.id()),
    ))
}

/// Checked form of [`pow_op`] taking any [`Exponent`].
///
/// # Errors
/// `NanogradError::UnsupportedExponentType` if the exponent is a node.
pub fn try_pow_op(base: &Value, exponent: impl Into<Exponent>) -> Result<Value, NanogradError> {
    match exponent.into() {
        Exponent::Real(exponent) => Ok(pow_op(base, exponent)),
        Exponent::Node(node) => Err(NanogradError::UnsupportedExponentType {
            found: node.to_string(),
        }),
    }
}

impl Value {
    /// `self ** exponent`.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    /// See [`try_pow_op`].
    pub fn try_pow(&self, exponent: impl Into<Exponent>) -> Result<Value, NanogradError> {
        try_pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
