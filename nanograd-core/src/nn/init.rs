use crate::error::NanogradError;
use crate::graph::Graph;
use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Default range for weights and biases.
pub const DEFAULT_LOW: f64 = -1.0;
pub const DEFAULT_HIGH: f64 = 1.0;

/// Creates `n` leaf parameters drawn independently from `U[low, high]`.
///
/// # Errors
/// `InvalidInitRange` if `low > high` or either bound is not finite.
pub fn uniform<R: Rng + ?Sized>(
    graph: &Graph,
    n: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Vec<Value>, NanogradError> {
    if !(low.is_finite() && high.is_finite() && low <= high) {
        return Err(NanogradError::InvalidInitRange { low, high });
    }
    let distribution = Uniform::new_inclusive(low, high);
    Ok((0..n)
        .map(|_| graph.leaf(distribution.sample(rng)))
        .collect())
}

/// Single-parameter form of [`uniform`].
pub fn uniform_value<R: Rng + ?Sized>(
    graph: &Graph,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Value, NanogradError> {
    let mut values = uniform(graph, 1, low, high, rng)?;
    Ok(values.remove(0))
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
