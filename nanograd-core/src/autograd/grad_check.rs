use crate::graph::Graph;
use crate::value::Value;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Gradient for input {input_index} is NaN or infinite: analytical {analytical_grad:?}, numerical {numerical_grad:?}")]
    NonFinite {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
    },
}

/// Compares the analytical gradients of `func` with central finite differences.
///
/// `func` receives one leaf per entry of `inputs` and must build its output
/// from them (constants are promoted into the same graph automatically). It is
/// evaluated once for the backward pass and twice more per input, each time in
/// a fresh graph.
///
/// A gradient passes when it is within `tolerance` of the numerical estimate,
/// either absolutely or relative to the larger magnitude.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    let graph = Graph::new();
    let leaves = graph.leaves(inputs);
    let output = func(&leaves);
    output.backward();

    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();
        let loss_plus = evaluate_shifted(&func, inputs, input_index, epsilon);
        let loss_minus = evaluate_shifted(&func, inputs, input_index, -epsilon);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        debug!(
            "check_grad input {}: analytical {} numerical {}",
            input_index, analytical_grad, numerical_grad
        );

        if !analytical_grad.is_finite() || !numerical_grad.is_finite() {
            return Err(GradCheckError::NonFinite {
                input_index,
                analytical_grad,
                numerical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

fn evaluate_shifted<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> f64
where
    F: Fn(&[Value]) -> Value,
{
    let mut shifted = inputs.to_vec();
    shifted[index] += delta;
    let graph = Graph::new();
    func(&graph.leaves(&shifted)).data()
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
