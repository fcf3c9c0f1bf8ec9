use crate::error::NanogradError;
use crate::graph::Graph;
use crate::nn::init;
use crate::nn::module::{check_same_graph, Module};
use crate::value::Value;
use log::debug;
use rand::Rng;

/// A single `tanh` unit: `tanh(b + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron with `nin` weights and a bias drawn from `U[-1, 1]`.
    pub fn new(graph: &Graph, nin: usize) -> Result<Self, NanogradError> {
        Self::with_rng(graph, nin, &mut rand::thread_rng())
    }

    /// Same as [`Neuron::new`] with a caller-supplied random source.
    pub fn with_rng<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        rng: &mut R,
    ) -> Result<Self, NanogradError> {
        let weights = init::uniform(graph, nin, init::DEFAULT_LOW, init::DEFAULT_HIGH, rng)?;
        let bias = init::uniform_value(graph, init::DEFAULT_LOW, init::DEFAULT_HIGH, rng)?;
        debug!("Neuron created with {} inputs", nin);
        Ok(Neuron { weights, bias })
    }

    /// Builds a neuron from existing parameter nodes.
    ///
    /// # Errors
    /// `GraphMismatch` if the weights and bias do not share one graph.
    pub fn from_parameters(weights: Vec<Value>, bias: Value) -> Result<Self, NanogradError> {
        check_same_graph(&bias, &weights, "Neuron::from_parameters")?;
        Ok(Neuron { weights, bias })
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    /// Number of inputs the neuron expects.
    pub fn nin(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    type Output = Value;

    fn forward(&self, input: &[Value]) -> Result<Value, NanogradError> {
        if input.len() != self.nin() {
            return Err(NanogradError::InputSizeMismatch {
                expected: self.nin(),
                actual: input.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        check_same_graph(&self.bias, input, "Neuron::forward")?;

        let activation = self
            .weights
            .iter()
            .zip(input)
            .fold(self.bias.clone(), |acc, (w, x)| acc + w * x);
        Ok(activation.tanh())
    }

    fn parameters(&self) -> Vec<&Value> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Value)> {
        self.weights
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("w.{}", i), w))
            .chain(std::iter::once(("b".to_string(), &self.bias)))
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
