use crate::error::NanogradError;
use crate::graph::Graph;
use crate::nn::module::{prefixed, Module, Output};
use crate::nn::neuron::Neuron;
use crate::value::Value;
use rand::Rng;

/// A fully connected layer of independent [`Neuron`]s sharing one input.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates `nout` neurons, each taking `nin` inputs.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `nout` is 0.
    pub fn new(graph: &Graph, nin: usize, nout: usize) -> Result<Self, NanogradError> {
        Self::with_rng(graph, nin, nout, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        nout: usize,
        rng: &mut R,
    ) -> Result<Self, NanogradError> {
        if nout == 0 {
            return Err(NanogradError::InvalidArchitecture(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..nout)
            .map(|_| Neuron::with_rng(graph, nin, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn nin(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::nin)
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    type Output = Output;

    fn forward(&self, input: &[Value]) -> Result<Output, NanogradError> {
        let outs = self
            .neurons
            .iter()
            .map(|neuron| neuron.forward(input))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Output::from_vec(outs))
    }

    fn parameters(&self) -> Vec<&Value> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(j, neuron)| prefixed(format!("neurons.{}", j), neuron.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
