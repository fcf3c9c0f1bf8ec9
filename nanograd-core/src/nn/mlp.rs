use crate::error::NanogradError;
use crate::graph::Graph;
use crate::nn::layer::Layer;
use crate::nn::module::{prefixed, Module, Output};
use crate::value::Value;
use log::debug;
use rand::Rng;

/// Multilayer perceptron: a chain of [`Layer`]s, each feeding the next.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds layers of widths `nouts`, the first taking `nin` inputs.
    ///
    /// # Errors
    /// `InvalidArchitecture` if `nouts` is empty or contains a zero width.
    pub fn new(graph: &Graph, nin: usize, nouts: &[usize]) -> Result<Self, NanogradError> {
        Self::with_rng(graph, nin, nouts, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(
        graph: &Graph,
        nin: usize,
        nouts: &[usize],
        rng: &mut R,
    ) -> Result<Self, NanogradError> {
        if nouts.is_empty() {
            return Err(NanogradError::InvalidArchitecture(
                "a perceptron needs at least one layer".to_string(),
            ));
        }
        debug!("Building MLP: {} inputs, layer widths {:?}", nin, nouts);

        let sizes: Vec<usize> = std::iter::once(nin).chain(nouts.iter().copied()).collect();
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::with_rng(graph, pair[0], pair[1], &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    type Output = Output;

    fn forward(&self, input: &[Value]) -> Result<Output, NanogradError> {
        let (last, hidden) = self.layers.split_last().ok_or_else(|| {
            NanogradError::InvalidArchitecture("a perceptron needs at least one layer".to_string())
        })?;
        let mut activations = input.to_vec();
        for layer in hidden {
            activations = layer.forward(&activations)?.into_vec();
        }
        last.forward(&activations)
    }

    fn parameters(&self) -> Vec<&Value> {
        self.layers.iter().flat_map(Layer::parameters).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(k, layer)| prefixed(format!("layers.{}", k), layer.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
