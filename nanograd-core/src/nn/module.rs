use crate::error::NanogradError;
use crate::value::Value;

/// The base trait for all network building blocks.
///
/// Implementors own leaf parameters and build a fresh expression graph from
/// them on every `forward` call.
pub trait Module: std::fmt::Debug {
    type Output;

    /// Performs a forward pass on `input`.
    ///
    /// # Errors
    /// `InputSizeMismatch` if `input` has the wrong length, `GraphMismatch` if
    /// it lives in a different graph than the parameters.
    fn forward(&self, input: &[Value]) -> Result<Self::Output, NanogradError>;

    /// All learnable parameters, in construction order.
    fn parameters(&self) -> Vec<&Value>;

    /// Parameters with hierarchical names such as `layers.0.neurons.1.w.2`.
    fn named_parameters(&self) -> Vec<(String, &Value)>;

    /// Sets the gradient of every parameter to 0.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}

/// Output of a [`crate::nn::Layer`] or [`crate::nn::Mlp`]: a single node when the
/// final layer has exactly one neuron, otherwise one node per neuron.
#[derive(Debug, Clone)]
pub enum Output {
    Scalar(Value),
    Vector(Vec<Value>),
}

impl Output {
    pub(crate) fn from_vec(mut values: Vec<Value>) -> Self {
        if values.len() == 1 {
            Output::Scalar(values.remove(0))
        } else {
            Output::Vector(values)
        }
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Output::Scalar(value) => Some(value),
            Output::Vector(_) => None,
        }
    }

    pub fn into_scalar(self) -> Option<Value> {
        match self {
            Output::Scalar(value) => Some(value),
            Output::Vector(_) => None,
        }
    }

    /// Flattens the output into a sequence, usable as the next layer's input.
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Output::Scalar(value) => vec![value],
            Output::Vector(values) => values,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Output::Scalar(_) => 1,
            Output::Vector(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Prefixes every name in `named` with `prefix.`.
pub(crate) fn prefixed<'a>(
    prefix: String,
    named: Vec<(String, &'a Value)>,
) -> impl Iterator<Item = (String, &'a Value)> {
    named
        .into_iter()
        .map(move |(name, param)| (format!("{}.{}", prefix, name), param))
}

/// Checks that every input lives in the same graph as `expected`.
pub(crate) fn check_same_graph(
    expected: &Value,
    input: &[Value],
    operation: &str,
) -> Result<(), NanogradError> {
    if input.iter().all(|x| x.graph().ptr_eq(expected.graph())) {
        Ok(())
    } else {
        Err(NanogradError::GraphMismatch {
            operation: operation.to_string(),
        })
    }
}
