// Network composition layer: neurons, layers and a multilayer perceptron built
// purely from engine operations.

pub mod init;
pub mod layer;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use layer::Layer;
pub use mlp::Mlp;
pub use module::{Module, Output};
pub use neuron::Neuron;
