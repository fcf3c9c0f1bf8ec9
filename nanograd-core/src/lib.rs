//! Scalar reverse-mode automatic differentiation.
//!
//! Arithmetic on [`Value`]s records a computation graph in a [`Graph`] arena;
//! [`Value::backward`] walks it in reverse topological order and accumulates
//! exact gradients into every reachable node. The [`nn`] module builds neurons,
//! layers and multilayer perceptrons on top of those operations.
//!
//! ```
//! use nanograd_core::Graph;
//!
//! let graph = Graph::new();
//! let x = graph.leaf(2.0);
//! let y = graph.leaf(3.0);
//! let z = &x * &y + y.pow(2.0);
//! z.backward();
//! assert_eq!(x.grad(), 3.0);
//! assert_eq!(y.grad(), 8.0);
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod nn;
pub mod node;
pub mod ops;
pub mod utils;
pub mod value;

pub use error::NanogradError;
pub use graph::Graph;
pub use node::{NodeId, Op};
pub use ops::Exponent;
pub use value::Value;
