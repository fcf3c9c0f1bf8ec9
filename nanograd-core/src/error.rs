use thiserror::Error;

/// Custom error type for the nanograd engine and its network layer.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NanogradError {
    /// `pow` only accepts real scalar exponents.
    #[error("Unsupported exponent type: only real scalar exponents are supported, got {found}")]
    UnsupportedExponentType { found: String },

    #[error("Input size mismatch in {operation}: expected {expected} inputs, got {actual}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Values from different graphs cannot be combined in {operation}")]
    GraphMismatch { operation: String },

    #[error("Invalid architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Invalid initialisation range: [{low}, {high}]")]
    InvalidInitRange { low: f64, high: f64 },
}
