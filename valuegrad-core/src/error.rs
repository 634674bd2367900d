use thiserror::Error;

/// Custom error type for the valuegrad framework.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ValueGradError {
    #[error("Cannot reduce an empty list of values during operation {operation}")]
    EmptyReduction { operation: String },

    #[error("Input size mismatch: expected {expected}, got {actual} during operation {operation}")]
    InputSizeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid checkpoint: cannot rewind to {checkpoint}, graph only holds {len} nodes")]
    InvalidCheckpoint { checkpoint: usize, len: usize },

    #[error("Invalid hyperparameter '{name}' = {value}: {reason}")]
    InvalidHyperparameter {
        name: String,
        value: f64,
        reason: String,
    },

    #[error("Numeric conversion error: {0}")]
    ConversionError(String),

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Container must hold at least one layer")]
    EmptySequential,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}
