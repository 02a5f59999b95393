use thiserror::Error;

/// Custom error type for the ScalarGrad engine and the layers built on it.
///
/// The arithmetic and activation operators are total over the reals and never
/// produce an error; only the checked boundaries (literal promotion, leaf
/// mutation, network construction, configuration) return one of these.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Non-numeric literal: {0} cannot be promoted to a graph node")]
    NonNumericLiteral(String),

    #[error("Node {index} is not a leaf: only leaf data may be overwritten")]
    NotALeaf { index: usize },

    #[error("Unknown activation function: '{0}'")]
    UnknownActivation(String),

    #[error("Invalid network architecture: {0}")]
    InvalidArchitecture(String),

    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Dataset mismatch: {inputs} input rows but {targets} targets")]
    DatasetMismatch { inputs: usize, targets: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse environment variable {key}={value:?}")]
    ConfigParse { key: String, value: String },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
