use thiserror::Error;

/// Errors raised by the inference core.
///
/// Every variant is detected before any arithmetic runs, so a failed call
/// never yields a partial prediction vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// Weight or input shapes are incompatible.
    #[error("dimension mismatch in {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// The output layer has no units, so there is nothing to arg-max over.
    #[error("output layer is empty")]
    EmptyOutput,

    /// A weight is NaN or infinite. `layer` is 1 for W1 and 2 for W2.
    #[error("non-finite weight in layer {layer} at ({row}, {col})")]
    InvalidWeights { layer: usize, row: usize, col: usize },

    /// A feature value is NaN or infinite.
    #[error("non-finite input at row {row}, column {col}")]
    InvalidInput { row: usize, col: usize },

    /// Matrix rows do not all have the declared width.
    #[error("ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while reading model files and feature batches.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed model JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("invalid model: {0}")]
    Model(#[from] PredictError),
}
