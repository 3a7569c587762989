pub mod math;
pub mod activation;
pub mod network;
pub mod config;
pub mod data;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::sigmoid;
pub use network::{classify, propagate, Model, ModelMetadata, PredictionService, WeightStore};
pub use config::{ExecutionStrategy, PredictConfig};
pub use error::{LoadError, PredictError};

/// Classifies every row of `x` with the network given by `w1` (`H × (N+1)`)
/// and `w2` (`L × (H+1)`), returning one label in `[1, L]` per row.
///
/// Bias weights are expected in column 0 of both matrices.
pub fn predict(w1: Matrix, w2: Matrix, x: &Matrix) -> Result<Vec<usize>, PredictError> {
    let weights = WeightStore::new(w1, w2)?;
    PredictionService::new(weights, PredictConfig::default()).predict(x)
}
