use rayon::prelude::*;
use tracing::debug;

use crate::activation::activation::sigmoid_matrix;
use crate::config::{ExecutionStrategy, PredictConfig};
use crate::error::PredictError;
use crate::math::matrix::Matrix;
use crate::network::classify::classify;
use crate::network::forward::{check_row, propagate};
use crate::network::metadata::ModelMetadata;
use crate::network::weights::WeightStore;

/// Applies the forward pass and arg-max classifier to every row of a batch.
///
/// The service is stateless apart from its read-only weights, so it can be
/// shared across threads freely. Every strategy in [`ExecutionStrategy`]
/// produces bit-for-bit the same activations and labels.
#[derive(Debug, Clone)]
pub struct PredictionService {
    weights: WeightStore,
    config: PredictConfig,
}

impl PredictionService {
    pub fn new(weights: WeightStore, config: PredictConfig) -> Self {
        PredictionService { weights, config }
    }

    pub fn weights(&self) -> &WeightStore {
        &self.weights
    }

    pub fn config(&self) -> PredictConfig {
        self.config
    }

    /// Returns one 1-based label per batch row, in row order.
    ///
    /// # Errors
    /// - `DimensionMismatch` if `batch.cols != N` or `batch` is malformed
    /// - `InvalidInput` if any feature is NaN or infinite
    ///
    /// All checks run before any arithmetic; a failed call returns nothing.
    pub fn predict(&self, batch: &Matrix) -> Result<Vec<usize>, PredictError> {
        self.validate_batch(batch)?;
        debug!(
            rows = batch.rows,
            features = batch.cols,
            hidden = self.weights.hidden_size(),
            labels = self.weights.output_size(),
            strategy = ?self.config.strategy,
            "predicting batch"
        );

        match self.config.strategy {
            ExecutionStrategy::RowWise => batch
                .data
                .iter()
                .map(|row| classify(&propagate(row, &self.weights)?))
                .collect(),
            ExecutionStrategy::Parallel => batch
                .data
                .par_iter()
                .map(|row| classify(&propagate(row, &self.weights)?))
                .collect(),
            ExecutionStrategy::Batched => self
                .batched_outputs(batch)?
                .data
                .iter()
                .map(|row| classify(row))
                .collect(),
        }
    }

    /// Like [`PredictionService::predict`], but each label is replaced by its
    /// name from `metadata`. Labels without a name are rendered as numbers.
    pub fn predict_labels(
        &self,
        batch: &Matrix,
        metadata: &ModelMetadata,
    ) -> Result<Vec<String>, PredictError> {
        Ok(self
            .predict(batch)?
            .into_iter()
            .map(|label| match metadata.label_name(label) {
                Some(name) => name.to_owned(),
                None => label.to_string(),
            })
            .collect())
    }

    /// Output-layer activations for the whole batch (`M × L`), computed with
    /// the configured strategy.
    pub fn outputs(&self, batch: &Matrix) -> Result<Matrix, PredictError> {
        self.validate_batch(batch)?;

        let rows: Result<Vec<Vec<f64>>, PredictError> = match self.config.strategy {
            ExecutionStrategy::RowWise => batch
                .data
                .iter()
                .map(|row| propagate(row, &self.weights))
                .collect(),
            ExecutionStrategy::Parallel => batch
                .data
                .par_iter()
                .map(|row| propagate(row, &self.weights))
                .collect(),
            ExecutionStrategy::Batched => return self.batched_outputs(batch),
        };
        Matrix::from_rows_with_cols(rows?, self.weights.output_size())
    }

    /// `sigmoid([1 | sigmoid([1 | X] · W1ᵀ)] · W2ᵀ)`
    fn batched_outputs(&self, batch: &Matrix) -> Result<Matrix, PredictError> {
        let a1 = batch.with_bias_column();
        let z2 = a1.matmul(&self.weights.w1().transpose())?;
        let a2 = sigmoid_matrix(&z2).with_bias_column();
        let z3 = a2.matmul(&self.weights.w2().transpose())?;
        Ok(sigmoid_matrix(&z3))
    }

    fn validate_batch(&self, batch: &Matrix) -> Result<(), PredictError> {
        batch.check_shape()?;
        let n = self.weights.input_size();
        if batch.cols != n {
            return Err(PredictError::DimensionMismatch {
                what: "input batch columns",
                expected: n,
                found: batch.cols,
            });
        }
        for (i, row) in batch.data.iter().enumerate() {
            check_row(row, i, n)?;
        }
        Ok(())
    }
}
