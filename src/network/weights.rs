use crate::error::PredictError;
use crate::math::matrix::Matrix;

/// The two pretrained weight matrices of a one-hidden-layer network.
///
/// Layout (bias weights in column 0 of both matrices):
/// - `w1` — `H × (N + 1)`, input → hidden
/// - `w2` — `L × (H + 1)`, hidden → output
///
/// A `WeightStore` can only be obtained through [`WeightStore::new`], so every
/// instance satisfies the shape invariants and holds finite weights only.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightStore {
    w1: Matrix,
    w2: Matrix,
}

impl WeightStore {
    pub fn new(w1: Matrix, w2: Matrix) -> Result<WeightStore, PredictError> {
        w1.check_shape()?;
        w2.check_shape()?;

        if w1.cols == 0 {
            return Err(PredictError::DimensionMismatch {
                what: "W1 columns (bias column required)",
                expected: 1,
                found: 0,
            });
        }
        if w2.cols != w1.rows + 1 {
            return Err(PredictError::DimensionMismatch {
                what: "W2 columns",
                expected: w1.rows + 1,
                found: w2.cols,
            });
        }
        if w2.rows == 0 {
            return Err(PredictError::EmptyOutput);
        }
        if let Some((row, col)) = w1.first_non_finite() {
            return Err(PredictError::InvalidWeights { layer: 1, row, col });
        }
        if let Some((row, col)) = w2.first_non_finite() {
            return Err(PredictError::InvalidWeights { layer: 2, row, col });
        }

        Ok(WeightStore { w1, w2 })
    }

    /// N — number of input features.
    pub fn input_size(&self) -> usize {
        self.w1.cols - 1
    }

    /// H — number of hidden units.
    pub fn hidden_size(&self) -> usize {
        self.w1.rows
    }

    /// L — number of output labels.
    pub fn output_size(&self) -> usize {
        self.w2.rows
    }

    pub fn w1(&self) -> &Matrix {
        &self.w1
    }

    pub fn w2(&self) -> &Matrix {
        &self.w2
    }

    pub fn into_parts(self) -> (Matrix, Matrix) {
        (self.w1, self.w2)
    }
}
