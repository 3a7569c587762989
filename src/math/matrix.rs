use rand::prelude::*;
use serde::{Serialize, Deserialize};

use crate::error::PredictError;

/// Dense row-major matrix of `f64`.
///
/// `rows` and `cols` are stored explicitly so that a matrix with zero rows
/// still knows its width (an empty batch of N-feature rows, or a network
/// with no hidden units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Uniform samples in [-1, 1).
    pub fn random(rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }

        }

        res
    }

    /// Builds a matrix from rows, rejecting ragged input.
    ///
    /// An empty `data` yields a `0 × 0` matrix; use [`Matrix::from_rows_with_cols`]
    /// when the width of an empty matrix matters.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Matrix, PredictError> {
        let cols = data.first().map_or(0, |row| row.len());
        Matrix::from_rows_with_cols(data, cols)
    }

    /// Builds a matrix whose rows must all have exactly `cols` entries.
    pub fn from_rows_with_cols(data: Vec<Vec<f64>>, cols: usize) -> Result<Matrix, PredictError> {
        let m = Matrix { rows: data.len(), cols, data };
        m.check_shape()?;
        Ok(m)
    }

    /// Verifies that `data` agrees with the declared `rows` and `cols`.
    ///
    /// Deserialized matrices carry all three fields independently, so this is
    /// run on anything that did not come through a checked constructor.
    pub fn check_shape(&self) -> Result<(), PredictError> {
        if self.data.len() != self.rows {
            return Err(PredictError::DimensionMismatch {
                what: "matrix row count",
                expected: self.rows,
                found: self.data.len(),
            });
        }
        for (row, values) in self.data.iter().enumerate() {
            if values.len() != self.cols {
                return Err(PredictError::RaggedMatrix {
                    row,
                    expected: self.cols,
                    found: values.len(),
                });
            }
        }
        Ok(())
    }

    /// Position of the first NaN or infinite entry, if any.
    pub fn first_non_finite(&self) -> Option<(usize, usize)> {
        self.data.iter().enumerate().find_map(|(i, row)| {
            row.iter().position(|x| !x.is_finite()).map(|j| (i, j))
        })
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data
                .iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    /// Returns a copy with a leading column of ones: `[1 | self]`.
    pub fn with_bias_column(&self) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols + 1,
            data: self.data.iter().map(|row| prepend_bias(row)).collect(),
        }
    }

    /// Matrix product `self · rhs`.
    ///
    /// Each entry is accumulated from `k = 0` upward, the same order used by
    /// [`Matrix::mul_vec`], so a batched product reproduces row-by-row results
    /// exactly.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix, PredictError> {
        if self.cols != rhs.rows {
            return Err(PredictError::DimensionMismatch {
                what: "matrix product inner dimension",
                expected: self.cols,
                found: rhs.rows,
            });
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    /// Matrix-vector product `self · v`.
    pub fn mul_vec(&self, v: &[f64]) -> Result<Vec<f64>, PredictError> {
        if self.cols != v.len() {
            return Err(PredictError::DimensionMismatch {
                what: "matrix-vector product",
                expected: self.cols,
                found: v.len(),
            });
        }

        Ok(self.data
            .iter()
            .map(|row| {
                let mut sum = 0.0;
                for (w, x) in row.iter().zip(v) {
                    sum += w * x;
                }
                sum
            })
            .collect())
    }
}

/// Returns `[1, v...]`, the bias-augmented form of an activation vector.
pub fn prepend_bias(v: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(v.len() + 1);
    out.push(1.0);
    out.extend_from_slice(v);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_data() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, PredictError::RaggedMatrix { row: 1, expected: 2, found: 1 });
    }

    #[test]
    fn empty_matrix_keeps_declared_width() {
        let m = Matrix::from_rows_with_cols(vec![], 4).unwrap();
        assert_eq!((m.rows, m.cols), (0, 4));
        assert_eq!(m.with_bias_column().cols, 5);
    }

    #[test]
    fn check_shape_catches_inconsistent_row_count() {
        let m = Matrix { rows: 3, cols: 1, data: vec![vec![1.0]] };
        assert!(matches!(m.check_shape(), Err(PredictError::DimensionMismatch { expected: 3, found: 1, .. })));
    }

    #[test]
    fn matmul_matches_hand_computation() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![5.0], vec![6.0]]).unwrap();
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.data, vec![vec![17.0], vec![39.0]]);
    }

    #[test]
    fn matmul_rejects_incompatible_shapes() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        assert!(a.matmul(&b).is_err());
    }

    #[test]
    fn mul_vec_agrees_with_matmul_bitwise() {
        let w = Matrix::random(4, 6);
        let x: Vec<f64> = (0..6).map(|i| i as f64 * 0.37 - 1.1).collect();
        let by_vec = w.mul_vec(&x).unwrap();
        let as_row = Matrix::from_rows(vec![x]).unwrap();
        let by_mat = as_row.matmul(&w.transpose()).unwrap();
        assert_eq!(by_vec, by_mat.data[0]);
    }

    #[test]
    fn bias_is_prepended_at_column_zero() {
        assert_eq!(prepend_bias(&[10.0, -10.0]), vec![1.0, 10.0, -10.0]);
        let m = Matrix::from_rows(vec![vec![2.0], vec![3.0]]).unwrap().with_bias_column();
        assert_eq!(m.data, vec![vec![1.0, 2.0], vec![1.0, 3.0]]);
    }

    #[test]
    fn first_non_finite_reports_position() {
        let m = Matrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, f64::NAN]]).unwrap();
        assert_eq!(m.first_non_finite(), Some((1, 1)));
        assert_eq!(Matrix::zeros(2, 2).first_non_finite(), None);
    }
}
