use crate::math::matrix::Matrix;

/// Logistic function `1 / (1 + e^-x)`.
///
/// Maps every finite input into (0, 1); saturates to exactly 0.0 or 1.0 only
/// for very large |x|. Satisfies `sigmoid(-x) == 1 - sigmoid(x)` up to rounding.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Element-wise sigmoid over a vector.
pub fn sigmoid_vec(z: &[f64]) -> Vec<f64> {
    z.iter().map(|&x| sigmoid(x)).collect()
}

/// Element-wise sigmoid over every entry of a matrix.
pub fn sigmoid_matrix(z: &Matrix) -> Matrix {
    z.map(sigmoid)
}
