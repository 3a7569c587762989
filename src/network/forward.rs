use crate::activation::activation::sigmoid_vec;
use crate::error::PredictError;
use crate::math::matrix::prepend_bias;
use crate::network::weights::WeightStore;

/// Every intermediate vector of one forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardTrace {
    /// Input with the bias unit prepended (length N + 1).
    pub a1: Vec<f64>,
    /// Hidden pre-activations (length H).
    pub z2: Vec<f64>,
    /// Hidden activations with the bias unit prepended (length H + 1).
    pub a2: Vec<f64>,
    /// Output pre-activations (length L).
    pub z3: Vec<f64>,
    /// Output activations (length L), each in (0, 1).
    pub output: Vec<f64>,
}

/// Forward pass for a single feature row; returns the output activations.
pub fn propagate(x: &[f64], weights: &WeightStore) -> Result<Vec<f64>, PredictError> {
    propagate_trace(x, weights).map(|trace| trace.output)
}

/// Forward pass for a single feature row, keeping every intermediate vector.
pub fn propagate_trace(x: &[f64], weights: &WeightStore) -> Result<ForwardTrace, PredictError> {
    check_row(x, 0, weights.input_size())?;

    let a1 = prepend_bias(x);
    let z2 = weights.w1().mul_vec(&a1)?;
    let a2 = prepend_bias(&sigmoid_vec(&z2));
    let z3 = weights.w2().mul_vec(&a2)?;
    let output = sigmoid_vec(&z3);

    Ok(ForwardTrace { a1, z2, a2, z3, output })
}

/// Validates one feature row against the expected width. `row` is only used
/// to locate a non-finite value in the error.
pub(crate) fn check_row(x: &[f64], row: usize, n: usize) -> Result<(), PredictError> {
    if x.len() != n {
        return Err(PredictError::DimensionMismatch {
            what: "input features",
            expected: n,
            found: x.len(),
        });
    }
    if let Some(col) = x.iter().position(|v| !v.is_finite()) {
        return Err(PredictError::InvalidInput { row, col });
    }
    Ok(())
}
