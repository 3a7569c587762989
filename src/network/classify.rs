use crate::error::PredictError;

/// Returns the 1-based label of the largest activation.
///
/// Ties go to the lowest index: the scan only replaces the current best on a
/// strictly greater value. A NaN never compares greater, so it can't win;
/// an all-NaN vector yields label 1.
pub fn classify(output: &[f64]) -> Result<usize, PredictError> {
    let (first, rest) = output.split_first().ok_or(PredictError::EmptyOutput)?;

    let mut best_idx = 0;
    let mut best = *first;
    for (i, &v) in rest.iter().enumerate() {
        if v > best || (best.is_nan() && !v.is_nan()) {
            best = v;
            best_idx = i + 1;
        }
    }

    Ok(best_idx + 1)
}
