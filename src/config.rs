use serde::{Serialize, Deserialize};

/// How `PredictionService` walks the batch.
///
/// All strategies return identical labels; they differ only in how the
/// arithmetic is scheduled.
///
/// - `RowWise`  — one forward pass per row, sequentially
/// - `Parallel` — one forward pass per row, spread over the rayon pool
/// - `Batched`  — the whole batch as two matrix products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStrategy {
    RowWise,
    Parallel,
    #[default]
    Batched,
}

impl std::str::FromStr for ExecutionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "row_wise" | "rowwise" => Ok(ExecutionStrategy::RowWise),
            "parallel" => Ok(ExecutionStrategy::Parallel),
            "batched" => Ok(ExecutionStrategy::Batched),
            other => Err(format!(
                "unknown strategy '{other}' (expected row-wise, parallel or batched)"
            )),
        }
    }
}

/// Configuration for a `PredictionService`.
///
/// # Fields
/// - `strategy` — batch scheduling, see [`ExecutionStrategy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PredictConfig {
    #[serde(default)]
    pub strategy: ExecutionStrategy,
}

impl PredictConfig {
    pub fn new(strategy: ExecutionStrategy) -> Self {
        PredictConfig { strategy }
    }
}
