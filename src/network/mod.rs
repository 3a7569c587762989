pub mod classify;
pub mod forward;
pub mod metadata;
pub mod model_file;
pub mod predict;
pub mod weights;

pub use classify::classify;
pub use forward::{propagate, propagate_trace, ForwardTrace};
pub use metadata::ModelMetadata;
pub use model_file::Model;
pub use predict::PredictionService;
pub use weights::WeightStore;
