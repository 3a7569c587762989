use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::error::{LoadError, PredictError};
use crate::math::matrix::Matrix;
use crate::network::metadata::ModelMetadata;
use crate::network::weights::WeightStore;

/// On-disk JSON layout of a pretrained model.
///
/// ```json
/// {
///   "w1": { "rows": H, "cols": N + 1, "data": [[...], ...] },
///   "w2": { "rows": L, "cols": H + 1, "data": [[...], ...] },
///   "metadata": { "description": "...", "output_labels": ["...", ...] }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelFile {
    w1: Matrix,
    w2: Matrix,
    #[serde(default)]
    metadata: Option<ModelMetadata>,
}

/// Validated weights plus their annotations, as read from a model file.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub weights: WeightStore,
    pub metadata: ModelMetadata,
}

impl Model {
    /// Pairs weights with metadata, checking that label names (if any) cover
    /// exactly the output layer.
    pub fn new(weights: WeightStore, metadata: ModelMetadata) -> Result<Model, PredictError> {
        if let Some(names) = &metadata.output_labels {
            if names.len() != weights.output_size() {
                return Err(PredictError::DimensionMismatch {
                    what: "output label names",
                    expected: weights.output_size(),
                    found: names.len(),
                });
            }
        }
        Ok(Model { weights, metadata })
    }

    /// Serializes the model to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<(), LoadError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        let (w1, w2) = self.weights.clone().into_parts();
        let out = ModelFile { w1, w2, metadata: Some(self.metadata.clone()) };
        serde_json::to_writer_pretty(writer, &out)?;
        Ok(())
    }

    /// Deserializes and validates a model from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<Model, LoadError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let raw: ModelFile = serde_json::from_reader(reader)?;
        let model = Model::from_file(raw)?;
        debug!(
            path,
            inputs = model.weights.input_size(),
            hidden = model.weights.hidden_size(),
            labels = model.weights.output_size(),
            "loaded model"
        );
        Ok(model)
    }

    /// Parses and validates a model from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Model, LoadError> {
        let raw: ModelFile = serde_json::from_str(s)?;
        Ok(Model::from_file(raw)?)
    }

    fn from_file(raw: ModelFile) -> Result<Model, PredictError> {
        let weights = WeightStore::new(raw.w1, raw.w2)?;
        Model::new(weights, raw.metadata.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY: &str = r#"{
        "w1": { "rows": 1, "cols": 2, "data": [[0.5, -1.0]] },
        "w2": { "rows": 2, "cols": 2, "data": [[0.0, 1.0], [0.0, -1.0]] }
    }"#;

    #[test]
    fn parses_file_without_metadata() {
        let model = Model::from_json_str(TINY).unwrap();
        assert_eq!(model.weights.input_size(), 1);
        assert_eq!(model.weights.hidden_size(), 1);
        assert_eq!(model.weights.output_size(), 2);
        assert_eq!(model.metadata, ModelMetadata::default());
    }

    #[test]
    fn rejects_label_names_that_do_not_cover_outputs() {
        let json = r#"{
            "w1": { "rows": 1, "cols": 2, "data": [[0.5, -1.0]] },
            "w2": { "rows": 2, "cols": 2, "data": [[0.0, 1.0], [0.0, -1.0]] },
            "metadata": { "output_labels": ["only-one"] }
        }"#;
        let err = Model::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Model(PredictError::DimensionMismatch { what: "output label names", expected: 2, found: 1 })
        ));
    }

    #[test]
    fn rejects_incompatible_weight_shapes() {
        let json = r#"{
            "w1": { "rows": 1, "cols": 2, "data": [[0.5, -1.0]] },
            "w2": { "rows": 1, "cols": 3, "data": [[0.0, 1.0, 2.0]] }
        }"#;
        let err = Model::from_json_str(json).unwrap_err();
        assert!(matches!(err, LoadError::Model(PredictError::DimensionMismatch { what: "W2 columns", .. })));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(Model::from_json_str("{ \"w1\": "), Err(LoadError::Json(_))));
    }
}
