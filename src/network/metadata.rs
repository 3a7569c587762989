use serde::{Deserialize, Serialize};

/// Optional annotations attached to a saved model.
/// All fields are Option<> so bare weight files deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ModelMetadata {
    pub description: Option<String>,
    /// Human-readable names for the output labels; entry `k - 1` names label `k`.
    pub output_labels: Option<Vec<String>>,
}

impl ModelMetadata {
    /// Name of a 1-based label, if the metadata provides one.
    pub fn label_name(&self, label: usize) -> Option<&str> {
        let names = self.output_labels.as_ref()?;
        names.get(label.checked_sub(1)?).map(String::as_str)
    }
}
