use serde::{Deserialize, Serialize};

/// An interatomic-potential model being compared against the DFT reference.
///
/// `id` names the on-disk directory holding the model's per-structure curve
/// tables; `label` is the human-readable title shown above the model's panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PotentialInfo {
    pub id: String,
    pub label: String,
}

impl PotentialInfo {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
