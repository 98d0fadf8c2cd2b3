//! Extraction settings.

use serde::{Deserialize, Serialize};

fn default_behavior_namespace() -> String {
    String::from("Polymer")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// Namespace stripped (with its `.`) from behavior names. Empty disables
    /// stripping.
    #[serde(default = "default_behavior_namespace")]
    pub behavior_namespace: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            behavior_namespace: default_behavior_namespace(),
        }
    }
}
