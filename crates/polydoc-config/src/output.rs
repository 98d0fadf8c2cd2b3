//! Output rendering preferences.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Indent the JSON result instead of printing one line.
    #[serde(default)]
    pub pretty: bool,
}
