//! External analyzer command configuration.

use serde::{Deserialize, Serialize};

/// Default analyzer timeout in seconds.
const fn default_timeout_secs() -> u64 {
    60
}

/// The command that dumps an analyzer snapshot for a file.
///
/// It is run as `program args... <path>` and must print the snapshot JSON
/// on stdout.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyzerConfig {
    /// Executable to run (e.g., `node`).
    #[serde(default)]
    pub program: String,

    /// Arguments placed before the target path (e.g., `["dump-analysis.js"]`).
    #[serde(default)]
    pub args: Vec<String>,

    /// How long to wait for the analyzer before giving up.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            program: String::new(),
            args: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AnalyzerConfig {
    /// Whether an analyzer program has been set.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.program.is_empty()
    }
}
