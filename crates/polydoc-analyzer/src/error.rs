//! Analysis failure types.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

/// Errors that stop an extraction before it starts. None are retried.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("Failed to read analyzer snapshot {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Analyzer snapshot from {origin} is not valid JSON: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to start analyzer '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Analyzer '{program}' exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Analyzer '{program}' did not finish within {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    #[error("Analyzer produced no document record for {0}")]
    DocumentMissing(String),
}
