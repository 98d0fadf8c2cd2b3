//! # polydoc-analyzer
//!
//! Obtains the analyzer snapshot extraction runs over. This is the only
//! asynchronous step: the snapshot is produced and decoded in full, then
//! handed to the (synchronous) extraction core.
//!
//! Two sources are supported:
//! - A snapshot JSON file, or stdin, written earlier by the analyzer
//! - An external analyzer command run as `program args... <path>` that prints
//!   the snapshot JSON on stdout

mod error;

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use polydoc_core::AnalysisSnapshot;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command as TokioCommand;

pub use error::AnalyzerError;

/// Where a pre-computed snapshot is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    File(PathBuf),
    Stdin,
}

impl SnapshotSource {
    /// `-` selects stdin, anything else is a file path.
    #[must_use]
    pub fn from_arg(arg: PathBuf) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg)
        }
    }

    async fn load(&self) -> Result<AnalysisSnapshot, AnalyzerError> {
        match self {
            Self::File(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|source| AnalyzerError::Read {
                        path: path.clone(),
                        source,
                    })?;
                tracing::debug!(path = %path.display(), bytes = bytes.len(), "read analyzer snapshot");
                decode(&bytes, &path.display().to_string())
            }
            Self::Stdin => read_stdin(tokio::io::stdin()).await,
        }
    }
}

/// Read a whole snapshot from a stdin-like stream; errors name it `-`.
async fn read_stdin<R: AsyncRead + Unpin>(
    mut reader: R,
) -> Result<AnalysisSnapshot, AnalyzerError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .await
        .map_err(|source| AnalyzerError::Read {
            path: PathBuf::from("-"),
            source,
        })?;
    tracing::debug!(bytes = bytes.len(), "read analyzer snapshot from stdin");
    decode(&bytes, "stdin")
}

/// An external analyzer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerCommand {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

impl AnalyzerCommand {
    async fn run(&self, target: &str) -> Result<AnalysisSnapshot, AnalyzerError> {
        tracing::info!(program = %self.program, path = target, "running analyzer");

        let mut command = TokioCommand::new(&self.program);
        command
            .args(&self.args)
            .arg(target)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| AnalyzerError::Timeout {
                program: self.program.clone(),
                timeout: self.timeout,
            })?
            .map_err(|source| AnalyzerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(AnalyzerError::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::debug!(bytes = output.stdout.len(), "analyzer finished");
        decode(&output.stdout, &self.program)
    }
}

/// How the snapshot for a run is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analyzer {
    Snapshot(SnapshotSource),
    Command(AnalyzerCommand),
}

impl Analyzer {
    /// Produce the complete snapshot for `target`.
    ///
    /// # Errors
    /// Returns `AnalyzerError` if the snapshot cannot be obtained or decoded,
    /// or if it has no document record for `target`.
    pub async fn analyze(&self, target: &str) -> Result<AnalysisSnapshot, AnalyzerError> {
        let snapshot = match self {
            Self::Snapshot(source) => source.load().await?,
            Self::Command(command) => command.run(target).await?,
        };
        require_document(&snapshot, target)?;
        Ok(snapshot)
    }
}

/// Decode snapshot JSON; `origin` names the source in errors.
///
/// # Errors
/// Returns `AnalyzerError::Decode` if `bytes` is not a snapshot.
pub fn decode(bytes: &[u8], origin: &str) -> Result<AnalysisSnapshot, AnalyzerError> {
    serde_json::from_slice(bytes).map_err(|source| AnalyzerError::Decode {
        origin: origin.to_string(),
        source,
    })
}

/// A snapshot without a record for `target` means the analyzer never
/// analyzed that file.
///
/// # Errors
/// Returns `AnalyzerError::DocumentMissing` when the record is absent.
pub fn require_document(snapshot: &AnalysisSnapshot, target: &str) -> Result<(), AnalyzerError> {
    if snapshot.document(target).is_some() {
        Ok(())
    } else {
        Err(AnalyzerError::DocumentMissing(target.to_string()))
    }
}
