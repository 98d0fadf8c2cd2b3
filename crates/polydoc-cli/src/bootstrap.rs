use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use polydoc_analyzer::{Analyzer, AnalyzerCommand, SnapshotSource};
use polydoc_config::PolydocConfig;
use polydoc_extract::ExtractOptions;

pub fn load_config() -> anyhow::Result<PolydocConfig> {
    PolydocConfig::load_with_dotenv().context("failed to load polydoc configuration")
}

/// `--snapshot` wins over the configured analyzer command. The `[analyzer]`
/// section is only checked when there is no snapshot.
pub fn select_analyzer(
    snapshot: Option<PathBuf>,
    config: &PolydocConfig,
) -> anyhow::Result<Analyzer> {
    if let Some(arg) = snapshot {
        return Ok(Analyzer::Snapshot(SnapshotSource::from_arg(arg)));
    }

    let analyzer = config
        .require_analyzer()
        .context("no analyzer to run: pass --snapshot or configure [analyzer]")?;
    Ok(Analyzer::Command(AnalyzerCommand {
        program: analyzer.program.clone(),
        args: analyzer.args.clone(),
        timeout: Duration::from_secs(analyzer.timeout_secs),
    }))
}

pub fn extract_options(config: &PolydocConfig) -> ExtractOptions {
    ExtractOptions {
        behavior_namespace: config.extract.behavior_namespace.clone(),
    }
}
