use std::path::PathBuf;

use anyhow::Context;
use polydoc_analyzer::Analyzer;
use polydoc_config::PolydocConfig;
use polydoc_core::ExtractionResult;
use polydoc_extract::ExtractOptions;

use crate::bootstrap;
use crate::output::output;

/// Handle `polydoc <path>`.
pub async fn handle(
    path: &str,
    snapshot: Option<PathBuf>,
    pretty: bool,
    config: &PolydocConfig,
) -> anyhow::Result<()> {
    let analyzer = bootstrap::select_analyzer(snapshot, config)?;
    let options = bootstrap::extract_options(config);
    let result = run_extraction(&analyzer, path, &options).await?;
    output(&result, pretty || config.output.pretty)
}

/// Obtain the snapshot, then extract `path` from it. Nothing is produced
/// unless the whole analysis succeeds.
pub async fn run_extraction(
    analyzer: &Analyzer,
    path: &str,
    options: &ExtractOptions,
) -> anyhow::Result<ExtractionResult> {
    let snapshot = analyzer
        .analyze(path)
        .await
        .with_context(|| format!("analysis of {path} failed"))?;

    let result = polydoc_extract::extract(&snapshot, path, options);
    tracing::info!(
        path,
        elements = result.elements.len(),
        behaviors = result.behaviors.len(),
        "extracted"
    );
    Ok(result)
}
