use anyhow::Context;
use clap::Parser;
use polydoc_analyzer::AnalyzerError;

mod bootstrap;
mod cli;
mod commands;
mod output;

/// Exit status for configuration, I/O and other non-analysis failures.
const EXIT_FAILURE: i32 = 1;
/// Exit status when the analyzer could not produce a snapshot for the file.
const EXIT_ANALYSIS_FAILURE: i32 = 2;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("polydoc error: {error:#}");
        std::process::exit(exit_code(&error));
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    if cli.schema {
        return commands::schema::handle(cli.pretty);
    }

    let config = bootstrap::load_config()?;
    let path = cli.path.context("missing source file path")?;
    commands::extract::handle(&path, cli.snapshot, cli.pretty, &config).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("POLYDOC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries only the JSON result.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<AnalyzerError>().is_some() {
        EXIT_ANALYSIS_FAILURE
    } else {
        EXIT_FAILURE
    }
}
