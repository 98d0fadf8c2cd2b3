use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `polydoc` binary.
#[derive(Debug, Parser)]
#[command(
    name = "polydoc",
    version,
    about = "Describe the custom elements and behaviors a source file declares, as JSON"
)]
pub struct Cli {
    /// Source file to extract
    #[arg(required_unless_present = "schema")]
    pub path: Option<String>,

    /// Read the analyzer snapshot from FILE ("-" for stdin) instead of running the analyzer
    #[arg(short, long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print the JSON Schema of the output and exit
    #[arg(long, conflicts_with_all = ["path", "snapshot"])]
    pub schema: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
