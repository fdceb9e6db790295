//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use crate::core::render::Renderer;
use crate::flows::summary::{run_summary, Destination};

/// covtable - render a coverage.json report as a fixed-width summary table.
#[derive(Parser, Debug)]
#[command(name = "covtable")]
#[command(
    author,
    version,
    about,
    long_about = r#"covtable reads INPUT_DIR/coverage.json and renders one row per file,
sorted by path, followed by the report totals.

File paths are shown relative to the current working directory. Every file in
the report must lie under it, otherwise the run fails without writing output.

Examples:
    covtable htmlcov summary.txt
    covtable htmlcov
"#
)]
pub struct Cli {
    /// Directory containing coverage.json.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Write the table to this file instead of stdout.
    #[arg(
        value_name = "OUTPUT_FILE",
        long_help = "Write the table to this file, creating or truncating it.\n\n\
If omitted, the input path and the table are printed to stdout."
    )]
    pub output_file: Option<PathBuf>,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable debug diagnostics on stderr. RUST_LOG, when set, takes precedence.\n\
The rendered table is never affected."
    )]
    pub verbose: bool,
}

/// Install the stderr diagnostics subscriber
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);

    let base = std::env::current_dir().context("failed to resolve the working directory")?;
    let destination = Destination::from_output(cli.output_file);

    run_summary(&cli.input_dir, &destination, &base, &Renderer::default())
}
