//! covtable - Render a coverage.json report as a fixed-width text table
//!
//! covtable provides:
//! - Loading `<dir>/coverage.json`
//! - Paths shown relative to the working directory, sorted
//! - Output to a file or to stdout

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
