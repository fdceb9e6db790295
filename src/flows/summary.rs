//! Summary flow - Turn a coverage.json report into a text table
//!
//! Steps:
//! 1. Load `<input_dir>/coverage.json`
//! 2. Sort entries by raw path string
//! 3. Make every path relative to the base path
//! 4. Render the table
//! 5. Emit it to a file or to stdout
//!
//! Steps 1-4 complete before the destination is touched, so a failed run
//! never leaves a partial table behind.

use anyhow::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::error::{self, ReportError};
use crate::core::model::{report_path, CoverageReport};
use crate::core::paths::relativize;
use crate::core::render::{Renderer, TableRow};

/// Where the rendered table goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Write the newline-joined table to this file, replacing its contents
    File(PathBuf),
    /// Print the input path, then the table, one line at a time
    Stdout,
}

impl Destination {
    pub fn from_output(output: Option<PathBuf>) -> Self {
        output.map_or(Destination::Stdout, Destination::File)
    }
}

/// Run the summary flow
pub fn run_summary(
    input_dir: &Path,
    destination: &Destination,
    base: &Path,
    renderer: &Renderer,
) -> Result<()> {
    tracing::debug!("base path: {}", base.display());
    tracing::debug!("reading {}", report_path(input_dir).display());

    let report = CoverageReport::load(input_dir)?;
    tracing::debug!("loaded {} file entries", report.files.len());

    let lines = build_table(&report, base, renderer)?;

    match destination {
        Destination::File(path) => {
            write_file(path, &lines)?;
            tracing::debug!("wrote {} lines to {}", lines.len(), path.display());
        }
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_console(&mut handle, &report_path(input_dir), &lines)?;
        }
    }

    Ok(())
}

/// Sort, relativize and render a loaded report
pub fn build_table(
    report: &CoverageReport,
    base: &Path,
    renderer: &Renderer,
) -> error::Result<Vec<String>> {
    let rows = report
        .sorted_files()
        .into_iter()
        .map(|entry| -> error::Result<TableRow> {
            Ok(TableRow {
                path: relativize(&entry.file, base)?,
                coverage: entry.coverage(),
            })
        })
        .collect::<error::Result<Vec<_>>>()?;

    Ok(renderer.render(&rows, &report.totals()))
}

/// Write lines joined by '\n' (no trailing newline), creating or truncating `path`
pub fn write_file(path: &Path, lines: &[String]) -> error::Result<()> {
    fs::write(path, lines.join("\n")).map_err(|source| ReportError::WriteError {
        destination: path.display().to_string(),
        source,
    })
}

/// Print the resolved input path followed by every table line
pub fn write_console<W: Write>(
    writer: &mut W,
    input_path: &Path,
    lines: &[String],
) -> error::Result<()> {
    let mut emit = || -> io::Result<()> {
        writeln!(writer, "{}", input_path.display())?;
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    };

    emit().map_err(|source| ReportError::WriteError {
        destination: "<stdout>".to_string(),
        source,
    })
}
