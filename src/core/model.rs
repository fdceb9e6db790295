//! Coverage report model
//!
//! Mirrors the subset of a `coverage.json` document the summary table needs.
//! Numbers are kept as parsed so they render exactly as they were written.

use serde::Deserialize;
use serde_json::Number;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{ReportError, Result};

/// Name of the report file expected inside the input directory
pub const REPORT_FILE_NAME: &str = "coverage.json";

/// Coverage figures for a single source file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileEntry {
    /// Absolute path of the measured file
    pub file: String,
    pub percent_covered: Number,
    pub covered_lines: u64,
    pub total_lines: u64,
}

/// A parsed coverage report: per-file entries plus aggregate totals
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoverageReport {
    /// Entries in document order
    pub files: Vec<FileEntry>,
    pub percent_covered: Number,
    pub covered_lines: u64,
    pub total_lines: u64,
}

/// Percentage and line counts, as shown in one table row
#[derive(Debug, Clone, PartialEq)]
pub struct Coverage {
    pub percent_covered: Number,
    pub covered_lines: u64,
    pub total_lines: u64,
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% ({}/{})",
            self.percent_covered, self.covered_lines, self.total_lines
        )
    }
}

impl FileEntry {
    pub fn coverage(&self) -> Coverage {
        Coverage {
            percent_covered: self.percent_covered.clone(),
            covered_lines: self.covered_lines,
            total_lines: self.total_lines,
        }
    }
}

/// Location of the report inside `input_dir`
pub fn report_path(input_dir: &Path) -> PathBuf {
    input_dir.join(REPORT_FILE_NAME)
}

impl CoverageReport {
    /// Read and parse `<input_dir>/coverage.json`
    pub fn load(input_dir: &Path) -> Result<Self> {
        let path = report_path(input_dir);
        let content = fs::read(&path).map_err(|source| ReportError::NotFound {
            path: path.clone(),
            source,
        })?;

        let report = Self::from_slice(&content)
            .map_err(|source| ReportError::MalformedInput { path, source })?;

        for entry in &report.files {
            if entry.covered_lines > entry.total_lines {
                tracing::warn!(
                    "{} reports {} covered lines out of {}",
                    entry.file,
                    entry.covered_lines,
                    entry.total_lines
                );
            }
        }

        Ok(report)
    }

    /// Parse a report from raw JSON bytes
    pub fn from_slice(content: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(content)
    }

    /// Aggregate figures, taken verbatim from the document
    pub fn totals(&self) -> Coverage {
        Coverage {
            percent_covered: self.percent_covered.clone(),
            covered_lines: self.covered_lines,
            total_lines: self.total_lines,
        }
    }

    /// Entries ordered by raw path string; equal paths keep document order
    pub fn sorted_files(&self) -> Vec<&FileEntry> {
        let mut files: Vec<&FileEntry> = self.files.iter().collect();
        files.sort_by(|a, b| a.file.cmp(&b.file));
        files
    }
}
