//! Path utilities
//!
//! Display paths are relative to the base path and always use '/' as separator.

use std::path::{Path, PathBuf};

use crate::core::error::{ReportError, Result};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the base directory
///
/// The comparison is lexical: no symlinks are resolved and nothing is read
/// from disk. A path equal to the base renders as `.`.
pub fn relativize(file: &str, base: &Path) -> Result<String> {
    let rest = Path::new(file)
        .strip_prefix(base)
        .map_err(|_| ReportError::PathNotUnderBase {
            file: file.to_string(),
            base: base.to_path_buf(),
        })?;

    let rest: PathBuf = rest.components().collect();
    if rest.as_os_str().is_empty() {
        return Ok(".".to_string());
    }
    Ok(normalize_path(&rest))
}
