//! Error taxonomy for loading, relativizing and emitting a coverage table

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure aborts the run; nothing is retried or recovered locally.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input report is missing or unreadable
    #[error("coverage report not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input report is not the expected JSON structure
    #[error("malformed coverage report {}: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A reported file cannot be expressed relative to the base path
    #[error("{file} is not under base path {}", base.display())]
    PathNotUnderBase { file: String, base: PathBuf },

    /// The output destination cannot be created or written
    #[error("failed to write coverage table to {destination}")]
    WriteError {
        destination: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let err = ReportError::NotFound {
            path: PathBuf::from("/tmp/cov/coverage.json"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(
            err.to_string(),
            "coverage report not found: /tmp/cov/coverage.json"
        );
    }

    #[test]
    fn test_path_not_under_base_message() {
        let err = ReportError::PathNotUnderBase {
            file: "/other/x.py".to_string(),
            base: PathBuf::from("/repo"),
        };
        assert_eq!(err.to_string(), "/other/x.py is not under base path /repo");
    }

    #[test]
    fn test_write_error_keeps_source() {
        let err = ReportError::WriteError {
            destination: "out.txt".to_string(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
