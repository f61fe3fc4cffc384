use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unified error type for versioning operations
#[derive(Error, Debug)]
pub enum VersioningError {
    #[error("Malformed version '{content}': {reason}")]
    MalformedVersion { content: String, reason: String },

    #[error("Invalid bump level '{0}': level must be 'major', 'minor', or 'release'")]
    InvalidBumpLevel(String),

    #[error("Version overflow: {0} component is already at its maximum")]
    VersionOverflow(&'static str),

    #[error("I/O error on {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in versioning
pub type Result<T> = std::result::Result<T, VersioningError>;

impl VersioningError {
    /// Create a malformed version error for the given file content
    pub fn malformed(content: impl Into<String>, reason: impl Into<String>) -> Self {
        VersioningError::MalformedVersion {
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid bump level error naming the offending input
    pub fn invalid_level(level: impl Into<String>) -> Self {
        VersioningError::InvalidBumpLevel(level.into())
    }

    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        VersioningError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersioningError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = VersioningError::malformed("1.2.3", "version must start with 'v'");
        assert_eq!(
            err.to_string(),
            "Malformed version '1.2.3': version must start with 'v'"
        );
    }

    #[test]
    fn test_invalid_level_names_input() {
        let err = VersioningError::invalid_level("patch");
        let msg = err.to_string();
        assert!(msg.contains("'patch'"));
        assert!(msg.contains("major"));
        assert!(msg.contains("minor"));
        assert!(msg.contains("release"));
    }

    #[test]
    fn test_io_error_carries_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = VersioningError::io(Path::new("/tmp/VERSION"), io_err);
        let msg = err.to_string();
        assert!(msg.starts_with("I/O error on /tmp/VERSION"));
        assert!(msg.contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (VersioningError::malformed("x", "y"), "Malformed version"),
            (VersioningError::invalid_level("x"), "Invalid bump level"),
            (VersioningError::VersionOverflow("major"), "Version overflow"),
            (VersioningError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            VersioningError::malformed("", ""),
            VersioningError::invalid_level(""),
            VersioningError::config(""),
        ];

        for err in errors {
            // Even with empty input, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }
}
