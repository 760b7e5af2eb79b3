//! Unified error types for the aidocs toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during aidocs operations.
#[derive(Error, Debug)]
pub enum AiDocsError {
    // --- Configuration ---

    /// The configuration file exists but could not be read.
    #[error("config file could not be read at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Generation ---

    /// The target (or one file below it) cannot be written.
    #[error("path not writable: {path}")]
    PathNotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file already exists and the overwrite policy keeps it.
    #[error("file already exists: {0}")]
    FileAlreadyExists(PathBuf),

    /// A parent directory of an output file could not be created.
    #[error("failed to create directory {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Templates ---

    /// A generated document could not be read back, or is not valid UTF-8.
    #[error("failed to read {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Strict rendering found placeholder tokens without a value.
    #[error("unresolved placeholders in {path}: {}", tokens.join(", "))]
    UnresolvedPlaceholders { path: PathBuf, tokens: Vec<String> },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, AiDocsError>`.
pub type Result<T> = std::result::Result<T, AiDocsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_placeholders_message_lists_tokens() {
        let err = AiDocsError::UnresolvedPlaceholders {
            path: PathBuf::from("README.md"),
            tokens: vec!["[PROJECT_NAME]".into(), "[DATE]".into()],
        };
        assert_eq!(
            err.to_string(),
            "unresolved placeholders in README.md: [PROJECT_NAME], [DATE]"
        );
    }
}
