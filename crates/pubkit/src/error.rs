//! Error types for pubkit.
//!
//! The greeting cannot fail; these cover loading configuration only.

use std::path::{Path, PathBuf};

/// Result type alias for pubkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pubkit.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error tied to a specific file.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
