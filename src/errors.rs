//! Error types for class member sorting.
//!
//! Every variant carries enough context (file path or class name) to be
//! reported on its own, because failures are isolated per class or per file
//! and collected into the batch report rather than aborting the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    /// The syntax tree for a file could not be produced or contains errors
    #[error("Parse error in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// A class contains a member shape the classifier cannot place
    #[error("Unsupported construct in class {class}: {message}")]
    UnsupportedConstruct { class: String, message: String },

    /// Overload grouping is disabled and the class declares overloads
    #[error("Overloads are not supported (class {class}); file skipped")]
    OverloadsRejected { class: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SortError {
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnsupportedConstruct {
            class: class.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error invalidates the whole file rather than one class.
    pub fn is_file_level(&self) -> bool {
        !matches!(self, Self::UnsupportedConstruct { .. })
    }
}

pub type Result<T> = std::result::Result<T, SortError>;
