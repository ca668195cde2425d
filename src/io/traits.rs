//! I/O trait definitions.
//!
//! The sorting core never touches the disk itself. Reading sources and
//! writing results go through [`FileSystem`], so the batch orchestrator can
//! be exercised against an in-memory implementation.

use crate::errors::SortError;
use std::path::Path;

/// File system operations trait.
///
/// Implementations must be thread-safe (`Send + Sync`): files are processed
/// in parallel.
pub trait FileSystem: Send + Sync {
    /// Read a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns `SortError::Read` if the file doesn't exist, permission is
    /// denied, or the content isn't valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, SortError>;

    /// Overwrite a file with `content`.
    ///
    /// # Errors
    ///
    /// Returns `SortError::Write` on any I/O failure.
    fn write(&self, path: &Path, content: &str) -> Result<(), SortError>;

    /// Check if a path is an existing file.
    fn is_file(&self, path: &Path) -> bool;
}
