//! Production implementation of the [`FileSystem`] trait.
//!
//! ```rust,ignore
//! use tidyclass::io::real::RealFileSystem;
//! use tidyclass::io::traits::FileSystem;
//!
//! let fs = RealFileSystem::new();
//! let content = fs.read_to_string(Path::new("src/app.ts"))?;
//! ```

use crate::errors::SortError;
use crate::io::traits::FileSystem;
use std::fs;
use std::path::Path;

/// Delegates directly to `std::fs`. Thread-safe and freely shareable.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, SortError> {
        fs::read_to_string(path).map_err(|source| SortError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), SortError> {
        fs::write(path, content).map_err(|source| SortError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
