pub mod formatter;
pub mod real;
pub mod traits;
pub mod walker;
pub mod writer;

// Re-export I/O collaborators for convenient access
pub use formatter::{format_files, FormatSummary, FormatterKind};
pub use real::RealFileSystem;
pub use traits::FileSystem;
pub use walker::{find_source_files, FileWalker};
pub use writer::{write_sorted_files, WriteSummary};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}
