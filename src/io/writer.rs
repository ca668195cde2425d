use crate::batch::SortedFile;
use crate::errors::SortError;
use crate::io::traits::FileSystem;
use std::path::PathBuf;
use tracing::{debug, error};

/// Outcome of writing sorted files back to disk.
#[derive(Debug, Default)]
pub struct WriteSummary {
    pub written: Vec<PathBuf>,
    pub failures: Vec<SortError>,
}

/// Overwrite every sorted file. A failed write is recorded and the
/// remaining files are still written.
pub fn write_sorted_files<F: FileSystem + ?Sized>(fs: &F, files: &[SortedFile]) -> WriteSummary {
    let mut summary = WriteSummary::default();

    for file in files {
        match fs.write(&file.path, &file.contents) {
            Ok(()) => {
                debug!(file = %file.path.display(), "Wrote sorted file");
                summary.written.push(file.path.clone());
            }
            Err(e) => {
                error!("{}", e);
                summary.failures.push(e);
            }
        }
    }

    summary
}
