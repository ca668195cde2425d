//! Batch orchestration over many files.
//!
//! Each file is read, parsed, sorted and recomposed independently of every
//! other file. Failures are isolated at file granularity: a file that cannot
//! be read or parsed is recorded in [`BatchReport::failures`] and the rest of
//! the batch carries on. Only files whose text actually changed appear in
//! [`BatchReport::modified`], in the order the files were given.
//!
//! # Example
//!
//! ```rust,ignore
//! use tidyclass::batch::BatchSorter;
//! use tidyclass::diagnostics::TracingDiagnostics;
//! use tidyclass::io::RealFileSystem;
//!
//! let report = BatchSorter::new(RealFileSystem::new())
//!     .with_filter(DocTagFilter::default())
//!     .sort_files(&files, &TracingDiagnostics);
//! ```

use crate::diagnostics::{DiagnosticEvent, Diagnostics};
use crate::errors::SortError;
use crate::io::traits::FileSystem;
use crate::sorting::{sort_source, ClassFilter, ClassOutcome, NoFilter, OverloadPolicy};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info_span};

/// Replacement text for one modified file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedFile {
    pub path: PathBuf,
    pub contents: String,
    /// Names of the classes whose members were reordered
    pub classes: Vec<String>,
}

#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: SortError,
}

#[derive(Debug)]
pub struct ClassFailure {
    pub path: PathBuf,
    pub class: String,
    pub error: SortError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub modified: Vec<SortedFile>,
    pub failures: Vec<FileFailure>,
    pub class_failures: Vec<ClassFailure>,
    pub files_processed: usize,
    /// True when cancellation stopped the batch before every file was seen
    pub cancelled: bool,
}

impl BatchReport {
    pub fn get(&self, path: &Path) -> Option<&str> {
        self.modified
            .iter()
            .find(|file| file.path == path)
            .map(|file| file.contents.as_str())
    }

    pub fn modified_paths(&self) -> Vec<PathBuf> {
        self.modified.iter().map(|file| file.path.clone()).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty() || !self.class_failures.is_empty()
    }
}

enum FileResult {
    Processed {
        sorted: Option<SortedFile>,
        class_failures: Vec<ClassFailure>,
    },
    Failed(FileFailure),
    Cancelled,
}

pub struct BatchSorter<F: FileSystem> {
    fs: F,
    policy: OverloadPolicy,
    filter: Box<dyn ClassFilter>,
    parallel: bool,
    cancel: Option<Arc<AtomicBool>>,
}

impl<F: FileSystem> BatchSorter<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            policy: OverloadPolicy::default(),
            filter: Box::new(NoFilter),
            parallel: true,
            cancel: None,
        }
    }

    pub fn with_policy(mut self, policy: OverloadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_filter(mut self, filter: impl ClassFilter + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Files not yet started when `flag` becomes true are skipped. Files
    /// already processed keep their results.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    pub fn sort_files(&self, files: &[PathBuf], diagnostics: &dyn Diagnostics) -> BatchReport {
        let _span = info_span!("sort_files", files = files.len()).entered();

        let results: Vec<FileResult> = if self.parallel {
            files
                .par_iter()
                .map(|path| self.sort_file(path, diagnostics))
                .collect()
        } else {
            files
                .iter()
                .map(|path| self.sort_file(path, diagnostics))
                .collect()
        };

        let mut report = BatchReport::default();
        for result in results {
            match result {
                FileResult::Processed {
                    sorted,
                    class_failures,
                } => {
                    report.files_processed += 1;
                    report.modified.extend(sorted);
                    report.class_failures.extend(class_failures);
                }
                FileResult::Failed(failure) => {
                    report.files_processed += 1;
                    report.failures.push(failure);
                }
                FileResult::Cancelled => report.cancelled = true,
            }
        }

        debug!(
            processed = report.files_processed,
            modified = report.modified.len(),
            failed = report.failures.len(),
            "Batch complete"
        );
        report
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn sort_file(&self, path: &Path, diagnostics: &dyn Diagnostics) -> FileResult {
        if self.is_cancelled() {
            return FileResult::Cancelled;
        }

        let outcome = self
            .fs
            .read_to_string(path)
            .and_then(|source| sort_source(&source, path, self.policy, self.filter.as_ref()));

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(error) => {
                diagnostics.emit(DiagnosticEvent::FileFailed {
                    file: path.to_path_buf(),
                    error: error.to_string(),
                });
                return FileResult::Failed(FileFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        };

        let mut reordered = Vec::new();
        let mut class_failures = Vec::new();

        for class_outcome in outcome.classes {
            match class_outcome {
                ClassOutcome::Reordered { class, .. } => {
                    diagnostics.emit(DiagnosticEvent::ClassReordered {
                        file: path.to_path_buf(),
                        class: class.clone(),
                    });
                    reordered.push(class);
                }
                ClassOutcome::Skipped { class } => {
                    diagnostics.emit(DiagnosticEvent::ClassSkipped {
                        file: path.to_path_buf(),
                        class,
                    });
                }
                ClassOutcome::Failed { class, error } => {
                    diagnostics.emit(DiagnosticEvent::ClassFailed {
                        file: path.to_path_buf(),
                        class: class.clone(),
                        error: error.to_string(),
                    });
                    class_failures.push(ClassFailure {
                        path: path.to_path_buf(),
                        class,
                        error,
                    });
                }
                ClassOutcome::Unchanged { .. } => {}
            }
        }

        let sorted = outcome.contents.map(|contents| SortedFile {
            path: path.to_path_buf(),
            contents,
            classes: reordered,
        });

        FileResult::Processed {
            sorted,
            class_failures,
        }
    }
}
