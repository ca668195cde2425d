//! Sort TypeScript class members into a canonical, deterministic order.
//!
//! Members are grouped into nine buckets (static before instance, fields
//! before methods, public before private, constructor between instance
//! fields and instance methods) and sorted by name inside each bucket.
//! Only the member list of a class is rewritten; everything else in the
//! file is preserved byte for byte.

// Export modules for library usage
pub mod analyzers;
pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod errors;
pub mod io;
pub mod sorting;

// Re-export commonly used types
pub use crate::batch::{BatchReport, BatchSorter, SortedFile};
pub use crate::config::TidyConfig;
pub use crate::core::{ClassResult, Member, MemberKind, Signature, Visibility};
pub use crate::diagnostics::{
    CollectingDiagnostics, DiagnosticEvent, Diagnostics, TracingDiagnostics,
};
pub use crate::errors::{Result, SortError};
pub use crate::sorting::{
    classify, compare_names, process_class, sort_source, Bucket, ClassFilter, DocTagFilter,
    NoFilter, OverloadPolicy,
};
