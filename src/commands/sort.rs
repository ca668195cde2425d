//! The sort command: discover or take a file, sort, write, format, report.

use crate::batch::{BatchReport, BatchSorter};
use crate::cli::setup::{configure_thread_pool, get_worker_count};
use crate::cli::OutputFormat;
use crate::config::{load_config, load_config_from, ConfigOverrides, TidyConfig};
use crate::diagnostics::TracingDiagnostics;
use crate::errors::SortError;
use crate::io::{format_files, write_sorted_files, FileSystem, FileWalker, RealFileSystem};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub struct SortOptions {
    /// Single file to sort; every discovered file when `None`
    pub file: Option<PathBuf>,
    /// Directory searched for files and for the config
    pub root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub check: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedFile {
    pub path: PathBuf,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureEntry {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    pub error: String,
}

/// Everything a run did, for terminal or JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub single_file: bool,
    pub check: bool,
    pub files_processed: usize,
    pub changed: Vec<ChangedFile>,
    pub written: Vec<PathBuf>,
    pub formatted: Vec<PathBuf>,
    pub failures: Vec<FailureEntry>,
    pub cancelled: bool,
}

impl RunSummary {
    fn from_report(report: BatchReport, single_file: bool, check: bool) -> Self {
        let mut failures: Vec<FailureEntry> = report
            .failures
            .into_iter()
            .map(|failure| FailureEntry {
                path: failure.path,
                class: None,
                error: failure.error.to_string(),
            })
            .collect();
        failures.extend(report.class_failures.into_iter().map(|failure| FailureEntry {
            path: failure.path,
            class: Some(failure.class),
            error: failure.error.to_string(),
        }));

        Self {
            single_file,
            check,
            files_processed: report.files_processed,
            changed: report
                .modified
                .into_iter()
                .map(|file| ChangedFile {
                    path: file.path,
                    classes: file.classes,
                })
                .collect(),
            failures,
            cancelled: report.cancelled,
            ..Self::default()
        }
    }

    pub fn has_file_failures(&self) -> bool {
        self.failures.iter().any(|failure| failure.class.is_none())
    }

    /// 1 when a file failed, or when `--check` found files to change.
    pub fn exit_code(&self) -> i32 {
        let pending = self.check && !self.changed.is_empty();
        if pending || self.has_file_failures() {
            1
        } else {
            0
        }
    }
}

fn resolve_config(options: &SortOptions) -> Result<TidyConfig> {
    let config = match &options.config_path {
        Some(path) => load_config_from(path)?,
        None => load_config(&options.root),
    };
    Ok(config.apply_overrides(&options.overrides))
}

fn collect_files(options: &SortOptions, config: &TidyConfig) -> Result<Vec<PathBuf>> {
    match &options.file {
        Some(file) => {
            if !RealFileSystem::new().is_file(file) {
                anyhow::bail!("File not found: {}", file.display());
            }
            Ok(vec![file.clone()])
        }
        None => FileWalker::new(options.root.clone())
            .with_extensions(config.discovery.extensions.clone())
            .with_ignore_patterns(config.discovery.ignore.clone())
            .walk()
            .with_context(|| format!("Failed to search {}", options.root.display())),
    }
}

pub fn sort_command(options: SortOptions) -> Result<RunSummary> {
    let config = resolve_config(&options)?;
    let files = collect_files(&options, &config)?;
    let single_file = options.file.is_some();

    if config.parallel.enabled {
        configure_thread_pool(config.parallel.jobs);
    }
    tracing::info!(
        files = files.len(),
        workers = if config.parallel.enabled { get_worker_count(config.parallel.jobs) } else { 1 },
        check = options.check,
        "Sorting class members"
    );

    let sorter = BatchSorter::new(RealFileSystem::new())
        .with_policy(config.sorting.overloads)
        .with_parallel(config.parallel.enabled);
    let sorter = match config.sorting.skip_filter() {
        Some(filter) => sorter.with_filter(filter),
        None => sorter,
    };

    let mut report = sorter.sort_files(&files, &TracingDiagnostics);

    if single_file {
        if let Some(failure) = report.failures.pop() {
            return Err(failure.error)
                .with_context(|| format!("Failed to sort {}", failure.path.display()));
        }
    }

    if options.check {
        return Ok(RunSummary::from_report(report, single_file, true));
    }

    let writes = write_sorted_files(sorter.file_system(), &report.modified);
    let mut summary = RunSummary::from_report(report, single_file, false);
    summary
        .failures
        .extend(writes.failures.iter().map(|error| FailureEntry {
            path: write_failure_path(error),
            class: None,
            error: error.to_string(),
        }));

    summary.formatted = format_files(config.formatter.tool, &writes.written).formatted;
    summary.written = writes.written;
    Ok(summary)
}

fn write_failure_path(error: &SortError) -> PathBuf {
    match error {
        SortError::Write { path, .. } => path.clone(),
        _ => PathBuf::new(),
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Terminal rendering of a run.
pub fn render_terminal(summary: &RunSummary) -> String {
    let mut lines = Vec::new();

    if summary.single_file && summary.changed.is_empty() {
        lines.push("No changes needed.".green().to_string());
    } else if summary.single_file {
        let label = if summary.check {
            "Would sort:".yellow().bold()
        } else {
            "Sorted and saved:".green().bold()
        };
        for file in &summary.changed {
            lines.push(format!("{} {}", label, display_path(&file.path)));
        }
    } else if !summary.single_file && summary.files_processed == 0 && !summary.cancelled {
        lines.push("No TypeScript files found".yellow().to_string());
    } else if summary.check {
        lines.push(format!(
            "{} {} files",
            "Would sort members in:".yellow().bold(),
            summary.changed.len()
        ));
    } else {
        lines.push(format!(
            "{} {} files",
            "Sorted members in:".green().bold(),
            summary.changed.len()
        ));
    }

    if !summary.single_file {
        for file in &summary.changed {
            lines.push(format!(
                "  {} ({})",
                display_path(&file.path),
                file.classes.join(", ")
            ));
        }
    }

    if !summary.formatted.is_empty() {
        lines.push(format!("Formatted {} files", summary.formatted.len()));
    }

    if !summary.failures.is_empty() {
        lines.push(format!("{} {}", "Errors:".red().bold(), summary.failures.len()));
        for failure in &summary.failures {
            lines.push(format!("  {}", failure.error));
        }
    }

    if summary.cancelled {
        lines.push("Cancelled before every file was processed".yellow().to_string());
    }

    lines.join("\n")
}

pub fn print_summary(summary: &RunSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Terminal => println!("{}", render_terminal(summary)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(summary).context("Failed to serialize summary")?
        ),
    }
    Ok(())
}
