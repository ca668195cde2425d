//! Optional post-processing with an external code formatter.
//!
//! Formatting runs after the sorted files are written and never affects the
//! sort result: a missing tool or a failing run is logged and skipped.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    /// Leave sorted files as written
    #[default]
    None,
    /// Run `prettier --write`
    Prettier,
    /// Run `@biomejs/biome format --write`
    Biome,
}

impl FormatterKind {
    fn package(self) -> Option<&'static str> {
        match self {
            FormatterKind::None => None,
            FormatterKind::Prettier => Some("prettier"),
            FormatterKind::Biome => Some("@biomejs/biome"),
        }
    }

    /// Arguments passed to `npx` to format one file.
    pub fn format_args(self, path: &Path) -> Option<Vec<String>> {
        let file = path.to_string_lossy().into_owned();
        match self {
            FormatterKind::None => None,
            FormatterKind::Prettier => Some(vec!["prettier".into(), "--write".into(), file]),
            FormatterKind::Biome => Some(vec![
                "@biomejs/biome".into(),
                "format".into(),
                "--write".into(),
                file,
            ]),
        }
    }

    /// Arguments that probe for a locally installed tool without installing it.
    pub fn probe_args(self) -> Option<Vec<String>> {
        self.package()
            .map(|pkg| vec!["--no-install".into(), pkg.into(), "--version".into()])
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct FormatSummary {
    pub formatted: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
    /// Set when the tool was requested but could not be found
    pub skipped: bool,
}

pub fn is_installed(kind: FormatterKind) -> bool {
    let Some(args) = kind.probe_args() else {
        return false;
    };
    let Ok(npx) = which::which("npx") else {
        return false;
    };

    Command::new(npx)
        .args(&args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

/// Format each file in turn with the selected tool.
pub fn format_files(kind: FormatterKind, files: &[PathBuf]) -> FormatSummary {
    let mut summary = FormatSummary::default();
    if kind == FormatterKind::None || files.is_empty() {
        return summary;
    }

    let npx = match which::which("npx") {
        Ok(npx) if is_installed(kind) => npx,
        _ => {
            warn!("{:?} is not installed. Skipping formatting.", kind);
            summary.skipped = true;
            return summary;
        }
    };

    for file in files {
        let Some(args) = kind.format_args(file) else {
            continue;
        };

        let status = Command::new(&npx).args(&args).status();
        match status {
            Ok(status) if status.success() => {
                info!(file = %file.display(), "Formatted");
                summary.formatted.push(file.clone());
            }
            Ok(status) => {
                warn!(file = %file.display(), "{:?} formatting failed with {}", kind, status);
                summary.failed.push(file.clone());
            }
            Err(e) => {
                warn!(file = %file.display(), "{:?} formatting failed: {}", kind, e);
                summary.failed.push(file.clone());
            }
        }
    }

    summary
}
