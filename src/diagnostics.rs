//! Diagnostics sink.
//!
//! The batch orchestrator reports what it does through an injected
//! [`Diagnostics`] implementation instead of printing. Production code uses
//! [`TracingDiagnostics`]; tests capture events with
//! [`CollectingDiagnostics`].

use parking_lot::Mutex;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, error, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DiagnosticEvent {
    ClassReordered { file: PathBuf, class: String },
    ClassSkipped { file: PathBuf, class: String },
    ClassFailed { file: PathBuf, class: String, error: String },
    FileFailed { file: PathBuf, error: String },
}

impl DiagnosticEvent {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            DiagnosticEvent::ClassFailed { .. } | DiagnosticEvent::FileFailed { .. }
        )
    }
}

pub trait Diagnostics: Send + Sync {
    fn emit(&self, event: DiagnosticEvent);
}

/// Forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, event: DiagnosticEvent) {
        match event {
            DiagnosticEvent::ClassReordered { file, class } => {
                info!(file = %file.display(), class = %class, "Sorting members in class");
            }
            DiagnosticEvent::ClassSkipped { file, class } => {
                debug!(file = %file.display(), class = %class, "Class excluded from sorting");
            }
            DiagnosticEvent::ClassFailed { file, class, error } => {
                error!(file = %file.display(), class = %class, "{}", error);
            }
            DiagnosticEvent::FileFailed { file, error } => {
                error!(file = %file.display(), "{}", error);
            }
        }
    }
}

/// Records every event in emission order.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().clone()
    }

    pub fn errors(&self) -> Vec<DiagnosticEvent> {
        self.events
            .lock()
            .iter()
            .filter(|event| event.is_error())
            .cloned()
            .collect()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn emit(&self, event: DiagnosticEvent) {
        self.events.lock().push(event);
    }
}
