//! Shared helpers for unit tests.

use std::sync::{Arc, Mutex};
use crate::log::{Logger, LogEntry, LogSeverity};
use crate::reporter::Reporter;

/// Logger that records every entry it receives.
#[derive(Clone, Default)]
pub struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    /// Install a fresh capture logger as the global logger and return a handle to it.
    pub fn install() -> Self {
        let capture = Self::default();
        Reporter::set_logger(capture.clone());
        capture
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Entries logged under `source`.
    ///
    /// Other tests keep logging while a capture is installed, so assertions
    /// filter on their own source tag.
    pub fn entries_from(&self, source: &str) -> Vec<LogEntry> {
        self.entries().into_iter().filter(|e| e.source == source).collect()
    }

    pub fn messages_at(&self, source: &str, severity: LogSeverity) -> Vec<String> {
        self.entries_from(source)
            .into_iter()
            .filter(|e| e.severity == severity)
            .map(|e| e.message)
            .collect()
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}
