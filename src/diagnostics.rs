//! Diagnostics sink: leveled, timestamped event messages.
//!
//! Every entry is kept in a bounded in-memory list for the log console,
//! optionally appended to a log file, and forwarded to `tracing`.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::{debug, error, info, instrument, warn};

/// Default number of entries kept in memory.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Severity of a diagnostics entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum LogLevel {
    /// General information.
    #[display("INFO")]
    Info,
    /// Something unexpected that the game recovered from.
    #[display("WARN")]
    Warning,
    /// A failure.
    #[display("ERROR")]
    Error,
    /// Developer detail.
    #[display("DEBUG")]
    Debug,
    /// Moves, wins and draws.
    #[display("GAME")]
    GameEvent,
}

/// A single recorded message.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Display)]
#[display("[{}] {}: {}", level, timestamp, message)]
pub struct LogEntry {
    level: LogLevel,
    message: String,
    timestamp: String,
}

/// Failure to open the diagnostics log file.
#[derive(Debug, Clone, Display, Error)]
#[display("Failed to open log file {}: {}", path.display(), message)]
pub struct DiagnosticsError {
    /// The file that could not be opened.
    pub path: PathBuf,
    /// The underlying I/O error message.
    pub message: String,
}

#[derive(Debug)]
struct Inner {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
    file: Option<File>,
    file_path: Option<PathBuf>,
    file_logging: bool,
}

/// Shared handle to the diagnostics sink.
///
/// Clones share the same entries and file. Pass a handle to each component
/// that reports events.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    inner: Arc<Mutex<Inner>>,
}

/// Local wall-clock time as `HH:MM:SS.mmm`.
fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S%.3f").to_string()
}

impl Diagnostics {
    /// Creates an in-memory sink keeping at most `max_entries` entries.
    #[instrument]
    pub fn new(max_entries: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: VecDeque::new(),
                max_entries: max_entries.max(1),
                file: None,
                file_path: None,
                file_logging: false,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Opens `path` in append mode and turns file logging on.
    ///
    /// On failure file logging is turned off and any previous file is
    /// closed; in-memory logging is unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticsError`] if the file cannot be opened or the
    /// session header cannot be written.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn set_log_file(&self, path: impl AsRef<Path>) -> Result<(), DiagnosticsError> {
        let path = path.as_ref();
        let mut inner = self.lock();
        inner.file = None;
        inner.file_logging = false;
        inner.file_path = Some(path.to_path_buf());

        let opened = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| {
                writeln!(file, "\n=== Log Session Started: {} ===", timestamp())?;
                file.flush()?;
                Ok(file)
            });

        match opened {
            Ok(file) => {
                inner.file = Some(file);
                inner.file_logging = true;
                info!("Log file opened");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to open log file, continuing in memory");
                Err(DiagnosticsError {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        }
    }

    /// Turns file logging on or off. Has no effect without an open file.
    #[instrument(skip(self))]
    pub fn enable_file_logging(&self, enable: bool) {
        let mut inner = self.lock();
        inner.file_logging = enable && inner.file.is_some();
        debug!(file_logging = inner.file_logging, "File logging toggled");
    }

    /// Returns true while entries are written to the log file.
    pub fn file_logging(&self) -> bool {
        self.lock().file_logging
    }

    /// The log file most recently requested, whether or not it opened.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.lock().file_path.clone()
    }

    /// Records a message at the given level.
    pub fn record(&self, level: LogLevel, message: impl Into<String>) {
        let entry = LogEntry {
            level,
            message: message.into(),
            timestamp: timestamp(),
        };

        match level {
            LogLevel::Info => info!(target: "noughts::diagnostics", "{}", entry.message),
            LogLevel::Warning => warn!(target: "noughts::diagnostics", "{}", entry.message),
            LogLevel::Error => error!(target: "noughts::diagnostics", "{}", entry.message),
            LogLevel::Debug => debug!(target: "noughts::diagnostics", "{}", entry.message),
            LogLevel::GameEvent => {
                info!(target: "noughts::diagnostics", game_event = true, "{}", entry.message)
            }
        }

        let mut inner = self.lock();
        if inner.file_logging {
            let written = match inner.file.as_mut() {
                Some(file) => writeln!(file, "{entry}").and_then(|_| file.flush()),
                None => Ok(()),
            };
            if let Err(e) = written {
                warn!(error = %e, "Log file write failed, disabling file logging");
                inner.file = None;
                inner.file_logging = false;
            }
        }

        inner.entries.push_back(entry);
        while inner.entries.len() > inner.max_entries {
            inner.entries.pop_front();
        }
    }

    /// Records an [`LogLevel::Info`] message.
    pub fn info(&self, message: impl Into<String>) {
        self.record(LogLevel::Info, message);
    }

    /// Records a [`LogLevel::Warning`] message.
    pub fn warning(&self, message: impl Into<String>) {
        self.record(LogLevel::Warning, message);
    }

    /// Records an [`LogLevel::Error`] message.
    pub fn error(&self, message: impl Into<String>) {
        self.record(LogLevel::Error, message);
    }

    /// Records a [`LogLevel::Debug`] message.
    pub fn debug(&self, message: impl Into<String>) {
        self.record(LogLevel::Debug, message);
    }

    /// Records a [`LogLevel::GameEvent`] message.
    pub fn game_event(&self, message: impl Into<String>) {
        self.record(LogLevel::GameEvent, message);
    }

    /// Snapshot of the retained entries, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().entries.iter().cloned().collect()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns true when no entries are retained.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Drops all in-memory entries. The log file is untouched.
    #[instrument(skip(self))]
    pub fn clear(&self) {
        self.lock().entries.clear();
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}
