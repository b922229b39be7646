// Fatal Error Log
//
// Append-only diagnostic sink for errors that abort a run. Every line has the
// form `[YYYY-MM-DD HH:MM:SS] ERROR: <message>`.

use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Default fatal log file, relative to the working directory
pub const DEFAULT_ERROR_LOG: &str = "script_errors.log";

/// Timestamp layout used on every fatal line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format one fatal line (without trailing newline)
pub fn format_fatal_line(timestamp: &DateTime<Local>, message: &str) -> String {
    format!("[{}] ERROR: {}", timestamp.format(TIMESTAMP_FORMAT), message)
}

/// Fatal log trait - implement this to redirect fatal diagnostics
pub trait FatalLog: Send + Sync {
    /// Append one already formatted line
    fn record(&self, message: &str) -> io::Result<()>;
}

/// Appends fatal lines to a file on disk
#[derive(Debug, Clone)]
pub struct FileFatalLog {
    path: PathBuf,
}

impl FileFatalLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FatalLog for FileFatalLog {
    fn record(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", message)?;
        file.flush()
    }
}

/// Keeps fatal lines in memory; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct MemoryFatalLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryFatalLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded lines
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl FatalLog for MemoryFatalLog {
    fn record(&self, message: &str) -> io::Result<()> {
        let mut lines = self
            .lines
            .lock()
            .map_err(|_| io::Error::other("fatal log buffer poisoned"))?;
        lines.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_format_fatal_line() {
        let ts = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(
            format_fatal_line(&ts, "Cannot create output file"),
            "[2024-03-09 07:05:01] ERROR: Cannot create output file"
        );
    }

    #[test]
    fn test_file_log_appends() {
        let dir = TempDir::new().unwrap();
        let log = FileFatalLog::new(dir.path().join("errors.log"));

        log.record("[2024-01-01 00:00:00] ERROR: first").unwrap();
        log.record("[2024-01-01 00:00:01] ERROR: second").unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(
            contents,
            "[2024-01-01 00:00:00] ERROR: first\n[2024-01-01 00:00:01] ERROR: second\n"
        );
    }

    #[test]
    fn test_memory_log_shared_between_clones() {
        let log = MemoryFatalLog::new();
        let handle = log.clone();

        log.record("line").unwrap();
        assert_eq!(handle.lines(), vec!["line".to_string()]);
    }
}
