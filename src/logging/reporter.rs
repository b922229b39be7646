// Fatal Reporter
// Single place a run-ending error is written to the console and the fatal log

use super::fatal_log::{FatalLog, format_fatal_line};
use chrono::Local;
use colored::Colorize;
use std::io::Write;
use tracing::warn;

/// Writes a fatal error once to the console error stream and the fatal log
pub struct FatalReporter {
    log: Box<dyn FatalLog>,
    colorize: bool,
}

impl FatalReporter {
    pub fn new(log: Box<dyn FatalLog>) -> Self {
        Self {
            log,
            colorize: false,
        }
    }

    /// Highlight the console copy (the log copy is always plain)
    pub fn with_color(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Report `message` and return the line that was recorded
    ///
    /// Failures to reach either destination are traced and otherwise ignored;
    /// the caller is already on its way out.
    pub fn report<W: Write>(&self, message: &str, console: &mut W) -> String {
        let line = format_fatal_line(&Local::now(), message);

        let console_line = if self.colorize {
            line.replacen("ERROR:", &"ERROR:".red().bold().to_string(), 1)
        } else {
            line.clone()
        };
        if let Err(e) = writeln!(console, "{}", console_line).and_then(|_| console.flush()) {
            warn!("Failed to write fatal error to console: {}", e);
        }

        if let Err(e) = self.log.record(&line) {
            warn!("Failed to append to fatal log: {}", e);
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{FileFatalLog, MemoryFatalLog};

    #[test]
    fn test_report_reaches_console_and_log() {
        let log = MemoryFatalLog::new();
        let reporter = FatalReporter::new(Box::new(log.clone()));
        let mut console = Vec::new();

        let line = reporter.report("Cannot create output file", &mut console);

        assert!(line.starts_with('['));
        assert!(line.ends_with("] ERROR: Cannot create output file"));
        assert_eq!(String::from_utf8(console).unwrap(), format!("{}\n", line));
        assert_eq!(log.lines(), vec![line]);
    }

    #[test]
    fn test_timestamp_shape() {
        let reporter = FatalReporter::new(Box::new(MemoryFatalLog::new()));
        let line = reporter.report("x", &mut Vec::new());

        // [YYYY-MM-DD HH:MM:SS]
        let stamp = &line[1..20];
        assert_eq!(&line[0..1], "[");
        assert_eq!(&line[20..21], "]");
        assert!(chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").is_ok());
    }

    #[test]
    fn test_unwritable_log_is_not_fatal() {
        let log = FileFatalLog::new("/nonexistent-dir/errors.log");
        let reporter = FatalReporter::new(Box::new(log));
        let mut console = Vec::new();

        reporter.report("still reported", &mut console);
        assert!(!console.is_empty());
    }
}
