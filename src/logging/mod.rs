// Logging module - fatal error log and reporter

pub mod fatal_log;
pub mod reporter;

pub use fatal_log::{DEFAULT_ERROR_LOG, FatalLog, FileFatalLog, MemoryFatalLog, format_fatal_line};
pub use reporter::FatalReporter;
