// Output and diagnostics arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::logging::DEFAULT_ERROR_LOG;
use clap::Args;
use std::path::PathBuf;

/// Output location and logging options
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Directory the `<DOMAIN>_identities.txt` file is written to
    #[arg(long = "output-dir", short = 'o', value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Append fatal errors to this file
    #[arg(long = "error-log", value_name = "FILE", default_value = DEFAULT_ERROR_LOG)]
    pub error_log: PathBuf,

    /// Also write the run statistics as JSON to this file
    #[arg(long = "stats-json", value_name = "FILE")]
    pub stats_json: Option<PathBuf>,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Default for OutputArgs {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            error_log: PathBuf::from(DEFAULT_ERROR_LOG),
            stats_json: None,
            verbose: false,
            no_color: false,
        }
    }
}
