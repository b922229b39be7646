// Identity source configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::source::{SourceConfig, SslMode};
use clap::Args;
use std::path::PathBuf;

/// Identity source (crt.sh database) options
///
/// Flags given here take precedence over values loaded from `--source-config`.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Source configuration file (TOML format)
    #[arg(long = "source-config", value_name = "FILE", id = "source_config")]
    pub config: Option<PathBuf>,

    /// Generate example source configuration file and exit
    #[arg(
        long = "source-config-example",
        value_name = "FILE",
        id = "source_config_example"
    )]
    pub config_example: Option<PathBuf>,

    /// Database host
    #[arg(long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// Database port
    #[arg(long = "port", value_name = "PORT")]
    pub port: Option<u16>,

    /// TLS mode (disable, prefer, require, verify-ca, verify-full)
    #[arg(long = "sslmode", value_name = "MODE")]
    pub sslmode: Option<SslMode>,

    /// Maximum number of identities taken from one lookup
    #[arg(long = "row-limit", value_name = "COUNT")]
    pub row_limit: Option<i64>,

    /// Connect timeout in seconds
    #[arg(long = "connect-timeout", value_name = "SECONDS")]
    pub connect_timeout: Option<u64>,

    /// Query timeout in seconds
    #[arg(long = "query-timeout", value_name = "SECONDS")]
    pub query_timeout: Option<u64>,

    /// Skip the separate connectivity check before querying
    #[arg(long = "no-preflight")]
    pub no_preflight: bool,
}

impl SourceArgs {
    pub fn apply_overrides(&self, config: &mut SourceConfig) {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(sslmode) = self.sslmode {
            config.sslmode = sslmode;
        }
        if let Some(row_limit) = self.row_limit {
            config.row_limit = row_limit;
        }
        if let Some(secs) = self.connect_timeout {
            config.connect_timeout_secs = secs;
        }
        if let Some(secs) = self.query_timeout {
            config.query_timeout_secs = secs;
        }
    }
}
