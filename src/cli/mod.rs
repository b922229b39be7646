// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Parser;

mod output_args;
mod source_args;

pub use output_args::OutputArgs;
pub use source_args::SourceArgs;

use crate::source::SourceConfig;

/// crtsearch - certificate common-name identities for a domain
///
/// Looks up every certificate common name mentioning DOMAIN in the crt.sh
/// certificate-transparency database and prints them, wildcards first, one per
/// line. The same lines are saved to `<DOMAIN>_identities.txt`.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
#[command(name = "crtsearch")]
pub struct Args {
    // ============ Target ============
    /// Domain to search for (letters, digits, '.' and '-' only)
    #[arg(
        value_name = "DOMAIN",
        required_unless_present = "source_config_example"
    )]
    pub domain: Option<String>,

    // ============ Identity Source ============
    #[command(flatten)]
    pub source: SourceArgs,

    // ============ Output and Diagnostics ============
    #[command(flatten)]
    pub output: OutputArgs,
}

impl Args {
    /// Build the source configuration: defaults, then the config file, then flags
    pub fn source_config(&self) -> crate::error::Result<SourceConfig> {
        let mut config = match &self.source.config {
            Some(path) => SourceConfig::from_file(path)?,
            None => SourceConfig::default(),
        };

        self.source.apply_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }
}
