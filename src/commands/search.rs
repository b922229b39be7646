// SearchCommand - Certificate identity collection for one domain
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use crate::error::SearchError;
use crate::identities::{IdentityPipeline, IdentitySink};
use crate::security::validate_domain;
use crate::source::{CrtShSource, IdentitySource};
use crate::{Args, Result};
use async_trait::async_trait;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// SearchCommand runs the identity collection pipeline
///
/// This command is responsible for:
/// - Validating the domain before anything touches the network or disk
/// - Checking the output directory and the identity source are usable
/// - Fetching, deduplicating, classifying and ordering identities
/// - Writing the result to `<domain>_identities.txt` and the console
pub struct SearchCommand {
    args: Args,
    source: Option<Box<dyn IdentitySource>>,
}

impl SearchCommand {
    /// Create a new SearchCommand that queries crt.sh
    pub fn new(args: Args) -> Self {
        Self { args, source: None }
    }

    /// Create a SearchCommand with a caller-provided identity source
    pub fn with_source(args: Args, source: Box<dyn IdentitySource>) -> Self {
        Self {
            args,
            source: Some(source),
        }
    }

    /// Run the whole pipeline, writing identities and the confirmation line
    /// to `console`. Returns the output file path.
    pub async fn run<W: Write + Send>(&self, console: &mut W) -> Result<PathBuf> {
        let raw_domain = self.args.domain.as_deref().ok_or_else(|| SearchError::Config {
            message: "No domain given".to_string(),
        })?;
        let domain = validate_domain(raw_domain).map_err(SearchError::from)?;
        debug!("Domain {} passed validation", domain);

        let sink = IdentitySink::new(&self.args.output.output_dir);
        sink.preflight()?;

        let crtsh;
        let source: &dyn IdentitySource = match &self.source {
            Some(source) => source.as_ref(),
            None => {
                crtsh = CrtShSource::new(self.args.source_config()?);
                &crtsh
            }
        };

        if !self.args.source.no_preflight {
            source.check_connectivity().await?;
        }

        info!("Fetching identities for {} from {}", domain, source.describe());
        let raw = source.fetch_identities(&domain).await?;

        let (output, stats) = IdentityPipeline::new().run(raw);

        let path = sink.write(&domain, &output, console)?;
        writeln!(console, "Output saved to {}", path.display())
            .and_then(|_| console.flush())
            .map_err(SearchError::from)?;

        if let Some(stats_path) = &self.args.output.stats_json {
            stats.write_json(stats_path)?;
            info!("Statistics saved to {}", stats_path.display());
        }

        Ok(path)
    }
}

#[async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let mut stdout = std::io::stdout();
        self.run(&mut stdout).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "SearchCommand"
    }
}
