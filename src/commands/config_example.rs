// ConfigExampleCommand - Writes an example source configuration
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use crate::source::SourceConfig;
use crate::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// ConfigExampleCommand writes a commented TOML source configuration
pub struct ConfigExampleCommand {
    path: PathBuf,
}

impl ConfigExampleCommand {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl Command for ConfigExampleCommand {
    async fn execute(&self) -> Result<()> {
        SourceConfig::create_example_config(&self.path)?;
        println!(
            "✓ Example source configuration saved to: {}",
            self.path.display()
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ConfigExampleCommand"
    }
}
