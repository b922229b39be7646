// Command trait - Defines the interface for all command implementations
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::Result;
use async_trait::async_trait;

/// Command trait - Defines the interface for all command implementations
///
/// Each operational mode of crtsearch is a command object. A command reports
/// failure by returning an error; it never exits the process itself, so the
/// top-level handler is the only place a fatal error is logged and turned into
/// an exit status.
#[async_trait]
pub trait Command: Send + Sync {
    /// Execute the command asynchronously
    ///
    /// # Returns
    /// - `Ok(())` if the command executed successfully
    /// - `Err(anyhow::Error)` wrapping a `SearchError` if the command failed
    async fn execute(&self) -> Result<()>;

    /// Get a human-readable name for this command (for logging/debugging)
    fn name(&self) -> &'static str;
}
