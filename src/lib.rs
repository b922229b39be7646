// crtsearch - certificate common-name identities from crt.sh
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! crtsearch collects every certificate common name that mentions a domain
//! from the crt.sh certificate-transparency database, deduplicates them and
//! writes them out wildcard-first, each half sorted byte-wise.

pub mod cli;
pub mod commands;
pub mod error;
pub mod identities;
pub mod logging;
pub mod security;
pub mod source;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::error::{ErrorKind, SearchError};
pub use crate::identities::{IdentityPipeline, IdentitySink, SortedOutput};
pub use crate::source::IdentitySource;

/// Result type for crtsearch commands
pub type Result<T> = anyhow::Result<T>;

/// Error type for crtsearch commands
pub use anyhow::Error;
