// Identity Pipeline Statistics
//
// Counts collected while a raw batch moves through the pipeline

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::Path;

/// Statistics for one collection run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Rows returned by the identity source
    pub raw_rows: u64,
    /// Empty identities dropped
    pub empty_dropped: u64,
    /// Duplicates filtered
    pub duplicates_filtered: u64,
    /// Unique identities (post-deduplication)
    pub unique: u64,
    /// Identities starting with `*.`
    pub wildcard: u64,
    /// All other identities
    pub plain: u64,
}

impl PipelineStats {
    /// Share of raw rows that were duplicates, in percent
    pub fn duplicate_rate(&self) -> f64 {
        if self.raw_rows == 0 {
            return 0.0;
        }
        (self.duplicates_filtered as f64 / self.raw_rows as f64) * 100.0
    }

    /// Save as pretty-printed JSON, replacing any existing file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SearchError::file_create(path, io::Error::from(e)))?;
        std::fs::write(path, json).map_err(|e| SearchError::file_create(path, e))
    }
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} raw, {} unique ({} wildcard, {} plain), {} duplicates ({:.1}%), {} empty",
            self.raw_rows,
            self.unique,
            self.wildcard,
            self.plain,
            self.duplicates_filtered,
            self.duplicate_rate(),
            self.empty_dropped
        )
    }
}
