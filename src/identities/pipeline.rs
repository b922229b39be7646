// Identity Collection Pipeline
//
// raw batch -> unique set -> {wildcard, plain} -> sorted output

use super::classifier::classify;
use super::deduplicator::Deduplicator;
use super::orderer::SortedOutput;
use super::stats::PipelineStats;
use tracing::{debug, info};

/// Runs the pure stages of a collection over one raw batch
#[derive(Debug, Default)]
pub struct IdentityPipeline;

impl IdentityPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Deduplicate, classify and order `raw`
    pub fn run(&self, raw: Vec<String>) -> (SortedOutput, PipelineStats) {
        let mut deduplicator = Deduplicator::with_capacity(raw.len());
        deduplicator.extend(raw);

        let mut stats = PipelineStats {
            raw_rows: deduplicator.total_seen(),
            empty_dropped: deduplicator.empty_dropped(),
            duplicates_filtered: deduplicator.duplicates_filtered(),
            unique: deduplicator.unique_count(),
            ..Default::default()
        };
        debug!(
            "Deduplicated {} rows into {} identities",
            stats.raw_rows, stats.unique
        );

        let partition = classify(deduplicator.into_set());
        stats.wildcard = partition.wildcard.len() as u64;
        stats.plain = partition.plain.len() as u64;

        let output = SortedOutput::from_partition(partition);
        info!("Collected identities: {}", stats);

        (output, stats)
    }
}
