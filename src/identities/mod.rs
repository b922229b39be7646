// Certificate Identity Collection Module
//
// Turns the raw common-name rows returned for a domain into the final
// wildcard-first, ordinally sorted identity list and writes it out.

pub mod classifier;
pub mod deduplicator;
pub mod orderer;
pub mod pipeline;
pub mod sink;
pub mod stats;

pub use classifier::{Partition, WILDCARD_PREFIX, classify, is_wildcard};
pub use deduplicator::{Deduplicator, UniqueSet, dedup};
pub use orderer::{SortedOutput, sort_ordinal};
pub use pipeline::IdentityPipeline;
pub use sink::IdentitySink;
pub use stats::PipelineStats;
