// Identity Deduplicator
//
// Reduces a raw batch to the set of distinct, non-empty identities

use std::collections::HashSet;

/// Distinct, non-empty identities from one raw batch
pub type UniqueSet = HashSet<String>;

/// Hash-set deduplicator with counters for the run summary
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: UniqueSet,
    total_seen: u64,
    empty_dropped: u64,
    duplicates_filtered: u64,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for an expected number of unique identities
    pub fn with_capacity(expected_items: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(expected_items),
            ..Self::default()
        }
    }

    /// Record one identity
    ///
    /// Returns true if this is a new (unique) identity. Empty strings are
    /// dropped and never count as unique.
    pub fn check_and_insert(&mut self, identity: String) -> bool {
        self.total_seen += 1;

        if identity.is_empty() {
            self.empty_dropped += 1;
            return false;
        }

        if self.seen.insert(identity) {
            true
        } else {
            self.duplicates_filtered += 1;
            false
        }
    }

    /// Feed a whole batch through the deduplicator
    pub fn extend<I>(&mut self, identities: I)
    where
        I: IntoIterator<Item = String>,
    {
        for identity in identities {
            self.check_and_insert(identity);
        }
    }

    /// Get total identities seen
    pub fn total_seen(&self) -> u64 {
        self.total_seen
    }

    /// Get empty entries dropped
    pub fn empty_dropped(&self) -> u64 {
        self.empty_dropped
    }

    /// Get total duplicates filtered
    pub fn duplicates_filtered(&self) -> u64 {
        self.duplicates_filtered
    }

    /// Get unique identities count
    pub fn unique_count(&self) -> u64 {
        self.seen.len() as u64
    }

    pub fn into_set(self) -> UniqueSet {
        self.seen
    }
}

/// Distinct non-empty strings of `raw`
pub fn dedup<I>(raw: I) -> UniqueSet
where
    I: IntoIterator<Item = String>,
{
    let mut deduplicator = Deduplicator::new();
    deduplicator.extend(raw);
    deduplicator.into_set()
}
