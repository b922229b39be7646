// Wildcard / plain partitioning of unique identities

use super::deduplicator::UniqueSet;

/// Prefix marking a wildcard certificate identity
pub const WILDCARD_PREFIX: &str = "*.";

/// True iff `identity` starts with exactly `*.`
pub fn is_wildcard(identity: &str) -> bool {
    identity.as_bytes().starts_with(WILDCARD_PREFIX.as_bytes())
}

/// Disjoint split of a [`UniqueSet`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub wildcard: Vec<String>,
    pub plain: Vec<String>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.wildcard.len() + self.plain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wildcard.is_empty() && self.plain.is_empty()
    }
}

pub fn classify(unique: UniqueSet) -> Partition {
    let (wildcard, plain) = unique.into_iter().partition(|identity| is_wildcard(identity));
    Partition { wildcard, plain }
}
