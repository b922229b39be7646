// Ordinal ordering of identity lists

use super::classifier::Partition;

/// Sort ascending by raw bytes (case-sensitive, no locale)
pub fn sort_ordinal(mut identities: Vec<String>) -> Vec<String> {
    // str's Ord is byte-wise lexicographic
    identities.sort_unstable();
    identities
}

/// Wildcard identities then plain identities, each sorted on its own
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedOutput {
    wildcard: Vec<String>,
    plain: Vec<String>,
}

impl SortedOutput {
    /// Sort both halves of `partition` independently
    pub fn from_partition(partition: Partition) -> Self {
        Self {
            wildcard: sort_ordinal(partition.wildcard),
            plain: sort_ordinal(partition.plain),
        }
    }

    /// Emission order: every wildcard identity before every plain one
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.wildcard
            .iter()
            .chain(self.plain.iter())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.wildcard.len() + self.plain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Newline-terminated text, one identity per line
    pub fn render(&self) -> String {
        let capacity: usize = self.lines().map(|line| line.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for line in self.lines() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
