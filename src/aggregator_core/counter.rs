//! Running word tally for the current accumulation period

use std::collections::HashMap;

/// Word -> occurrence count since the last flush
///
/// Keeps a running total alongside the map so the summary line never has to
/// re-sum the counts.
#[derive(Debug, Clone, Default)]
pub struct WordCounts {
    counts: HashMap<String, u64>,
    total: u64,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for a single word, inserting it with 1 if absent
    pub fn add(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count += 1;
        } else {
            self.counts.insert(word.to_string(), 1);
        }
        self.total += 1;
    }

    pub fn add_all<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add(word.as_ref());
        }
    }

    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Total words ingested since the last clear (sum of all counts)
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_inserts_then_increments() {
        let mut counts = WordCounts::new();

        counts.add("storm");
        counts.add("storm");
        counts.add("bolt");

        assert_eq!(counts.count("storm"), 2);
        assert_eq!(counts.count("bolt"), 1);
        assert_eq!(counts.count("spout"), 0);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_total_matches_sum_of_counts() {
        let mut counts = WordCounts::new();
        counts.add_all(["a", "b", "a", "c", "a", "b"]);
        counts.add_all(Vec::<String>::new());
        counts.add_all(vec!["c".to_string()]);

        let summed: u64 = counts.iter().map(|(_, c)| c).sum();
        assert_eq!(counts.total(), 7);
        assert_eq!(summed, counts.total());
    }

    #[test]
    fn test_clear_resets_total() {
        let mut counts = WordCounts::new();
        counts.add_all(["x", "y"]);

        counts.clear();

        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.count("x"), 0);
    }
}
