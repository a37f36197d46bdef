//! Count -> words grouping built at flush time

use super::counter::WordCounts;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the ranked listing: every word seen exactly `count` times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyGroup {
    pub count: u64,
    pub words: Vec<String>,
}

/// Words grouped by their count
///
/// Built unordered, ranked on read: counts descending, words ascending.
#[derive(Debug, Default)]
pub struct FrequencyGroups {
    groups: HashMap<u64, Vec<String>>,
}

impl FrequencyGroups {
    pub fn from_counts(counts: &WordCounts) -> Self {
        let mut groups: HashMap<u64, Vec<String>> = HashMap::new();
        for (word, count) in counts.iter() {
            groups.entry(count).or_default().push(word.to_string());
        }
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Consume the grouping into rows with `count > min_count_threshold`
    ///
    /// The threshold is an exclusive lower bound: a group whose count equals
    /// the threshold is dropped.
    pub fn ranked(self, min_count_threshold: u64) -> Vec<FrequencyGroup> {
        let mut ranked: Vec<FrequencyGroup> = self
            .groups
            .into_iter()
            .filter(|(count, _)| *count > min_count_threshold)
            .map(|(count, mut words)| {
                words.sort();
                FrequencyGroup { count, words }
            })
            .collect();

        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }
}
