//! Flush output handed to the snapshot sinks

use super::grouping::FrequencyGroup;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fully-formed result of one flush
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub timestamp: DateTime<Utc>,
    /// Run number, 1 for the first flush
    pub run: u64,
    /// Every word ingested during the period, including those at or below the threshold
    pub total_words: u64,
    /// Ranked groups above the threshold, highest count first
    pub groups: Vec<FrequencyGroup>,
}

impl Snapshot {
    pub fn summary_line(&self) -> String {
        format!(
            "At {}, total # of words received in run#{}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f UTC"),
            self.run,
            self.total_words
        )
    }

    /// Width of the widest emitted count, 0 when nothing passed the threshold
    pub fn count_width(&self) -> usize {
        self.groups
            .iter()
            .map(|group| group.count.to_string().len())
            .max()
            .unwrap_or(0)
    }

    /// Grouped listing, one `count ==> [words]` row per group
    pub fn table_lines(&self) -> Vec<String> {
        let width = self.count_width();
        self.groups
            .iter()
            .map(|group| {
                format!(
                    "{:>width$} ==> [{}]",
                    group.count,
                    group.words.join(", "),
                    width = width
                )
            })
            .collect()
    }

    pub fn table(&self) -> String {
        self.table_lines()
            .into_iter()
            .map(|line| format!("\t{}\n", line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn snapshot_with(groups: Vec<FrequencyGroup>) -> Snapshot {
        Snapshot {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap(),
            run: 4,
            total_words: 118,
            groups,
        }
    }

    fn group(count: u64, words: &[&str]) -> FrequencyGroup {
        FrequencyGroup {
            count,
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[test]
    fn test_summary_line_contents() {
        let snapshot = snapshot_with(Vec::new());

        assert_eq!(
            snapshot.summary_line(),
            "At 2024-03-01 12:30:00.000 UTC, total # of words received in run#4: 118"
        );
    }

    #[test]
    fn test_counts_right_aligned_to_widest() {
        let snapshot = snapshot_with(vec![
            group(105, &["the"]),
            group(12, &["cloud", "storm"]),
            group(1, &["zephyr"]),
        ]);

        assert_eq!(snapshot.count_width(), 3);
        assert_eq!(
            snapshot.table_lines(),
            vec![
                "105 ==> [the]".to_string(),
                " 12 ==> [cloud, storm]".to_string(),
                "  1 ==> [zephyr]".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_table() {
        let snapshot = snapshot_with(Vec::new());

        assert_eq!(snapshot.count_width(), 0);
        assert!(snapshot.table_lines().is_empty());
        assert_eq!(snapshot.table(), "");
    }
}
