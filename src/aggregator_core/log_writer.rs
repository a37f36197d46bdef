//! Snapshot output through the `log` facade

use super::snapshot::Snapshot;
use super::writer_backend::{SnapshotWriterBackend, SnapshotWriterError};
use async_trait::async_trait;

/// Emits the summary line and the grouped table at `info` level
///
/// The table is logged even when empty so every run leaves two records.
#[derive(Debug, Default)]
pub struct LogSnapshotWriter {
    snapshots_written: u64,
}

impl LogSnapshotWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log the two records for `snapshot` and return them as emitted
    pub fn write_snapshot(&mut self, snapshot: &Snapshot) -> [String; 2] {
        let summary = snapshot.summary_line();
        let table = format!("\n{}", snapshot.table());
        log::info!("{}", summary);
        log::info!("{}", table);
        self.snapshots_written += 1;
        [summary, table]
    }

    pub fn snapshots_written(&self) -> u64 {
        self.snapshots_written
    }
}

#[async_trait]
impl SnapshotWriterBackend for LogSnapshotWriter {
    async fn write_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotWriterError> {
        LogSnapshotWriter::write_snapshot(self, snapshot);
        Ok(())
    }

    async fn flush(&mut self) -> Result<(), SnapshotWriterError> {
        Ok(())
    }

    fn backend_type(&self) -> &'static str {
        "log"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator_core::grouping::FrequencyGroup;
    use chrono::TimeZone;

    fn snapshot(run: u64, total_words: u64, groups: Vec<FrequencyGroup>) -> Snapshot {
        Snapshot {
            timestamp: chrono::Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap(),
            run,
            total_words,
            groups,
        }
    }

    #[test]
    fn test_emits_summary_and_table() {
        let mut writer = LogSnapshotWriter::new();
        let snapshot = snapshot(
            2,
            14,
            vec![
                FrequencyGroup { count: 10, words: vec!["storm".into()] },
                FrequencyGroup { count: 2, words: vec!["bolt".into(), "spout".into()] },
            ],
        );

        let [summary, table] = writer.write_snapshot(&snapshot);

        assert_eq!(
            summary,
            "At 2024-05-06 07:08:09.000 UTC, total # of words received in run#2: 14"
        );
        assert_eq!(table, "\n\t10 ==> [storm]\n\t 2 ==> [bolt, spout]\n");
        assert_eq!(writer.snapshots_written(), 1);
    }

    #[test]
    fn test_empty_listing_still_emitted() {
        let mut writer = LogSnapshotWriter::new();

        let [summary, table] = writer.write_snapshot(&snapshot(1, 1, Vec::new()));

        assert!(summary.ends_with("run#1: 1"));
        assert_eq!(table, "\n");
    }

    #[tokio::test]
    async fn test_backend_counts_written_snapshots() {
        let mut writer = LogSnapshotWriter::new();
        let snapshot = snapshot(1, 0, Vec::new());

        SnapshotWriterBackend::write_snapshot(&mut writer, &snapshot).await.unwrap();
        SnapshotWriterBackend::write_snapshot(&mut writer, &snapshot).await.unwrap();
        writer.flush().await.unwrap();

        assert_eq!(writer.snapshots_written(), 2);
        assert_eq!(writer.backend_type(), "log");
    }
}
