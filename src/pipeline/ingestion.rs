//! Word ingestion - async channel processor for word batches
//!
//! Single consumer: every message is applied to the aggregator under one lock
//! acquisition, and any snapshot produced is written after the lock is released.

use super::types::WordMessage;
use crate::aggregator_core::{FrequencyAggregator, Snapshot, SnapshotWriter};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tokio::sync::mpsc;

/// Counters reported when the ingestion loop stops
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestionStats {
    pub batches: u64,
    pub words: u64,
    pub malformed_batches: u64,
    pub snapshots_written: u64,
    pub write_errors: u64,
}

/// Start word ingestion from the message channel
///
/// Main loop:
/// 1. Receives `WordMessage`s from the source
/// 2. Feeds batches to the aggregator, which flushes itself once the interval has elapsed
/// 3. Writes each produced snapshot to `writer` with the aggregator unlocked
///
/// `WordMessage::Flush` forces a flush. On `Shutdown` or when every sender is
/// dropped, a final forced flush runs (an empty period still produces a run).
///
/// Malformed batches are logged and counted; they do not stop the loop.
pub async fn start_word_ingestion(
    mut rx: mpsc::Receiver<WordMessage>,
    aggregator: Arc<Mutex<FrequencyAggregator>>,
    mut writer: SnapshotWriter,
) -> IngestionStats {
    {
        let agg = lock_aggregator(&aggregator);
        log::info!("🚀 Starting word ingestion");
        log::info!("   ├─ Flush interval: {}s", agg.flush_interval().as_secs());
        log::info!("   ├─ Min count threshold: {} (exclusive)", agg.min_count_threshold());
        log::info!("   └─ Snapshot backend: {}", writer.backend_type());
    }

    let mut stats = IngestionStats::default();
    let mut words_since_log = 0u64;
    let mut last_log_time = Instant::now();

    loop {
        let message = match rx.recv().await {
            Some(message) => message,
            None => {
                log::warn!("⚠️  Word channel closed, stopping ingestion");
                break;
            }
        };

        let snapshot = match message {
            WordMessage::Batch(batch) => {
                stats.batches += 1;
                let result = {
                    let mut agg = lock_aggregator(&aggregator);
                    agg.ingest_batch(&batch)
                };

                match result {
                    Ok(snapshot) => {
                        stats.words += batch.len() as u64;
                        words_since_log += batch.len() as u64;
                        snapshot
                    }
                    Err(e) => {
                        stats.malformed_batches += 1;
                        log::warn!("⚠️  Rejected batch #{}: {}", stats.batches, e);
                        None
                    }
                }
            }
            WordMessage::Flush => {
                let snapshot = {
                    let mut agg = lock_aggregator(&aggregator);
                    agg.flush()
                };
                Some(snapshot)
            }
            WordMessage::Shutdown => {
                log::info!("Word ingestion received shutdown signal");
                break;
            }
        };

        if let Some(snapshot) = snapshot {
            write_snapshot(&mut writer, &snapshot, &mut stats).await;
        }

        // Log throughput every 10 seconds
        if last_log_time.elapsed().as_secs() >= 10 {
            let words_per_sec = words_since_log as f64 / last_log_time.elapsed().as_secs_f64();
            log::debug!("📊 Ingestion rate: {:.1} words/sec (total: {})", words_per_sec, stats.words);
            last_log_time = Instant::now();
            words_since_log = 0;
        }
    }

    log::info!("🔄 Performing final flush...");
    let tail = {
        let mut agg = lock_aggregator(&aggregator);
        agg.flush()
    };
    write_snapshot(&mut writer, &tail, &mut stats).await;

    if let Err(e) = writer.flush().await {
        stats.write_errors += 1;
        log::error!("❌ Failed to flush snapshot writer: {}", e);
    }

    log::info!(
        "✅ Word ingestion stopped: {} batches, {} words, {} malformed, {} snapshots",
        stats.batches,
        stats.words,
        stats.malformed_batches,
        stats.snapshots_written
    );
    stats
}

async fn write_snapshot(writer: &mut SnapshotWriter, snapshot: &Snapshot, stats: &mut IngestionStats) {
    match writer.write_snapshot(snapshot).await {
        Ok(()) => stats.snapshots_written += 1,
        Err(e) => {
            stats.write_errors += 1;
            log::error!("❌ Failed to write snapshot for run#{}: {}", snapshot.run, e);
        }
    }
}

/// Lock the aggregator, recovering the state if a previous holder panicked
fn lock_aggregator(aggregator: &Mutex<FrequencyAggregator>) -> MutexGuard<'_, FrequencyAggregator> {
    aggregator.lock().unwrap_or_else(|poisoned| {
        log::error!("❌ Aggregator lock poisoned, continuing with last state");
        poisoned.into_inner()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendType;
    use crate::pipeline::types::WordBatch;
    use std::path::PathBuf;

    fn batch(words: &[&str]) -> WordMessage {
        WordMessage::Batch(WordBatch::new(words.iter().map(|w| w.to_string()).collect()))
    }

    fn log_writer() -> SnapshotWriter {
        SnapshotWriter::new(BackendType::Log, PathBuf::new()).unwrap()
    }

    #[tokio::test]
    async fn test_ingestion_counts_batches() {
        let (tx, rx) = mpsc::channel(16);
        let aggregator = Arc::new(Mutex::new(FrequencyAggregator::new(3600, 0).unwrap()));

        let handle = tokio::spawn(start_word_ingestion(rx, aggregator.clone(), log_writer()));

        tx.send(batch(&["a", "b", "a"])).await.unwrap();
        tx.send(batch(&[])).await.unwrap();
        tx.send(WordMessage::Flush).await.unwrap();
        tx.send(batch(&["c"])).await.unwrap();
        tx.send(WordMessage::Shutdown).await.unwrap();

        let stats = handle.await.unwrap();

        assert_eq!(stats.batches, 3);
        assert_eq!(stats.words, 4);
        // Forced flush + final flush of "c"
        assert_eq!(stats.snapshots_written, 2);
        assert_eq!(aggregator.lock().unwrap().run_counter(), 2);
        assert!(aggregator.lock().unwrap().word_counts().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_batch_does_not_stop_loop() {
        let (tx, rx) = mpsc::channel(16);
        let aggregator = Arc::new(Mutex::new(FrequencyAggregator::new(3600, 0).unwrap()));

        let handle = tokio::spawn(start_word_ingestion(rx, aggregator.clone(), log_writer()));

        tx.send(batch(&["keep"])).await.unwrap();
        tx.send(WordMessage::Batch(WordBatch { words: None })).await.unwrap();
        tx.send(batch(&["keep"])).await.unwrap();
        drop(tx);

        let stats = handle.await.unwrap();

        assert_eq!(stats.malformed_batches, 1);
        assert_eq!(stats.words, 2);
        assert_eq!(stats.snapshots_written, 1);
    }

    #[tokio::test]
    async fn test_shutdown_always_runs_final_flush() {
        let (tx, rx) = mpsc::channel(4);
        let aggregator = Arc::new(Mutex::new(FrequencyAggregator::new(3600, 0).unwrap()));

        let handle = tokio::spawn(start_word_ingestion(rx, aggregator.clone(), log_writer()));
        tx.send(WordMessage::Shutdown).await.unwrap();

        let stats = handle.await.unwrap();

        assert_eq!(stats.batches, 0);
        assert_eq!(stats.snapshots_written, 1);
        assert_eq!(aggregator.lock().unwrap().run_counter(), 1);
    }

    #[tokio::test]
    async fn test_final_flush_follows_forced_flush() {
        let (tx, rx) = mpsc::channel(4);
        let aggregator = Arc::new(Mutex::new(FrequencyAggregator::new(3600, 0).unwrap()));

        let handle = tokio::spawn(start_word_ingestion(rx, aggregator.clone(), log_writer()));
        tx.send(batch(&["a"])).await.unwrap();
        tx.send(WordMessage::Flush).await.unwrap();
        drop(tx);

        let stats = handle.await.unwrap();

        // Forced flush carries "a"; the closing flush reports an empty period
        assert_eq!(stats.snapshots_written, 2);
        assert_eq!(aggregator.lock().unwrap().run_counter(), 2);
        assert!(aggregator.lock().unwrap().word_counts().is_empty());
    }
}
