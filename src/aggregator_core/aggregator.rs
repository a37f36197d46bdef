//! Word frequency aggregator with poll-driven periodic flush

use super::counter::WordCounts;
use super::error::AggregatorError;
use super::grouping::FrequencyGroups;
use super::snapshot::Snapshot;
use super::stopwatch::Stopwatch;
use crate::pipeline::types::WordBatch;
use std::time::{Duration, Instant};

/// Running word tally flushed into a ranked [`Snapshot`] on an interval
///
/// There is no background timer: elapsed time is checked on every ingest, so a
/// flush fires on the first batch that arrives after the interval has passed.
/// With sparse input, flushes lag the configured interval.
///
/// Not synchronized. Callers sharing an aggregator across tasks wrap it in a
/// mutex so ingest and flush never interleave.
#[derive(Debug)]
pub struct FrequencyAggregator {
    word_counts: WordCounts,
    stopwatch: Stopwatch,
    run_counter: u64,
    flush_interval: Duration,
    /// Exclusive lower bound for a count to appear in the listing
    min_count_threshold: u64,
}

impl FrequencyAggregator {
    /// Create an aggregator on the system clock
    ///
    /// # Errors
    /// `InvalidConfiguration` when either value is negative.
    pub fn new(flush_interval_secs: i64, min_count_threshold: i64) -> Result<Self, AggregatorError> {
        Self::new_with_clock(
            flush_interval_secs,
            min_count_threshold,
            Box::new(Instant::now),
        )
    }

    /// Create an aggregator with a custom monotonic clock (used in tests)
    pub fn new_with_clock(
        flush_interval_secs: i64,
        min_count_threshold: i64,
        now_fn: Box<dyn Fn() -> Instant + Send + Sync>,
    ) -> Result<Self, AggregatorError> {
        let flush_interval_secs = u64::try_from(flush_interval_secs).map_err(|_| {
            AggregatorError::InvalidConfiguration(format!(
                "flush interval must be non-negative, got {}s",
                flush_interval_secs
            ))
        })?;
        let min_count_threshold = u64::try_from(min_count_threshold).map_err(|_| {
            AggregatorError::InvalidConfiguration(format!(
                "minimum count threshold must be non-negative, got {}",
                min_count_threshold
            ))
        })?;

        Ok(Self {
            word_counts: WordCounts::new(),
            stopwatch: Stopwatch::start_with_clock(now_fn),
            run_counter: 0,
            flush_interval: Duration::from_secs(flush_interval_secs),
            min_count_threshold,
        })
    }

    /// Count a batch of words, then flush if the interval has elapsed
    ///
    /// The returned snapshot includes this batch's words.
    pub fn ingest<S: AsRef<str>>(&mut self, words: &[S]) -> Option<Snapshot> {
        self.word_counts.add_all(words);

        if self.is_flush_due() {
            let snapshot = self.flush();
            Some(snapshot)
        } else {
            None
        }
    }

    /// Ingest a batch as delivered by the hosting framework
    ///
    /// # Errors
    /// `MalformedInput` when the batch carries no word list. Counts from
    /// earlier batches are left untouched.
    pub fn ingest_batch(&mut self, batch: &WordBatch) -> Result<Option<Snapshot>, AggregatorError> {
        let words = batch.words.as_deref().ok_or_else(|| {
            AggregatorError::MalformedInput("word batch has no word list".to_string())
        })?;
        Ok(self.ingest(words))
    }

    /// Whether the elapsed time (in whole seconds) has reached the flush interval
    pub fn is_flush_due(&self) -> bool {
        self.stopwatch.elapsed().as_secs() >= self.flush_interval.as_secs()
    }

    /// Rank and filter the current counts, bump the run counter, and reset
    ///
    /// Restarts the interval timer. Safe to call with nothing ingested.
    pub fn flush(&mut self) -> Snapshot {
        let groups = FrequencyGroups::from_counts(&self.word_counts).ranked(self.min_count_threshold);
        self.run_counter += 1;

        let snapshot = Snapshot {
            timestamp: chrono::Utc::now(),
            run: self.run_counter,
            total_words: self.word_counts.total(),
            groups,
        };

        log::debug!(
            "run#{}: {} distinct words, {} groups above threshold {}",
            snapshot.run,
            self.word_counts.len(),
            snapshot.groups.len(),
            self.min_count_threshold
        );

        self.word_counts.clear();
        self.stopwatch.restart();
        snapshot
    }

    pub fn word_counts(&self) -> &WordCounts {
        &self.word_counts
    }

    pub fn run_counter(&self) -> u64 {
        self.run_counter
    }

    pub fn flush_interval(&self) -> Duration {
        self.flush_interval
    }

    pub fn min_count_threshold(&self) -> u64 {
        self.min_count_threshold
    }
}
