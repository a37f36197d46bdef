//! Aggregator Core - Word Frequency Snapshots
//!
//! Counts words per accumulation period and, once the flush interval has
//! elapsed, turns the counts into a ranked snapshot for the configured writer.
//!
//! # Architecture
//!
//! ```text
//! WordBatch → FrequencyAggregator::ingest (WordCounts)
//!     ↓  interval elapsed (polled on ingest)
//! FrequencyGroups (count → words, ranked, threshold-filtered)
//!     ↓
//! Snapshot (timestamp, run#, total words, groups)
//!     ↓
//! SnapshotWriter → log or JSONL backend
//! ```

pub mod aggregator;
pub mod counter;
pub mod error;
pub mod grouping;
pub mod jsonl_writer;
pub mod log_writer;
pub mod snapshot;
pub mod stopwatch;
pub mod writer;
pub mod writer_backend;

pub use aggregator::FrequencyAggregator;
pub use counter::WordCounts;
pub use error::AggregatorError;
pub use grouping::{FrequencyGroup, FrequencyGroups};
pub use jsonl_writer::SnapshotJsonlWriter;
pub use log_writer::LogSnapshotWriter;
pub use snapshot::Snapshot;
pub use stopwatch::Stopwatch;
pub use writer::SnapshotWriter;
pub use writer_backend::{SnapshotWriterBackend, SnapshotWriterError};
