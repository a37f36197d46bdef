//! Plumbing between an upstream word source and the aggregator
//!
//! ```text
//! stdin / upstream framework
//!     ↓
//! tokenizer::parse_line → WordBatch
//!     ↓  (mpsc channel of WordMessage)
//! ingestion::start_word_ingestion
//!     ↓
//! FrequencyAggregator → Snapshot → SnapshotWriter
//! ```

pub mod ingestion;
pub mod tokenizer;
pub mod types;

pub use ingestion::{start_word_ingestion, IngestionStats};
pub use tokenizer::{is_skippable, parse_line, tokenize, InputFormat};
pub use types::{WordBatch, WordMessage};
