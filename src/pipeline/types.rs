//! Messages flowing from the word source into the ingestion loop

use serde::{Deserialize, Serialize};

/// One delivery from the upstream framework
///
/// `words` is optional on the wire; a batch without it is rejected by the
/// aggregator as malformed rather than treated as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBatch {
    pub words: Option<Vec<String>>,
}

impl WordBatch {
    pub fn new(words: Vec<String>) -> Self {
        Self { words: Some(words) }
    }

    pub fn len(&self) -> usize {
        self.words.as_ref().map_or(0, Vec::len)
    }
}

/// Message sent through the channel to the ingestion loop
#[derive(Debug, Clone)]
pub enum WordMessage {
    Batch(WordBatch),
    /// Flush now regardless of the interval
    Flush,
    Shutdown,
}
