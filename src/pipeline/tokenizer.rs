//! Turns raw input lines into word batches

use super::types::WordBatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Free text, split into lowercase words
    Text,
    /// One JSON `WordBatch` per line
    Jsonl,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Text => "text",
            InputFormat::Jsonl => "jsonl",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(InputFormat::Text),
            "jsonl" => Some(InputFormat::Jsonl),
            _ => None,
        }
    }
}

/// Split on anything that is not alphanumeric and lowercase each token
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Whether a raw input line should be dropped before it becomes a batch
///
/// Only blank JSONL lines are skipped. A blank text line still becomes an
/// empty batch so it polls the flush timer like any other delivery.
pub fn is_skippable(line: &str, format: InputFormat) -> bool {
    format == InputFormat::Jsonl && line.trim().is_empty()
}

/// Parse one input line according to `format`
///
/// Text lines always succeed (possibly with an empty batch). JSONL lines fail
/// on invalid JSON; a valid object without `words` parses into a batch with no
/// word list.
pub fn parse_line(line: &str, format: InputFormat) -> Result<WordBatch, serde_json::Error> {
    match format {
        InputFormat::Text => Ok(WordBatch::new(tokenize(line))),
        InputFormat::Jsonl => serde_json::from_str(line),
    }
}
