//! Writer backend trait for flush snapshots
//!
//! Defines the interface for handing finished snapshots to an output sink.

use super::snapshot::Snapshot;
use async_trait::async_trait;

#[derive(Debug)]
pub enum SnapshotWriterError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl From<std::io::Error> for SnapshotWriterError {
    fn from(err: std::io::Error) -> Self {
        SnapshotWriterError::Io(err)
    }
}

impl From<serde_json::Error> for SnapshotWriterError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotWriterError::Serialization(err)
    }
}

impl std::fmt::Display for SnapshotWriterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotWriterError::Io(e) => write!(f, "IO error: {}", e),
            SnapshotWriterError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for SnapshotWriterError {}

/// Backend trait for writing flush snapshots
///
/// Backends only ever see complete snapshots; the aggregator lock is released
/// before they are called.
#[async_trait]
pub trait SnapshotWriterBackend: Send {
    /// Write one snapshot (summary and grouped listing)
    async fn write_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotWriterError>;

    /// Flush pending writes to storage
    async fn flush(&mut self) -> Result<(), SnapshotWriterError>;

    /// Get backend type for logging
    fn backend_type(&self) -> &'static str;
}
