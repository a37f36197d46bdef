//! JSONL writer for flush snapshots - one JSON object per run

use super::snapshot::Snapshot;
use super::writer_backend::{SnapshotWriterBackend, SnapshotWriterError};
use async_trait::async_trait;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

pub struct SnapshotJsonlWriter {
    file: BufWriter<File>,
    last_flush: Instant,
}

impl SnapshotJsonlWriter {
    /// Open `path` for appending, creating parent directories as needed
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        log::info!("📝 Writing snapshots to: {}", path.display());

        Ok(Self {
            file: BufWriter::new(file),
            last_flush: Instant::now(),
        })
    }

    pub fn write_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotWriterError> {
        let json = serde_json::to_string(snapshot)?;
        writeln!(self.file, "{}", json)?;

        // Flush every 5 seconds
        if self.last_flush.elapsed() > Duration::from_secs(5) {
            self.flush()?;
        }

        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()?;
        self.last_flush = Instant::now();
        Ok(())
    }
}

impl Drop for SnapshotJsonlWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[async_trait]
impl SnapshotWriterBackend for SnapshotJsonlWriter {
    async fn write_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotWriterError> {
        SnapshotJsonlWriter::write_snapshot(self, snapshot)
    }

    async fn flush(&mut self) -> Result<(), SnapshotWriterError> {
        SnapshotJsonlWriter::flush(self)?;
        Ok(())
    }

    fn backend_type(&self) -> &'static str {
        "jsonl"
    }
}
