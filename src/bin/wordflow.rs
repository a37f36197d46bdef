//! WordFlow Binary - Periodic Word Frequency Snapshots
//!
//! Reads lines from stdin, turns each into a word batch, and logs (or writes)
//! a ranked frequency snapshot every flush interval.
//!
//! ## Usage
//!
//! ```bash
//! cat corpus.txt | cargo run --release --bin wordflow
//! cargo run --release --bin wordflow -- --backend jsonl < batches.jsonl
//! ```
//!
//! ## Environment Variables
//!
//! - FLUSH_INTERVAL_SECS - Seconds between snapshots, checked per batch (default: 10)
//! - MIN_COUNT_THRESHOLD - Only counts above this are listed (default: 0)
//! - SINK_BACKEND - log or jsonl (default: log)
//! - SNAPSHOT_OUTPUT_PATH - JSONL output file (default: streams/snapshots.jsonl)
//! - INPUT_FORMAT - text or jsonl (default: text)
//! - CHANNEL_BUFFER - Batches buffered between reader and aggregator (default: 10000)
//! - RUST_LOG - Logging level (optional, default: info)

use std::env;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use wordflow::aggregator_core::{FrequencyAggregator, SnapshotWriter};
use wordflow::config::{BackendType, WordFlowConfig};
use wordflow::pipeline::{is_skippable, parse_line, start_word_ingestion, WordMessage};

fn parse_backend_from_args() -> Option<BackendType> {
    let args: Vec<String> = env::args().collect();
    let idx = args.iter().position(|x| x == "--backend")?;
    match args.get(idx + 1).and_then(|s| BackendType::from_str(s)) {
        Some(backend) => Some(backend),
        None => {
            log::warn!("Ignoring unknown --backend value, expected log or jsonl");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let mut config = WordFlowConfig::from_env()?;
    if let Some(backend) = parse_backend_from_args() {
        config.backend = backend;
    }

    log::info!("🚀 Starting WordFlow");
    log::info!("   Flush interval: {}s", config.flush_interval_secs);
    log::info!("   Min count threshold: {}", config.min_count_threshold);
    log::info!("   Input format: {}", config.input_format.as_str());
    log::info!("   Channel buffer: {}", config.channel_buffer);

    let aggregator = FrequencyAggregator::new(config.flush_interval_secs, config.min_count_threshold)?;
    let aggregator = Arc::new(Mutex::new(aggregator));
    let writer = SnapshotWriter::new(config.backend, config.output_path.clone())?;

    log::info!("📊 Backend: {}", writer.backend_type());

    let (tx, rx) = mpsc::channel::<WordMessage>(config.channel_buffer);
    let ingestion = tokio::spawn(start_word_ingestion(rx, aggregator, writer));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut skipped = 0u64;

    while let Some(line) = lines.next_line().await? {
        if is_skippable(&line, config.input_format) {
            continue;
        }

        match parse_line(&line, config.input_format) {
            Ok(batch) => {
                if tx.send(WordMessage::Batch(batch)).await.is_err() {
                    log::error!("❌ Ingestion task stopped, no longer reading input");
                    break;
                }
            }
            Err(e) => {
                skipped += 1;
                log::warn!("Failed to parse input line: {} ({})", line, e);
            }
        }
    }

    if skipped > 0 {
        log::warn!("⚠️  Skipped {} unparseable lines", skipped);
    }

    let _ = tx.send(WordMessage::Shutdown).await;
    let stats = ingestion.await?;

    log::info!(
        "✅ Done: {} runs written, {} words from {} batches",
        stats.snapshots_written,
        stats.words,
        stats.batches
    );

    Ok(())
}
