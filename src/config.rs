use crate::aggregator_core::AggregatorError;
use crate::pipeline::tokenizer::InputFormat;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    Log,
    Jsonl,
}

impl BackendType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "log" => Some(BackendType::Log),
            "jsonl" => Some(BackendType::Jsonl),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<AggregatorError> for ConfigError {
    fn from(err: AggregatorError) -> Self {
        ConfigError::InvalidValue(err.to_string())
    }
}

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct WordFlowConfig {
    /// Seconds between flushes (checked on each ingest)
    pub flush_interval_secs: i64,
    /// Counts must be strictly greater than this to be listed
    pub min_count_threshold: i64,
    pub backend: BackendType,
    pub output_path: PathBuf,
    pub input_format: InputFormat,
    /// Bounded channel size between the source and the ingestion loop
    pub channel_buffer: usize,
}

impl WordFlowConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `FLUSH_INTERVAL_SECS` (default: 10)
    /// - `MIN_COUNT_THRESHOLD` (default: 0)
    /// - `SINK_BACKEND` - `log` or `jsonl` (default: log)
    /// - `SNAPSHOT_OUTPUT_PATH` (default: streams/snapshots.jsonl)
    /// - `INPUT_FORMAT` - `text` or `jsonl` (default: text)
    /// - `CHANNEL_BUFFER` (default: 10000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let flush_interval_secs = parse_or(&lookup, "FLUSH_INTERVAL_SECS", 10i64)?;
        if flush_interval_secs < 0 {
            return Err(ConfigError::InvalidValue(format!(
                "FLUSH_INTERVAL_SECS must be >= 0, got {}",
                flush_interval_secs
            )));
        }

        let min_count_threshold = parse_or(&lookup, "MIN_COUNT_THRESHOLD", 0i64)?;
        if min_count_threshold < 0 {
            return Err(ConfigError::InvalidValue(format!(
                "MIN_COUNT_THRESHOLD must be >= 0, got {}",
                min_count_threshold
            )));
        }

        let backend = match lookup("SINK_BACKEND") {
            Some(raw) => BackendType::from_str(&raw).ok_or_else(|| {
                ConfigError::InvalidValue(format!("SINK_BACKEND must be log or jsonl, got '{}'", raw))
            })?,
            None => BackendType::Log,
        };

        let input_format = match lookup("INPUT_FORMAT") {
            Some(raw) => InputFormat::from_str(&raw).ok_or_else(|| {
                ConfigError::InvalidValue(format!("INPUT_FORMAT must be text or jsonl, got '{}'", raw))
            })?,
            None => InputFormat::Text,
        };

        let output_path: PathBuf = lookup("SNAPSHOT_OUTPUT_PATH")
            .unwrap_or_else(|| "streams/snapshots.jsonl".to_string())
            .into();

        let channel_buffer = parse_or(&lookup, "CHANNEL_BUFFER", 10_000usize)?;
        if channel_buffer == 0 {
            return Err(ConfigError::InvalidValue("CHANNEL_BUFFER must be > 0".to_string()));
        }

        Ok(Self {
            flush_interval_secs,
            min_count_threshold,
            backend,
            output_path,
            input_format,
            channel_buffer,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            ConfigError::InvalidValue(format!("{} is not a valid number: '{}'", key, raw))
        }),
        None => Ok(default),
    }
}
