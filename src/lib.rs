pub mod aggregator_core;
pub mod config;
pub mod pipeline;

pub use aggregator_core::{AggregatorError, FrequencyAggregator, Snapshot, SnapshotWriter};
pub use config::{BackendType, ConfigError, WordFlowConfig};
