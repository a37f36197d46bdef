#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregatorError {
    /// Negative flush interval or threshold supplied at construction
    InvalidConfiguration(String),
    /// Batch without a word list
    MalformedInput(String),
}

impl std::fmt::Display for AggregatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregatorError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            AggregatorError::MalformedInput(msg) => write!(f, "Malformed input: {}", msg),
        }
    }
}

impl std::error::Error for AggregatorError {}
