use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("Order-count payload is neither a sample array nor a keyed object")]
    UnrecognizedShape,

    #[error("Sample {index} is missing its '{field}' field")]
    MissingField { index: usize, field: &'static str },

    #[error("Sample {index} has a timestamp that is not a string or number: {value}")]
    InvalidTimestamp { index: usize, value: Value },

    #[error("Sample {index} has a non-numeric count: {value}")]
    NonNumericCount { index: usize, value: Value },

    #[error("Key '{key}' has a non-numeric count: {value}")]
    NonNumericKeyedCount { key: String, value: Value },
}
