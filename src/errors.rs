use crate::types::MAX_DESIRED_BUCKETS;
use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Bucketing contract violations
    #[error("Bucketing error: {0}")]
    Bucketing(#[from] BucketError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Caller contract violations detected by the bucketing engine
///
/// Missing or equal range bounds are not errors; they yield an empty bucket
/// sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BucketError {
    /// Bucket count of zero or above [`MAX_DESIRED_BUCKETS`]
    #[error(
        "Invalid bucket count: {desired} (must be between 1 and {})",
        MAX_DESIRED_BUCKETS
    )]
    InvalidBucketCount { desired: usize },

    /// Range lower bound lies after its upper bound
    #[error("Inverted time range: min {min_time} > max {max_time}")]
    InvertedRange { min_time: i64, max_time: i64 },

    /// Event timestamp could not be parsed
    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp { value: String },
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for bucketing operations
pub type BucketResult<T> = Result<T, BucketError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
