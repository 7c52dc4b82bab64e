//! Model error types

use thiserror::Error;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Model errors
#[derive(Debug, Error)]
pub enum ModelError {
    /// Catalog document is not a valid category/metric tree
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Leaf metric name does not encode `<namespace>.<metric>.<entity>`
    #[error("Invalid metric name '{0}': expected <namespace>.<metric>.<entity>")]
    InvalidMetricName(String),

    /// Period token is not a 6-digit year-month
    #[error("Invalid period '{0}': expected a 6-digit YYYYMM token")]
    InvalidPeriod(String),

    /// CSV read error
    #[error("CSV error: {0}")]
    Csv(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_yaml::Error> for ModelError {
    fn from(err: serde_yaml::Error) -> Self {
        ModelError::InvalidCatalog(err.to_string())
    }
}

impl From<csv::Error> for ModelError {
    fn from(err: csv::Error) -> Self {
        ModelError::Csv(err.to_string())
    }
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        ModelError::Io(err.to_string())
    }
}
