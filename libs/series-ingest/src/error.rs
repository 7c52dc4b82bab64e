//! Ingestion error types

use thiserror::Error;

/// Result type for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Ingestion errors
#[derive(Debug, Error)]
pub enum IngestError {
    /// Store-level failure; aborts and rolls back the enclosing run
    #[error("Store error: {0}")]
    Store(#[from] series_store::StoreError),

    /// Bad catalog or period input; aborts and rolls back the enclosing run
    #[error("Input error: {0}")]
    Model(#[from] series_model::ModelError),

    /// Database error at the transaction boundary
    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for IngestError {
    fn from(err: sqlx::Error) -> Self {
        IngestError::Database(err.to_string())
    }
}
