//! Error types for the database client

use promptdeck_common::{HttpStatusCode, PromptdeckError};
use thiserror::Error;

/// Errors that can occur when working with the database client
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),
}

impl HttpStatusCode for DbError {
    fn status_code(&self) -> u16 {
        500
    }
}

impl From<DbError> for PromptdeckError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConfigError(msg) | DbError::UrlError(msg) => PromptdeckError::ConfigError(msg),
            other => PromptdeckError::DatabaseError(other.to_string()),
        }
    }
}
