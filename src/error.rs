//! Error types for the job alert service.
//!
//! This module provides structured error handling with:
//! - `AppError`: Domain-specific errors for scraping, storage and delivery
//! - `Result<T>`: Type alias for Results using AppError

use thiserror::Error;

// ============================================================================
// DOMAIN ERROR TYPE
// ============================================================================

/// Domain-specific errors for application operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or malformed URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network request failed
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Dedup store operation failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Missing or malformed process configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// External service error (Telegram)
    #[error("Service error ({service}): {message}")]
    ServiceError { service: &'static str, message: String },

    /// Generic error with context
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Create a service error
    pub fn service(service: &'static str, msg: impl Into<String>) -> Self {
        Self::ServiceError {
            service,
            message: msg.into(),
        }
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::DatabaseError(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        Self::DatabaseError(error.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(error: sqlx::migrate::MigrateError) -> Self {
        Self::DatabaseError(error.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError(error.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidUrl(error.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
