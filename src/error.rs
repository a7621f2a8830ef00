//! Error types for the catalog core

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Provisioning failed: {0}")]
    Provision(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type alias for catalog operations
pub type AppResult<T> = Result<T, AppError>;
