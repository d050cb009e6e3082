//! Configuration error types

use thiserror::Error;

use crate::domain::analysis::ThresholdError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),

    #[error("Invalid default thresholds: {0}")]
    InvalidThresholds(#[from] ThresholdError),
}
