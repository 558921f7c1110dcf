//! Application error types
//!
//! Unified error handling at the application edge.

use triage_core::DomainError;
use triage_sentiment::LexiconError;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Initialization errors (lexicon load is fatal, no retry)
    #[error("Initialization error: {0}")]
    Initialization(#[from] LexiconError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // I/O errors (seed file, output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Get error code for presentation layers
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Initialization(_) => "INITIALIZATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this error came from bad caller input
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Validation(_) | Self::NotFound(_) | Self::Conflict(_) => true,
            Self::Domain(e) => e.is_not_found() || e.is_validation() || e.is_conflict(),
            _ => false,
        }
    }

    /// Check if this is a fatal initialization failure
    #[must_use]
    pub fn is_initialization(&self) -> bool {
        matches!(self, Self::Initialization(_) | Self::Config(_))
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
