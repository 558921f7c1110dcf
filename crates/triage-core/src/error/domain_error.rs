//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::MessageId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid message id: {0}")]
    InvalidMessageId(String),

    #[error("Status too long: max {max} characters")]
    StatusTooLong { max: usize },

    #[error("Message text must not be empty")]
    EmptyText,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Message already exists: {0}")]
    DuplicateMessage(MessageId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get a stable error code string for presentation layers
    pub fn code(&self) -> &'static str {
        match self {
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidMessageId(_) => "INVALID_MESSAGE_ID",
            Self::StatusTooLong { .. } => "STATUS_TOO_LONG",
            Self::EmptyText => "EMPTY_TEXT",
            Self::DuplicateMessage(_) => "DUPLICATE_MESSAGE",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MessageNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidDate(_)
                | Self::InvalidMessageId(_)
                | Self::StatusTooLong { .. }
                | Self::EmptyText
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateMessage(_))
    }
}
