//! Error handling utilities for repositories

use triage_core::{DomainError, MessageId};

/// Create a "message not found" error
pub fn message_not_found(id: MessageId) -> DomainError {
    DomainError::MessageNotFound(id)
}

/// Create a "duplicate message" error
pub fn duplicate_message(id: MessageId) -> DomainError {
    DomainError::DuplicateMessage(id)
}
