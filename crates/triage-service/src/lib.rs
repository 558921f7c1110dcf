//! # triage-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CreateMessageRequest, MessageResponse, ScoredMessageResponse, SentimentCountsResponse,
    UpdateMessageRequest,
};
pub use services::{MessageService, SentimentService, ServiceContext, ServiceError, ServiceResult};
