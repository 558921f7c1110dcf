//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Dates travel as `YYYY-MM-DD` strings and are parsed at the service boundary.

use serde::Deserialize;
use validator::Validate;

/// Create message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    /// Message date as `YYYY-MM-DD`
    pub date: String,

    #[validate(length(min = 1, max = 200, message = "Status must be 1-200 characters"))]
    pub status: String,

    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,
}

/// Update message request (full replacement of mutable fields; id is immutable)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMessageRequest {
    /// Message date as `YYYY-MM-DD`
    pub date: String,

    #[validate(length(min = 1, max = 200, message = "Status must be 1-200 characters"))]
    pub status: String,

    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,
}
