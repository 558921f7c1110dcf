//! Data transfer objects

mod mappers;
mod requests;
mod responses;

pub use requests::{CreateMessageRequest, UpdateMessageRequest};
pub use responses::{MessageResponse, ScoredMessageResponse, SentimentCountsResponse};
