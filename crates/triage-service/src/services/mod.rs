//! Application services

mod context;
mod error;
mod message;
mod sentiment;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use sentiment::SentimentService;
