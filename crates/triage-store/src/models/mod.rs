//! Storage and wire models

mod message;

pub use message::MessageRecord;
