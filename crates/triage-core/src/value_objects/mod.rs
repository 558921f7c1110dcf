//! Value objects - identifiers and sentiment primitives

mod message_id;
mod polarity;
mod sentiment_label;

pub use message_id::{MessageId, MessageIdParseError};
pub use polarity::{Polarity, PolarityError};
pub use sentiment_label::SentimentLabel;
