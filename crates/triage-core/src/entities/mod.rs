//! Domain entities - core business objects

mod message;

pub use message::{Message, MAX_STATUS_LEN};
