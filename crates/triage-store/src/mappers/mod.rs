//! Record ↔ entity mappers

mod message;

pub use message::{record_to_message, DATE_FORMAT};
