//! Message entity - a stored free-text message with triage metadata

use chrono::NaiveDate;

use crate::value_objects::MessageId;

/// Maximum length of a status label, in characters
pub const MAX_STATUS_LEN: usize = 200;

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub date: NaiveDate,
    pub status: String,
    pub text: String,
}

impl Message {
    /// Create a new Message with a freshly generated id
    pub fn new(date: NaiveDate, status: String, text: String) -> Self {
        Self {
            id: MessageId::generate(),
            date,
            status,
            text,
        }
    }

    /// Create a Message with a known id (e.g. loaded from storage)
    pub fn with_id(id: MessageId, date: NaiveDate, status: String, text: String) -> Self {
        Self {
            id,
            date,
            status,
            text,
        }
    }

    /// Check if the message body is empty or whitespace-only
    #[inline]
    pub fn is_empty_text(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Get a truncated preview of the message body
    pub fn preview(&self, max_len: usize) -> &str {
        if self.text.len() <= max_len {
            &self.text
        } else {
            let mut end = max_len;
            while !self.text.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.text[..end]
        }
    }
}
