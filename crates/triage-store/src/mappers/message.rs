//! Message record <-> entity mapper

use chrono::NaiveDate;

use triage_core::{DomainError, Message, MessageId};

use crate::models::MessageRecord;

/// Date format used in records: `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Convert a storage record into a Message entity.
///
/// Records without an id get a freshly generated one. A date that does not
/// parse as `YYYY-MM-DD` or an unparsable id is a validation error.
pub fn record_to_message(record: MessageRecord) -> Result<Message, DomainError> {
    let id = match record.id {
        Some(raw) => MessageId::parse(&raw).map_err(|_| DomainError::InvalidMessageId(raw))?,
        None => MessageId::generate(),
    };
    let date = NaiveDate::parse_from_str(&record.date, DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDate(record.date.clone()))?;

    Ok(Message::with_id(id, date, record.status, record.text))
}

/// Convert a Message entity into its storage record
impl From<&Message> for MessageRecord {
    fn from(message: &Message) -> Self {
        Self {
            id: Some(message.id.to_string()),
            date: message.date.format(DATE_FORMAT).to_string(),
            status: message.status.clone(),
            text: message.text.clone(),
        }
    }
}
