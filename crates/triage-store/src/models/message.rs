//! Message storage record

use serde::{Deserialize, Serialize};

/// Serde model for a message on disk or on the wire
///
/// The `id` is optional on input; records without one get a fresh id when
/// mapped to the entity. Dates travel as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: String,
    pub status: String,
    pub text: String,
}

impl MessageRecord {
    /// Check if the record carries an explicit id
    #[inline]
    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }
}
