//! JSON file message source
//!
//! Loads a batch of messages from a JSON array of records. An unreadable or
//! malformed file fails the whole load; there is no partial result.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::info;

use triage_core::{DomainError, Message};

use crate::mappers::record_to_message;
use crate::models::MessageRecord;

/// Loads messages from a JSON array file of records
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileSource;

impl JsonFileSource {
    /// Read all messages from `path`, in file order
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<Message>, DomainError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            DomainError::StorageError(format!("cannot open {}: {e}", path.display()))
        })?;
        let records: Vec<MessageRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                DomainError::StorageError(format!("malformed messages file {}: {e}", path.display()))
            })?;

        let messages = records
            .into_iter()
            .map(record_to_message)
            .collect::<Result<Vec<_>, _>>()?;

        info!(path = %path.display(), count = messages.len(), "Messages loaded from file");
        Ok(messages)
    }
}
