//! In-memory implementation of MessageRepository
//!
//! Backed by a `DashMap` for thread-safe access. An atomic insertion
//! sequence keeps `list_all` in insertion order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, instrument};

use triage_core::traits::{MessageRepository, RepoResult};
use triage_core::{Message, MessageId};

use super::error::{duplicate_message, message_not_found};

#[derive(Debug, Clone)]
struct StoredMessage {
    seq: u64,
    message: Message,
}

/// In-memory implementation of MessageRepository
#[derive(Debug, Default)]
pub struct MemoryMessageRepository {
    messages: DashMap<MessageId, StoredMessage>,
    next_seq: AtomicU64,
}

impl MemoryMessageRepository {
    /// Create a new empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new repository wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Create a repository pre-populated with messages, preserving order
    pub fn with_messages(messages: impl IntoIterator<Item = Message>) -> RepoResult<Self> {
        let repo = Self::new();
        for message in messages {
            repo.insert(&message)?;
        }
        Ok(repo)
    }

    fn insert(&self, message: &Message) -> RepoResult<()> {
        if self.messages.contains_key(&message.id) {
            return Err(duplicate_message(message.id));
        }
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.messages.insert(
            message.id,
            StoredMessage {
                seq,
                message: message.clone(),
            },
        );
        Ok(())
    }
}

#[async_trait]
impl MessageRepository for MemoryMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>> {
        Ok(self.messages.get(&id).map(|entry| entry.message.clone()))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Message>> {
        let mut stored: Vec<StoredMessage> = self
            .messages
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        stored.sort_by_key(|s| s.seq);
        Ok(stored.into_iter().map(|s| s.message).collect())
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        self.insert(message)?;
        debug!(message_id = %message.id, "Message stored");
        Ok(())
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn update(&self, message: &Message) -> RepoResult<()> {
        let mut entry = self
            .messages
            .get_mut(&message.id)
            .ok_or_else(|| message_not_found(message.id))?;
        entry.message = message.clone();
        debug!(message_id = %message.id, "Message updated");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MessageId) -> RepoResult<()> {
        self.messages
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| message_not_found(id))?;
        debug!(message_id = %id, "Message deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<u64> {
        Ok(self.messages.len() as u64)
    }
}
