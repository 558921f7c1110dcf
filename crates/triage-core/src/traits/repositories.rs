//! Repository traits (ports) - define the interface for message storage
//!
//! The domain layer defines what it needs from the storage collaborator,
//! and the infrastructure layer provides the implementation.

use async_trait::async_trait;

use crate::entities::Message;
use crate::error::DomainError;
use crate::value_objects::MessageId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: MessageId) -> RepoResult<Option<Message>>;

    /// List all messages in insertion order
    async fn list_all(&self) -> RepoResult<Vec<Message>>;

    /// Persist a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Update an existing message
    async fn update(&self, message: &Message) -> RepoResult<()>;

    /// Delete a message
    async fn delete(&self, id: MessageId) -> RepoResult<()>;

    /// Count stored messages
    async fn count(&self) -> RepoResult<u64>;
}
