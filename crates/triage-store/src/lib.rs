//! # triage-store
//!
//! Storage layer implementing the message repository trait defined in
//! `triage-core`, plus a JSON file message source for seeding. It handles:
//!
//! - Wire/storage models with serde derives
//! - Record ↔ entity mappers
//! - A concurrent in-memory repository implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use triage_core::traits::MessageRepository;
//! use triage_store::MemoryMessageRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = MemoryMessageRepository::new();
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod repositories;
pub mod source;

// Re-export commonly used types
pub use models::MessageRecord;
pub use repositories::MemoryMessageRepository;
pub use source::JsonFileSource;
