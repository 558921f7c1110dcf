//! Test helpers for integration tests
//!
//! Builds service contexts over temporary lexicon and message files.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tempfile::NamedTempFile;

use triage_sentiment::{Lexicon, SentimentScorer};
use triage_service::{MessageService, ServiceContext};
use triage_store::MemoryMessageRepository;

use crate::fixtures::TEST_LEXICON;

/// A service context plus the temp files backing it
pub struct TestContext {
    pub ctx: ServiceContext,
    _lexicon_file: NamedTempFile,
}

impl TestContext {
    /// Build a context over the standard test lexicon and an empty store
    pub fn new() -> Result<Self> {
        Self::with_lexicon(TEST_LEXICON)
    }

    /// Build a context over custom lexicon JSON
    pub fn with_lexicon(lexicon_json: &str) -> Result<Self> {
        let mut lexicon_file = NamedTempFile::new()?;
        write!(lexicon_file, "{lexicon_json}")?;

        let lexicon = Lexicon::from_path(lexicon_file.path())?;
        let ctx = ServiceContext::new(
            MemoryMessageRepository::new_shared(),
            SentimentScorer::new(Arc::new(lexicon)),
        );

        Ok(Self {
            ctx,
            _lexicon_file: lexicon_file,
        })
    }

    /// Store one message per text, in order
    pub async fn seed_texts(&self, texts: &[&str]) -> Result<Vec<String>> {
        let service = MessageService::new(&self.ctx);
        let mut ids = Vec::with_capacity(texts.len());
        for text in texts {
            let created = service
                .create_message(crate::fixtures::create_request_with_text(text))
                .await
                .map_err(anyhow::Error::new)?;
            ids.push(created.id);
        }
        Ok(ids)
    }
}

/// Write a JSON messages file and return its path (file kept alive by the handle)
pub fn write_messages_file(records_json: &str) -> Result<(NamedTempFile, PathBuf)> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{records_json}")?;
    let path = file.path().to_path_buf();
    Ok((file, path))
}
