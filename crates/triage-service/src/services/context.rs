//! Service context - dependency container for services
//!
//! Holds the message repository and the sentiment engine shared by all
//! services. The scorer's lexicon is immutable after construction, so the
//! whole context is cheap to clone and safe to share across tasks.

use std::fmt;
use std::sync::Arc;

use triage_core::traits::MessageRepository;
use triage_sentiment::{SentimentAggregator, SentimentScorer};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    message_repo: Arc<dyn MessageRepository>,
    scorer: SentimentScorer,
}

impl fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceContext")
            .field("message_repo", &"Arc<dyn MessageRepository>")
            .field("scorer", &self.scorer)
            .finish()
    }
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(message_repo: Arc<dyn MessageRepository>, scorer: SentimentScorer) -> Self {
        Self {
            message_repo,
            scorer,
        }
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &Arc<dyn MessageRepository> {
        &self.message_repo
    }

    /// Get the sentiment scorer
    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }

    /// Build an aggregator over the shared scorer
    pub fn aggregator(&self) -> SentimentAggregator {
        SentimentAggregator::new(self.scorer.clone())
    }
}
