//! Sentiment service
//!
//! Applies the sentiment engine over the stored message collection. Any
//! repository fault surfaces as a single batch-level failure; no partial
//! results are ever returned.

use tracing::{info, instrument};

use crate::dto::{ScoredMessageResponse, SentimentCountsResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Sentiment service
pub struct SentimentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SentimentService<'a> {
    /// Create a new SentimentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Score and label every stored message, preserving storage order
    #[instrument(skip(self))]
    pub async fn classify_messages(&self) -> ServiceResult<Vec<ScoredMessageResponse>> {
        let messages = self
            .ctx
            .message_repo()
            .list_all()
            .await
            .map_err(|e| ServiceError::batch("classify", e))?;

        let scored = self.ctx.aggregator().classify(messages);

        info!(count = scored.len(), "Messages classified");

        Ok(scored.into_iter().map(ScoredMessageResponse::from).collect())
    }

    /// Tally stored messages into sentiment buckets
    #[instrument(skip(self))]
    pub async fn count_messages(&self) -> ServiceResult<SentimentCountsResponse> {
        let messages = self
            .ctx
            .message_repo()
            .list_all()
            .await
            .map_err(|e| ServiceError::batch("count", e))?;

        let counts = self.ctx.aggregator().count(&messages);

        info!(
            positive = counts.positive,
            negative = counts.negative,
            neutral = counts.neutral,
            "Messages counted"
        );

        Ok(SentimentCountsResponse::from(counts))
    }
}
