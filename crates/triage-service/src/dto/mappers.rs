//! Entity → DTO mappers

use triage_core::Message;
use triage_sentiment::{ScoredMessage, SentimentCounts};

use super::responses::{MessageResponse, ScoredMessageResponse, SentimentCountsResponse};

/// Date format used in responses: `YYYY-MM-DD`
const DATE_FORMAT: &str = "%Y-%m-%d";

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            date: message.date.format(DATE_FORMAT).to_string(),
            status: message.status.clone(),
            text: message.text.clone(),
        }
    }
}

impl From<ScoredMessage> for ScoredMessageResponse {
    fn from(scored: ScoredMessage) -> Self {
        Self {
            id: scored.message.id.to_string(),
            date: scored.message.date.format(DATE_FORMAT).to_string(),
            status: scored.message.status,
            text: scored.message.text,
            sentiment_score: scored.score,
            sentiment_label: scored.label,
        }
    }
}

impl From<SentimentCounts> for SentimentCountsResponse {
    fn from(counts: SentimentCounts) -> Self {
        Self {
            positive: counts.positive,
            negative: counts.negative,
            neutral: counts.neutral,
            total: counts.total(),
        }
    }
}
