//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output. Message ids are
//! serialized as canonical UUID strings; dates as `YYYY-MM-DD`.

use serde::Serialize;

use triage_core::SentimentLabel;

/// Message response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub date: String,
    pub status: String,
    pub text: String,
}

/// Message with its sentiment evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredMessageResponse {
    pub id: String,
    pub date: String,
    pub status: String,
    pub text: String,
    pub sentiment_score: i64,
    pub sentiment_label: SentimentLabel,
}

/// Bucketed sentiment tallies over the stored messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentCountsResponse {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    pub total: u64,
}
