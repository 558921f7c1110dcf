//! Sentiment label derived from a text score

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a text score by sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Derive the label from a score.
    ///
    /// The label is a pure function of the score sign: positive scores map
    /// to `Positive`, negative scores to `Negative`, zero to `Neutral`.
    #[must_use]
    pub const fn from_score(score: i64) -> Self {
        if score > 0 {
            Self::Positive
        } else if score < 0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Lowercase string form, matching the serialized representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
