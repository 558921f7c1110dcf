//! Text scorer
//!
//! Sums per-word polarities over whitespace-delimited tokens. Tokens are
//! normalized by stripping ASCII punctuation and lowercasing before lookup;
//! tokens absent from the lexicon (or normalizing to an empty string)
//! contribute nothing. No stemming, negation handling, or phrase detection.

use std::sync::Arc;

use crate::lexicon::Lexicon;

/// Lexicon-driven text scorer
///
/// Holds a shared, read-only lexicon. Scoring is pure and stateless per
/// call, so a single scorer can be used from many threads at once.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Arc<Lexicon>,
}

impl SentimentScorer {
    /// Create a scorer over a loaded lexicon
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Access the underlying lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a text by summing the polarities of its tokens.
    ///
    /// The result is unbounded: negative, zero, or positive, with the
    /// absolute value reflecting how strongly the lexicon leans. The empty
    /// text scores 0.
    pub fn score(&self, text: &str) -> i64 {
        text.split_whitespace()
            .map(|token| {
                let word = normalize_token(token);
                self.lexicon
                    .polarity(&word)
                    .map_or(0, triage_core::Polarity::weight)
            })
            .sum()
    }
}

/// Strip ASCII punctuation and lowercase a raw token
fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .flat_map(char::to_lowercase)
        .collect()
}
