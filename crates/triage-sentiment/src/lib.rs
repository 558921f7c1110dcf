//! # triage-sentiment
//!
//! Lexicon-driven sentiment engine. A [`Lexicon`] maps normalized words to
//! polarities, a [`SentimentScorer`] sums polarities over the tokens of a
//! text, and a [`SentimentAggregator`] applies the scorer across a message
//! collection, producing labeled results and bucketed counts.
//!
//! The lexicon is loaded once and is immutable afterwards, so scoring is
//! pure and safe to call concurrently without coordination.

pub mod aggregator;
pub mod lexicon;
pub mod scorer;

// Re-export commonly used types at crate root
pub use aggregator::{ScoredMessage, SentimentAggregator, SentimentCounts};
pub use lexicon::{Lexicon, LexiconError};
pub use scorer::SentimentScorer;
