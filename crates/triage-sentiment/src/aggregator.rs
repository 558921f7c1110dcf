//! Batch aggregation
//!
//! Applies the scorer across a message collection, producing per-message
//! labeled results and bucketed counts. Scoring is total over any input
//! text, so aggregation itself cannot fail; fetch failures are the caller's
//! concern and abort the whole batch before aggregation starts.

use serde::Serialize;

use triage_core::{Message, SentimentLabel};

use crate::scorer::SentimentScorer;

/// A message together with its sentiment score and label
///
/// Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMessage {
    pub message: Message,
    pub score: i64,
    pub label: SentimentLabel,
}

/// Bucketed sentiment tallies over a message collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

impl SentimentCounts {
    /// Add one message's label to the matching bucket
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    /// Total number of messages counted
    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }
}

/// Applies a scorer across message collections
#[derive(Debug, Clone)]
pub struct SentimentAggregator {
    scorer: SentimentScorer,
}

impl SentimentAggregator {
    /// Create an aggregator over a scorer
    pub fn new(scorer: SentimentScorer) -> Self {
        Self { scorer }
    }

    /// Score a single message
    pub fn classify_one(&self, message: Message) -> ScoredMessage {
        let score = self.scorer.score(&message.text);
        ScoredMessage {
            message,
            score,
            label: SentimentLabel::from_score(score),
        }
    }

    /// Score and label every message, preserving input order
    pub fn classify(&self, messages: impl IntoIterator<Item = Message>) -> Vec<ScoredMessage> {
        messages
            .into_iter()
            .map(|message| self.classify_one(message))
            .collect()
    }

    /// Tally messages into sentiment buckets in a single pass.
    ///
    /// Each message lands in exactly one bucket, so the buckets always sum
    /// to the number of messages. The result does not depend on input order.
    pub fn count<'a>(&self, messages: impl IntoIterator<Item = &'a Message>) -> SentimentCounts {
        let mut counts = SentimentCounts::default();
        for message in messages {
            let score = self.scorer.score(&message.text);
            counts.record(SentimentLabel::from_score(score));
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Arc;

    use crate::lexicon::Lexicon;

    fn aggregator() -> SentimentAggregator {
        let lexicon = Lexicon::from_entries([("feliz", 1), ("triste", -1)]).unwrap();
        SentimentAggregator::new(SentimentScorer::new(Arc::new(lexicon)))
    }

    fn message(text: &str) -> Message {
        Message::new(
            NaiveDate::from_ymd_opt(2000, 5, 23).unwrap(),
            "Em Espera".to_string(),
            text.to_string(),
        )
    }

    fn sample_batch() -> Vec<Message> {
        vec![
            message("Sou uma frase feliz, feliz, feliz"),
            message("Sou uma frase triste, triste, triste"),
            message("Sou uma frase"),
        ]
    }

    #[test]
    fn test_classify_scores_and_labels() {
        let scored = aggregator().classify(sample_batch());
        assert_eq!(scored.len(), 3);

        assert_eq!(scored[0].score, 3);
        assert_eq!(scored[0].label, SentimentLabel::Positive);

        assert_eq!(scored[1].score, -3);
        assert_eq!(scored[1].label, SentimentLabel::Negative);

        assert_eq!(scored[2].score, 0);
        assert_eq!(scored[2].label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_classify_preserves_input_order_and_fields() {
        let batch = sample_batch();
        let ids: Vec<_> = batch.iter().map(|m| m.id).collect();
        let scored = aggregator().classify(batch);
        let scored_ids: Vec<_> = scored.iter().map(|s| s.message.id).collect();
        assert_eq!(ids, scored_ids);
        assert_eq!(scored[0].message.status, "Em Espera");
    }

    #[test]
    fn test_classify_empty_collection() {
        let scored = aggregator().classify(Vec::new());
        assert!(scored.is_empty());
    }

    #[test]
    fn test_count_buckets() {
        let batch = sample_batch();
        let counts = aggregator().count(&batch);
        assert_eq!(counts.positive, 1);
        assert_eq!(counts.negative, 1);
        assert_eq!(counts.neutral, 1);
        assert_eq!(counts.total(), batch.len() as u64);
    }

    #[test]
    fn test_count_is_order_independent() {
        let mut batch = sample_batch();
        let forward = aggregator().count(&batch);
        batch.reverse();
        let backward = aggregator().count(&batch);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_count_empty_collection_is_all_zero() {
        let counts = aggregator().count(&[]);
        assert_eq!(counts, SentimentCounts::default());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_counts_sum_to_message_count() {
        let batch = vec![
            message("feliz"),
            message("feliz feliz"),
            message("triste"),
            message(""),
            message("nada aqui"),
        ];
        let counts = aggregator().count(&batch);
        assert_eq!(counts.total(), batch.len() as u64);
    }
}
