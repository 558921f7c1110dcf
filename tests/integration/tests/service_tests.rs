//! End-to-end tests over the service layer
//!
//! Exercises message CRUD and sentiment evaluation through the same wiring
//! the application binary uses.

use integration_tests::fixtures::{canonical_texts, create_request};
use integration_tests::helpers::{write_messages_file, TestContext};

use triage_core::{MessageId, SentimentLabel};
use triage_sentiment::{Lexicon, LexiconError};
use triage_service::{MessageService, SentimentService, UpdateMessageRequest};
use triage_store::JsonFileSource;

#[tokio::test]
async fn message_crud_full_cycle() {
    let test = TestContext::new().unwrap();
    let service = MessageService::new(&test.ctx);

    // Create
    let created = service.create_message(create_request()).await.unwrap();
    let id = MessageId::parse(&created.id).unwrap();

    // Read
    let fetched = service.get_message(id).await.unwrap();
    assert_eq!(fetched, created);

    // Update
    let updated = service
        .update_message(
            id,
            UpdateMessageRequest {
                date: "2022-01-25".to_string(),
                status: "Fechado".to_string(),
                text: "Mensagem atualizada".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.status, "Fechado");
    assert_eq!(updated.date, "2022-01-25");

    // Delete returns the last state
    let deleted = service.delete_message(id).await.unwrap();
    assert_eq!(deleted, updated);

    let err = service.get_message(id).await.unwrap_err();
    assert_eq!(err.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn list_returns_messages_in_insertion_order() {
    let test = TestContext::new().unwrap();
    let ids = test.seed_texts(&["primeira", "segunda", "terceira"]).await.unwrap();

    let listed = MessageService::new(&test.ctx).list_messages().await.unwrap();
    let listed_ids: Vec<_> = listed.iter().map(|m| m.id.clone()).collect();
    assert_eq!(listed_ids, ids);
}

#[tokio::test]
async fn classify_labels_canonical_phrases() {
    let test = TestContext::new().unwrap();
    test.seed_texts(&canonical_texts()).await.unwrap();

    let scored = SentimentService::new(&test.ctx)
        .classify_messages()
        .await
        .unwrap();

    assert_eq!(scored.len(), 3);
    assert_eq!(scored[0].sentiment_score, 3);
    assert_eq!(scored[0].sentiment_label, SentimentLabel::Positive);
    assert_eq!(scored[1].sentiment_score, -3);
    assert_eq!(scored[1].sentiment_label, SentimentLabel::Negative);
    assert_eq!(scored[2].sentiment_score, 0);
    assert_eq!(scored[2].sentiment_label, SentimentLabel::Neutral);
}

#[tokio::test]
async fn counts_bucket_one_message_each() {
    let test = TestContext::new().unwrap();
    test.seed_texts(&canonical_texts()).await.unwrap();

    let counts = SentimentService::new(&test.ctx).count_messages().await.unwrap();
    assert_eq!(counts.positive, 1);
    assert_eq!(counts.negative, 1);
    assert_eq!(counts.neutral, 1);
    assert_eq!(counts.total, 3);
}

#[tokio::test]
async fn empty_store_classifies_to_empty_and_zero() {
    let test = TestContext::new().unwrap();
    let sentiment = SentimentService::new(&test.ctx);

    assert!(sentiment.classify_messages().await.unwrap().is_empty());

    let counts = sentiment.count_messages().await.unwrap();
    assert_eq!((counts.positive, counts.negative, counts.neutral), (0, 0, 0));
    assert_eq!(counts.total, 0);
}

#[tokio::test]
async fn classification_serializes_expected_json_shape() {
    let test = TestContext::new().unwrap();
    test.seed_texts(&["Sou uma frase feliz"]).await.unwrap();

    let scored = SentimentService::new(&test.ctx)
        .classify_messages()
        .await
        .unwrap();
    let value = serde_json::to_value(&scored).unwrap();

    let first = &value[0];
    assert!(first["id"].is_string());
    assert_eq!(first["date"], "2000-05-23");
    assert_eq!(first["status"], "Em Espera");
    assert_eq!(first["sentiment_score"], 1);
    assert_eq!(first["sentiment_label"], "positive");
}

#[tokio::test]
async fn seed_file_flows_through_the_whole_stack() {
    let (_file, path) = write_messages_file(
        r#"[
            {"date": "2022-01-24", "status": "Em Espera", "text": "Estou bem chateado. Gostaria de fazer um pedido."},
            {"date": "2021-02-23", "status": "Aberto", "text": "Sou uma frase feliz"},
            {"date": "2020-05-19", "status": "Fechado", "text": "Sou uma frase triste"}
        ]"#,
    )
    .unwrap();

    let messages = JsonFileSource::load(&path).unwrap();
    assert_eq!(messages.len(), 3);

    let test = TestContext::new().unwrap();
    let aggregator = test.ctx.aggregator();
    let counts = aggregator.count(&messages);
    assert_eq!(counts.total(), 3);
    // "chateado" is not in the two-word test lexicon, so the first message is neutral
    assert_eq!(counts.neutral, 1);
    assert_eq!(counts.positive, 1);
    assert_eq!(counts.negative, 1);
}

#[tokio::test]
async fn app_wiring_builds_from_config() {
    use std::io::Write;

    let mut lexicon_file = tempfile::NamedTempFile::new().unwrap();
    write!(lexicon_file, r#"{{"feliz": 1, "triste": -1}}"#).unwrap();

    let (_messages_file, messages_path) = write_messages_file(
        r#"[{"date": "2000-05-23", "status": "Em Espera", "text": "Sou uma frase feliz"}]"#,
    )
    .unwrap();

    let config = triage_common::AppConfig {
        app: triage_common::AppSettings {
            name: "triage".to_string(),
            env: triage_common::Environment::Development,
        },
        lexicon: triage_common::LexiconConfig {
            path: lexicon_file.path().to_path_buf(),
        },
        store: triage_common::StoreConfig {
            seed_path: Some(messages_path),
        },
    };

    let ctx = triage_app::build_context(&config).await.unwrap();
    let scored = SentimentService::new(&ctx).classify_messages().await.unwrap();
    assert_eq!(scored.len(), 1);
    assert_eq!(scored[0].sentiment_label, SentimentLabel::Positive);
}

#[test]
fn lexicon_rejects_out_of_range_polarity() {
    let err = Lexicon::from_entries([("feliz", 2)]).unwrap_err();
    assert!(matches!(err, LexiconError::InvalidPolarity { .. }));
}

#[test]
fn bundled_lexicon_asset_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../assets/pt_word_polarity.json");
    let lexicon = Lexicon::from_path(path).unwrap();
    assert!(!lexicon.is_empty());
    assert_eq!(
        lexicon.polarity("feliz"),
        Some(triage_core::Polarity::Positive)
    );
    assert_eq!(
        lexicon.polarity("triste"),
        Some(triage_core::Polarity::Negative)
    );
}
