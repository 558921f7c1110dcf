//! # triage-app
//!
//! Wires configuration, the sentiment lexicon, the message store, and the
//! application services together, then reports over the stored messages.

use std::sync::Arc;

use tracing::info;

use triage_common::{AppConfig, AppError, AppResult};
use triage_sentiment::{Lexicon, SentimentScorer};
use triage_service::{MessageService, SentimentService, ServiceContext};
use triage_store::{JsonFileSource, MemoryMessageRepository};

/// Build the service context from configuration.
///
/// Loading the lexicon is the only fallible initialization step; a missing
/// or malformed lexicon file aborts startup.
pub async fn build_context(config: &AppConfig) -> AppResult<ServiceContext> {
    let lexicon = Lexicon::from_path(&config.lexicon.path)?;
    let scorer = SentimentScorer::new(Arc::new(lexicon));

    let repo = match &config.store.seed_path {
        Some(path) => {
            let messages = JsonFileSource::load(path)?;
            Arc::new(MemoryMessageRepository::with_messages(messages)?)
        }
        None => MemoryMessageRepository::new_shared(),
    };

    Ok(ServiceContext::new(repo, scorer))
}

/// Run the application: classify and count the stored messages, printing
/// both reports as JSON to stdout.
pub async fn run(config: AppConfig) -> AppResult<()> {
    let ctx = build_context(&config).await?;

    let stored = MessageService::new(&ctx).list_messages().await.map_err(to_app_error)?;
    info!(count = stored.len(), "Messages in store");

    let sentiment = SentimentService::new(&ctx);
    let scored = sentiment.classify_messages().await.map_err(to_app_error)?;
    let counts = sentiment.count_messages().await.map_err(to_app_error)?;

    let report = serde_json::json!({
        "messages": scored,
        "counts": counts,
    });
    let payload = serde_json::to_string_pretty(&report)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
    println!("{payload}");

    Ok(())
}

fn to_app_error(err: triage_service::ServiceError) -> AppError {
    match err {
        triage_service::ServiceError::Domain(e) => AppError::Domain(e),
        triage_service::ServiceError::NotFound { resource, id } => {
            AppError::NotFound(format!("{resource} {id}"))
        }
        triage_service::ServiceError::Validation(msg) => AppError::Validation(msg),
        other => AppError::Internal(anyhow::Error::new(other)),
    }
}
