//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use triage_service::CreateMessageRequest;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Lexicon JSON used by most tests
pub const TEST_LEXICON: &str = r#"{"feliz": 1, "triste": -1}"#;

/// A well-formed create request with a unique body
pub fn create_request() -> CreateMessageRequest {
    let suffix = unique_suffix();
    CreateMessageRequest {
        date: "2022-01-24".to_string(),
        status: "Em Espera".to_string(),
        text: format!("Gostaria de fazer um pedido. ({suffix})"),
    }
}

/// A create request with a fixed body
pub fn create_request_with_text(text: &str) -> CreateMessageRequest {
    CreateMessageRequest {
        date: "2000-05-23".to_string(),
        status: "Em Espera".to_string(),
        text: text.to_string(),
    }
}

/// The three canonical phrases: positive, negative, neutral
pub fn canonical_texts() -> [&'static str; 3] {
    [
        "Sou uma frase feliz, feliz, feliz",
        "Sou uma frase triste, triste, triste",
        "Sou uma frase",
    ]
}
