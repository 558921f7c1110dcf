//! Application configuration structs
//!
//! Loads configuration from environment variables (with optional `.env` file).

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub lexicon: LexiconConfig,
    pub store: StoreConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Sentiment lexicon configuration
#[derive(Debug, Clone)]
pub struct LexiconConfig {
    /// Path to the word → polarity JSON file
    pub path: PathBuf,
}

/// Message store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Optional JSON file of seed messages loaded at startup
    pub seed_path: Option<PathBuf>,
}

// Default value functions
fn default_app_name() -> String {
    "triage".to_string()
}

fn default_lexicon_path() -> PathBuf {
    PathBuf::from("assets/pt_word_polarity.json")
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let env = match env::var("APP_ENV") {
            Ok(s) => match s.to_lowercase().as_str() {
                "production" => Environment::Production,
                "staging" => Environment::Staging,
                "development" => Environment::Development,
                _ => return Err(ConfigError::InvalidValue("APP_ENV", s)),
            },
            Err(_) => Environment::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env,
            },
            lexicon: LexiconConfig {
                path: env::var("LEXICON_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_lexicon_path()),
            },
            store: StoreConfig {
                seed_path: env::var("MESSAGES_PATH").ok().map(PathBuf::from),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
