//! Word-polarity lexicon
//!
//! The lexicon is a static word → polarity mapping loaded once at startup
//! from a JSON object file (`{"feliz": 1, "triste": -1, ...}`). Keys are
//! expected to already be normalized (lowercase, no punctuation). A missing,
//! unreadable, or malformed file is a fatal initialization error; there is
//! no partial-lexicon fallback.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use triage_core::Polarity;

/// Errors raised while building a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed lexicon JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid polarity for word {word:?}: {value} (expected -1, 0, or 1)")]
    InvalidPolarity { word: String, value: i64 },
}

/// Immutable word → polarity mapping
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, Polarity>,
}

impl Lexicon {
    /// Load a lexicon from a JSON object file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), words = lexicon.len(), "Lexicon loaded");
        Ok(lexicon)
    }

    /// Build a lexicon from any JSON reader
    pub fn from_reader(reader: impl Read) -> Result<Self, LexiconError> {
        let raw: HashMap<String, i64> = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Build a lexicon from in-memory entries (mostly for tests)
    pub fn from_entries<I, S>(entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let raw: HashMap<String, i64> = entries
            .into_iter()
            .map(|(word, value)| (word.into(), value))
            .collect();
        Self::from_raw(raw)
    }

    fn from_raw(raw: HashMap<String, i64>) -> Result<Self, LexiconError> {
        let mut words = HashMap::with_capacity(raw.len());
        for (word, value) in raw {
            let polarity = Polarity::try_from(value)
                .map_err(|_| LexiconError::InvalidPolarity { word: word.clone(), value })?;
            words.insert(word, polarity);
        }
        Ok(Self { words })
    }

    /// Look up the polarity of a normalized word
    #[inline]
    pub fn polarity(&self, word: &str) -> Option<Polarity> {
        self.words.get(word).copied()
    }

    /// Number of words in the lexicon
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the lexicon contains no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
