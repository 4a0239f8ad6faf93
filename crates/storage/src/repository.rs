use std::cell::Cell;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use drill_core::Phrase;
use thiserror::Error;
use tracing::warn;

use crate::phrase_file;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("file \"{path}\" was not found")]
    NotFound { path: String },

    #[error("file \"{path}\" contains insufficient data")]
    InsufficientData { path: String },

    #[error("i/o error on \"{path}\": {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("file \"{path}\" is not valid UTF-8 and will not be rewritten")]
    NotUtf8 { path: String },

    #[error("connection error: {0}")]
    Connection(String),
}

/// Repository contract for a phrase collection.
pub trait PhraseRepository {
    /// Human-readable location used in messages and logs.
    fn location(&self) -> String;

    /// Load every stored phrase in order, duplicates included.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the backing store is missing, or
    /// other storage errors.
    fn load_phrases(&self) -> Result<Vec<Phrase>, StorageError>;

    /// Replace the stored phrases with `phrases`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the phrases cannot be stored.
    fn save_phrases(&self, phrases: &[Phrase]) -> Result<(), StorageError>;
}

/// Phrase file on disk.
///
/// A file that is not valid UTF-8 is still read, with the offending bytes
/// replaced, but is never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRepository {
    path: PathBuf,
    replaced_invalid: Cell<bool>,
}

impl FileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            replaced_invalid: Cell::new(false),
        }
    }
}

impl PhraseRepository for FileRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load_phrases(&self) -> Result<Vec<Phrase>, StorageError> {
        let (text, replaced) = phrase_file::read_text(&self.path)?;
        if replaced {
            warn!(path = %self.path.display(), "phrase file is not valid UTF-8");
        }
        self.replaced_invalid.set(replaced);
        Ok(phrase_file::parse(&text))
    }

    fn save_phrases(&self, phrases: &[Phrase]) -> Result<(), StorageError> {
        if self.replaced_invalid.get() {
            return Err(StorageError::NotUtf8 {
                path: self.location(),
            });
        }
        phrase_file::write_phrases(&self.path, phrases)
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    phrases: Arc<Mutex<Vec<Phrase>>>,
    saves: Arc<Mutex<usize>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(phrases: Vec<Phrase>) -> Self {
        Self {
            phrases: Arc::new(Mutex::new(phrases)),
            saves: Arc::new(Mutex::new(0)),
        }
    }

    /// Current contents.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<Phrase>, StorageError> {
        self.load_phrases()
    }

    /// How many times `save_phrases` has been called.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn save_count(&self) -> Result<usize, StorageError> {
        let guard = self
            .saves
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(*guard)
    }
}

impl PhraseRepository for InMemoryRepository {
    fn location(&self) -> String {
        "memory".to_owned()
    }

    fn load_phrases(&self) -> Result<Vec<Phrase>, StorageError> {
        let guard = self
            .phrases
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    fn save_phrases(&self, phrases: &[Phrase]) -> Result<(), StorageError> {
        let mut guard = self
            .phrases
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = phrases.to_vec();
        let mut saves = self
            .saves
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *saves += 1;
        Ok(())
    }
}
