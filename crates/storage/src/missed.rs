use std::path::PathBuf;

use drill_core::Phrase;
use tracing::info;

use crate::phrase_file;
use crate::repository::StorageError;

const FILE_STEM: &str = "errors";
const FILE_EXT: &str = "txt";

/// Write-once dump of incorrectly answered phrases.
///
/// Files are named `errors1.txt`, `errors2.txt`, … inside `dir`; the first
/// name that does not exist yet is used. After one successful write further
/// calls are ignored until [`MissedPhraseLog::reset`].
#[derive(Debug, Clone)]
pub struct MissedPhraseLog {
    dir: PathBuf,
    written: bool,
}

impl MissedPhraseLog {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: false,
        }
    }

    #[must_use]
    pub fn is_written(&self) -> bool {
        self.written
    }

    /// Allow the next non-empty record to be written again.
    pub fn reset(&mut self) {
        self.written = false;
    }

    /// First `errors<N>.txt` path in `dir` that does not exist yet.
    #[must_use]
    pub fn next_path(&self) -> PathBuf {
        (1_usize..)
            .map(|id| self.dir.join(format!("{FILE_STEM}{id}.{FILE_EXT}")))
            .find(|path| !path.exists())
            .unwrap_or_else(|| self.dir.join(format!("{FILE_STEM}1.{FILE_EXT}")))
    }

    /// Write `phrases` unless they are empty or a file was already written.
    ///
    /// Returns the path written to, or `None` when nothing was written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be created.
    pub fn record(&mut self, phrases: &[Phrase]) -> Result<Option<PathBuf>, StorageError> {
        if phrases.is_empty() || self.written {
            return Ok(None);
        }

        let path = self.next_path();
        phrase_file::write_phrases(&path, phrases)?;
        self.written = true;
        info!(path = %path.display(), count = phrases.len(), "missed phrases written");
        Ok(Some(path))
    }
}
