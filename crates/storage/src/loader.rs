use drill_core::{Dictionary, PhraseStore, SessionConfig};
use tracing::{debug, info, warn};

use crate::repository::{PhraseRepository, StorageError};

/// Load a dictionary from `repo`, dropping duplicate pairs.
///
/// When duplicates were found, the cleaned collection is written back so the
/// stored copy converges to a duplicate-free state. A failed write-back is
/// logged and the cleaned collection is still returned.
///
/// # Errors
///
/// Returns `StorageError::NotFound` if the source is missing and
/// `StorageError::InsufficientData` if it holds no complete pair.
pub fn load_dictionary(
    repo: &dyn PhraseRepository,
    config: SessionConfig,
) -> Result<Dictionary, StorageError> {
    let store = load_store(repo, WriteBack::BestEffort)?;
    info!(
        location = %repo.location(),
        phrases = store.len(),
        "phrase collection loaded"
    );
    Ok(Dictionary::new(store, config))
}

/// Rewrite `repo` without duplicates and return how many were removed.
///
/// # Errors
///
/// Same as [`load_dictionary`], and propagates write-back failures.
pub fn remove_duplicates(repo: &dyn PhraseRepository) -> Result<usize, StorageError> {
    let store = load_store(repo, WriteBack::Required)?;
    Ok(store.removed_duplicates())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteBack {
    BestEffort,
    Required,
}

fn load_store(
    repo: &dyn PhraseRepository,
    write_back: WriteBack,
) -> Result<PhraseStore, StorageError> {
    let phrases = repo.load_phrases()?;
    if phrases.is_empty() {
        return Err(StorageError::InsufficientData {
            path: repo.location(),
        });
    }

    let store = PhraseStore::from_phrases(phrases);
    let removed = store.removed_duplicates();
    if removed > 0 {
        match repo.save_phrases(store.phrases()) {
            Ok(()) => info!(
                location = %repo.location(),
                removed,
                "duplicate phrases removed and written back"
            ),
            Err(err) if write_back == WriteBack::BestEffort => warn!(
                location = %repo.location(),
                removed,
                error = %err,
                "could not write back de-duplicated phrases"
            ),
            Err(err) => return Err(err),
        }
    } else {
        debug!(location = %repo.location(), "no duplicate phrases found");
    }
    Ok(store)
}
