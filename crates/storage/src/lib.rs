#![forbid(unsafe_code)]

pub mod loader;
pub mod missed;
pub mod phrase_file;
pub mod repository;

pub use loader::{load_dictionary, remove_duplicates};
pub use missed::MissedPhraseLog;
pub use repository::{FileRepository, InMemoryRepository, PhraseRepository, StorageError};
