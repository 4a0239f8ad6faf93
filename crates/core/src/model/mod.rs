mod config;
mod phrase;
mod store;

pub use config::{DEFAULT_PRINT_INTERVAL_MS, SessionConfig};
pub use phrase::{Direction, Phrase, strip_annotation};
pub use store::PhraseStore;
