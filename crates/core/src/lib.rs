#![forbid(unsafe_code)]

pub mod model;
pub mod source;
pub mod time;

pub use model::{Direction, Phrase, PhraseStore, SessionConfig};
pub use source::{Dictionary, PhraseSource};
pub use time::Clock;
