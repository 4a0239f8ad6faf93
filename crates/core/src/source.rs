use crate::model::{Phrase, PhraseStore, SessionConfig};

/// Read-only view of a phrase collection plus the settings that govern how
/// it is drilled or printed.
///
/// The quiz engine and the phrase printer depend only on this capability, so
/// neither needs to know where the phrases came from.
pub trait PhraseSource {
    /// All phrases, duplicate-free, in load order.
    fn phrases(&self) -> &[Phrase];

    /// Startup configuration.
    fn config(&self) -> SessionConfig;

    fn phrase_count(&self) -> usize {
        self.phrases().len()
    }

    fn is_empty(&self) -> bool {
        self.phrases().is_empty()
    }

    /// Number of phrases to use per session, resolved against the collection
    /// size (`0` in the config means "all").
    fn session_size(&self) -> usize {
        self.config().effective_size(self.phrase_count())
    }

    fn print_interval_ms(&self) -> u64 {
        self.config().print_interval_ms()
    }
}

/// In-memory phrase source: a deduplicated store plus its configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    store: PhraseStore,
    config: SessionConfig,
}

impl Dictionary {
    #[must_use]
    pub fn new(store: PhraseStore, config: SessionConfig) -> Self {
        Self { store, config }
    }

    /// Build a dictionary from a literal list, dropping duplicates.
    #[must_use]
    pub fn from_phrases(phrases: impl IntoIterator<Item = Phrase>, config: SessionConfig) -> Self {
        Self::new(PhraseStore::from_phrases(phrases), config)
    }

    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }
}

impl PhraseSource for Dictionary {
    fn phrases(&self) -> &[Phrase] {
        self.store.phrases()
    }

    fn config(&self) -> SessionConfig {
        self.config
    }
}
