/// Default delay between printed phrase pairs.
pub const DEFAULT_PRINT_INTERVAL_MS: u64 = 2000;

/// Startup configuration shared by the quiz and the phrase printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    session_size: usize,
    print_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_size: 0,
            print_interval_ms: DEFAULT_PRINT_INTERVAL_MS,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new(session_size: usize, print_interval_ms: u64) -> Self {
        Self {
            session_size,
            print_interval_ms,
        }
    }

    /// Requested number of phrases per session; `0` means "all".
    #[must_use]
    pub fn session_size(&self) -> usize {
        self.session_size
    }

    #[must_use]
    pub fn print_interval_ms(&self) -> u64 {
        self.print_interval_ms
    }

    #[must_use]
    pub fn with_session_size(mut self, session_size: usize) -> Self {
        self.session_size = session_size;
        self
    }

    #[must_use]
    pub fn with_print_interval_ms(mut self, print_interval_ms: u64) -> Self {
        self.print_interval_ms = print_interval_ms;
        self
    }

    /// Resolve the requested size against a collection of `available` phrases.
    #[must_use]
    pub fn effective_size(&self, available: usize) -> usize {
        if self.session_size == 0 {
            available
        } else {
            self.session_size.min(available)
        }
    }
}
