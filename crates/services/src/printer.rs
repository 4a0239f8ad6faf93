use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::debug;

use drill_core::PhraseSource;

use crate::error::SessionError;

/// Prints phrase pairs one at a time with a pause after each.
pub struct PhrasePrinter<S> {
    source: S,
}

impl<S: PhraseSource> PhrasePrinter<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Write the first `session_size` phrases in collection order, each as
    /// the primary line, the target line and a blank line. Returns the number
    /// of phrases printed.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if writing to `out` fails.
    pub fn print<W: Write + ?Sized>(&self, out: &mut W) -> Result<usize, SessionError> {
        let count = self.source.session_size();
        let pause = Duration::from_millis(self.source.print_interval_ms());
        debug!(count, interval_ms = self.source.print_interval_ms(), "printing phrases");

        for phrase in self.source.phrases().iter().take(count) {
            write!(out, "{}\n{}\n\n", phrase.primary(), phrase.target())?;
            out.flush()?;
            if !pause.is_zero() {
                thread::sleep(pause);
            }
        }
        Ok(count)
    }
}
