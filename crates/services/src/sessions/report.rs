use std::path::{Path, PathBuf};

use drill_core::Phrase;
use storage::MissedPhraseLog;

use super::answer::{CharMismatch, GuessCheck};
use super::progress::{SessionStats, format_precision};
use crate::console::Console;
use crate::error::SessionError;

const RULE: &str =
    "--------------------------------------------------------------------------------";

//
// ─── FORMATTING ────────────────────────────────────────────────────────────────
//

/// Banner printed once before the first round.
#[must_use]
pub fn start_banner(loaded: usize) -> String {
    format!("{RULE}\nStarting translation game!\n{loaded} phrases have been loaded!\n{RULE}\n\n")
}

/// Live progress, or `None` before the first guess.
#[must_use]
pub fn status(stats: &SessionStats, target: usize) -> Option<String> {
    if stats.guesses() == 0 {
        return None;
    }
    Some(format!(
        "{RULE}\n\
         Number of guesses:\t\t{}\n\
         Number of correct answers:\t{}\n\
         Number of incorrect guesses:\t{}\n\
         Number of phrases remaining:\t{}\n\
         {RULE}\n\n",
        stats.guesses(),
        stats.correct(),
        stats.errors(),
        target.saturating_sub(stats.correct()),
    ))
}

/// Final score for a round.
#[must_use]
pub fn results(stats: &SessionStats) -> String {
    let rate = stats
        .precision()
        .map_or_else(|| "-".to_owned(), format_precision);
    format!(
        "{RULE}\n\
         Total number of guesses:\t{}\n\
         Number of correct answers:\t{}\n\
         Number of incorrect answers:\t{}\n\
         Success rate:\t\t\t{rate}\n\
         {RULE}\n\n",
        stats.guesses(),
        stats.correct(),
        stats.errors(),
    )
}

/// Confirmation after the missed-phrase file was written.
#[must_use]
pub fn missed_written(count: usize, path: &Path) -> String {
    if count == 1 {
        format!(
            "One incorrectly guessed phrase has been written to file \"{}\"!\n\n",
            path.display()
        )
    } else {
        format!(
            "{count} incorrectly guessed phrases have been written to file \"{}\"!\n\n",
            path.display()
        )
    }
}

//
// ─── REPORTER ──────────────────────────────────────────────────────────────────
//

/// Writes session messages to a console and owns the missed-phrase log.
pub struct ResultReporter {
    missed: MissedPhraseLog,
}

impl ResultReporter {
    #[must_use]
    pub fn new(missed: MissedPhraseLog) -> Self {
        Self { missed }
    }

    /// Re-arm the missed-phrase log at the start of a session.
    pub fn begin_session(&mut self) {
        self.missed.reset();
    }

    /// # Errors
    ///
    /// Returns `SessionError::Io` if the console write fails.
    pub fn start_banner<C: Console + ?Sized>(
        &self,
        console: &mut C,
        loaded: usize,
    ) -> Result<(), SessionError> {
        console.write(&start_banner(loaded))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::Io` if the console write fails.
    pub fn status<C: Console + ?Sized>(
        &self,
        console: &mut C,
        stats: &SessionStats,
        target: usize,
    ) -> Result<(), SessionError> {
        if let Some(text) = status(stats, target) {
            console.write(&text)?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::Io` if the console write fails.
    pub fn question<C: Console + ?Sized>(
        &self,
        console: &mut C,
        question: &str,
    ) -> Result<(), SessionError> {
        console.write(&format!("Translate the following phrase:\n{question}\n"))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::Io` if the console write fails.
    pub fn verdict<C: Console + ?Sized>(
        &self,
        console: &mut C,
        check: &GuessCheck,
    ) -> Result<(), SessionError> {
        if check.is_correct() {
            console.write("Correct answer!\n\n")?;
        } else {
            console.write(&format!(
                "Wrong answer!\nYour guess:\t{}\nCorrect answer:\t{}\n\n",
                check.guess, check.expected
            ))?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::Io` if the console write fails.
    pub fn mismatches<C: Console + ?Sized>(
        &self,
        console: &mut C,
        mismatches: &[CharMismatch],
    ) -> Result<(), SessionError> {
        for mismatch in mismatches {
            console.write(&format!("{mismatch}\n\n"))?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::Io` if the console write fails.
    pub fn results<C: Console + ?Sized>(
        &self,
        console: &mut C,
        stats: &SessionStats,
    ) -> Result<(), SessionError> {
        console.write(&results(stats))?;
        Ok(())
    }

    /// Dump `phrases` to the missed-phrase file if this direction has not
    /// written one yet, and announce it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the file cannot be written.
    pub fn missed_phrases<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        phrases: &[Phrase],
    ) -> Result<Option<PathBuf>, SessionError> {
        let written = self.missed.record(phrases)?;
        if let Some(path) = &written {
            console.write(&missed_written(phrases.len(), path))?;
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    fn stats(outcomes: &[bool]) -> SessionStats {
        let mut stats = SessionStats::new();
        for &correct in outcomes {
            stats.record(correct);
        }
        stats
    }

    #[test]
    fn status_is_suppressed_before_first_guess() {
        assert!(status(&SessionStats::new(), 4).is_none());
        let text = status(&stats(&[true, false]), 4).unwrap();
        assert!(text.contains("Number of guesses:\t\t2\n"));
        assert!(text.contains("Number of phrases remaining:\t3\n"));
    }

    #[test]
    fn results_show_success_rate() {
        let text = results(&stats(&[true, true, true, true]));
        assert!(text.contains("Total number of guesses:\t4\n"));
        assert!(text.contains("Success rate:\t\t\t100 %\n"));

        let text = results(&stats(&[true, false, false]));
        assert!(text.contains("Success rate:\t\t\t33.3 %\n"));
    }

    #[test]
    fn banner_reports_loaded_count() {
        assert!(start_banner(12).contains("12 phrases have been loaded!"));
    }

    #[test]
    fn missed_message_is_singular_for_one_phrase() {
        let path = Path::new("errors1.txt");
        assert_eq!(
            missed_written(1, path),
            "One incorrectly guessed phrase has been written to file \"errors1.txt\"!\n\n"
        );
        assert!(missed_written(3, path).starts_with("3 incorrectly guessed phrases"));
    }

    #[test]
    fn reporter_writes_missed_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = ResultReporter::new(MissedPhraseLog::new(dir.path()));
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let missed = vec![Phrase::new("a", "1"), Phrase::new("b", "2")];

        let first = reporter.missed_phrases(&mut console, &missed).unwrap();
        let second = reporter.missed_phrases(&mut console, &missed).unwrap();

        assert_eq!(first, Some(dir.path().join("errors1.txt")));
        assert!(second.is_none());
        assert_eq!(console.transcript().matches("have been written").count(), 1);

        reporter.begin_session();
        assert!(reporter.missed_phrases(&mut console, &missed).unwrap().is_some());
    }
}
