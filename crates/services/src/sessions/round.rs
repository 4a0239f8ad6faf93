use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use drill_core::{Direction, Phrase};

use super::answer::GuessCheck;
use super::progress::SessionStats;
use super::report::ResultReporter;
use crate::console::{Console, ask_yes_no};
use crate::error::SessionError;

/// Statistics of a finished round, captured before the counters reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub direction: Direction,
    pub stats: SessionStats,
    pub passes: usize,
}

/// Mutable state for one round.
#[derive(Debug, Clone, Default)]
struct SessionState {
    stats: SessionStats,
    direction: Direction,
    order: Vec<usize>,
}

impl SessionState {
    fn shuffle_order<R: Rng + ?Sized>(&mut self, len: usize, rng: &mut R) {
        self.order.clear();
        self.order.extend(0..len);
        self.order.shuffle(rng);
    }
}

/// Drives one round: repeated passes over the phrases still missed until the
/// target number of correct answers is reached.
pub struct RoundRunner<'a, C: Console + ?Sized, R: Rng + ?Sized> {
    console: &'a mut C,
    rng: &'a mut R,
    reporter: &'a mut ResultReporter,
    state: SessionState,
    target: usize,
}

impl<'a, C: Console + ?Sized, R: Rng + ?Sized> RoundRunner<'a, C, R> {
    /// `target` is the number of correct answers that ends the round,
    /// normally the planned session size.
    pub fn new(
        console: &'a mut C,
        rng: &'a mut R,
        reporter: &'a mut ResultReporter,
        direction: Direction,
        target: usize,
    ) -> Self {
        Self {
            console,
            rng,
            reporter,
            state: SessionState {
                direction,
                ..SessionState::default()
            },
            target,
        }
    }

    /// Run the round over `phrases`, print the final statistics and reset
    /// the counters.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InputClosed` if input ends mid-round, or I/O and
    /// storage errors from the console and missed-phrase log.
    pub fn run(mut self, phrases: Vec<Phrase>) -> Result<RoundSummary, SessionError> {
        let mut working = phrases;
        let mut passes = 0;

        while !working.is_empty() && self.state.stats.correct() < self.target {
            passes += 1;
            debug!(pass = passes, phrases = working.len(), "starting pass");
            working = self.run_pass(&working)?;
        }

        self.reporter.results(self.console, &self.state.stats)?;
        let summary = RoundSummary {
            direction: self.state.direction,
            stats: self.state.stats,
            passes,
        };
        self.state.stats.reset();
        Ok(summary)
    }

    /// Visit every phrase once in a fresh random order and return the ones
    /// answered incorrectly.
    fn run_pass(&mut self, phrases: &[Phrase]) -> Result<Vec<Phrase>, SessionError> {
        let mut incorrect = Vec::new();
        self.state.shuffle_order(phrases.len(), self.rng);
        let order = std::mem::take(&mut self.state.order);

        for &idx in &order {
            self.reporter
                .status(self.console, &self.state.stats, self.target)?;
            let phrase = &phrases[idx];
            if !self.ask(phrase)? {
                incorrect.push(phrase.clone());
            }
            if self.state.stats.correct() >= self.target {
                return Ok(Vec::new());
            }
        }

        self.reporter.missed_phrases(self.console, &incorrect)?;
        Ok(incorrect)
    }

    /// Present one phrase, read the guess and check it.
    fn ask(&mut self, phrase: &Phrase) -> Result<bool, SessionError> {
        let direction = self.state.direction;
        self.reporter
            .question(self.console, phrase.question(direction))?;

        let line = self
            .console
            .read_line()?
            .ok_or(SessionError::InputClosed)?;
        let check = GuessCheck::new(&line, phrase, direction);
        self.reporter.verdict(self.console, &check)?;

        let correct = check.is_correct();
        if !correct && ask_yes_no(self.console, "Analyze error?")? {
            self.reporter.mismatches(self.console, &check.mismatches())?;
        }
        self.state.stats.record(correct);
        Ok(correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use storage::{FileRepository, MissedPhraseLog, PhraseRepository};

    fn phrases() -> Vec<Phrase> {
        vec![
            Phrase::new("one", "eins"),
            Phrase::new("two", "zwei"),
            Phrase::new("three", "drei"),
        ]
    }

    /// Answers correctly from the phrase table; declines error analysis.
    fn answering(table: Vec<Phrase>, wrong_once: Option<&'static str>) -> ScriptedConsole {
        let mut missed = wrong_once;
        ScriptedConsole::with_responder(move |fresh| {
            if fresh.ends_with("Y/n\n") {
                return Some("n".to_owned());
            }
            let question = fresh.lines().last()?;
            let phrase = table.iter().find(|p| p.primary() == question)?;
            if missed == Some(question) {
                missed = None;
                return Some("wrong".to_owned());
            }
            Some(phrase.target().to_owned())
        })
    }

    #[test]
    fn all_correct_round_takes_one_pass() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = ResultReporter::new(MissedPhraseLog::new(dir.path()));
        let mut console = answering(phrases(), None);
        let mut rng = StdRng::seed_from_u64(5);

        let summary = RoundRunner::new(&mut console, &mut rng, &mut reporter, Direction::Forward, 3)
            .run(phrases())
            .unwrap();

        assert_eq!(summary.stats.guesses(), 3);
        assert_eq!(summary.stats.errors(), 0);
        assert_eq!(summary.passes, 1);
        assert!(!dir.path().join("errors1.txt").exists());
    }

    #[test]
    fn missed_phrase_is_repeated_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = ResultReporter::new(MissedPhraseLog::new(dir.path()));
        let mut console = answering(phrases(), Some("two"));
        let mut rng = StdRng::seed_from_u64(11);

        let summary = RoundRunner::new(&mut console, &mut rng, &mut reporter, Direction::Forward, 3)
            .run(phrases())
            .unwrap();

        assert_eq!(summary.stats.guesses(), 4);
        assert_eq!(summary.stats.errors(), 1);
        assert_eq!(summary.passes, 2);
        assert_eq!(
            console
                .transcript()
                .matches("Translate the following phrase:\ntwo\n")
                .count(),
            2
        );
        let written = FileRepository::new(dir.path().join("errors1.txt"))
            .load_phrases()
            .unwrap();
        assert_eq!(written, vec![Phrase::new("two", "zwei")]);
    }

    #[test]
    fn error_analysis_prints_character_diff() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = ResultReporter::new(MissedPhraseLog::new(dir.path()));
        let mut console = ScriptedConsole::new(["Hund", "y", "Hand"]);
        let mut rng = StdRng::seed_from_u64(0);

        let summary = RoundRunner::new(&mut console, &mut rng, &mut reporter, Direction::Forward, 1)
            .run(vec![Phrase::new("dog", "Hand (sic)")])
            .unwrap();

        assert_eq!(summary.stats.guesses(), 2);
        let transcript = console.transcript();
        assert!(transcript.contains("Your guess:\tHund\nCorrect answer:\tHand\n"));
        assert!(transcript.contains("\"u\" at index 1 should be replaced with \"a\""));
        assert!(transcript.contains("Success rate:\t\t\t50 %"));
    }

    #[test]
    fn reverse_round_asks_target_side() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = ResultReporter::new(MissedPhraseLog::new(dir.path()));
        let mut console = ScriptedConsole::new(["one"]);
        let mut rng = StdRng::seed_from_u64(0);

        let summary = RoundRunner::new(&mut console, &mut rng, &mut reporter, Direction::Reverse, 1)
            .run(vec![Phrase::new("one", "eins")])
            .unwrap();

        assert_eq!(summary.direction, Direction::Reverse);
        assert_eq!(summary.stats.errors(), 0);
        assert!(console.transcript().contains("Translate the following phrase:\neins\n"));
    }

    #[test]
    fn closed_input_aborts_round() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = ResultReporter::new(MissedPhraseLog::new(dir.path()));
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let mut rng = StdRng::seed_from_u64(0);

        let err = RoundRunner::new(&mut console, &mut rng, &mut reporter, Direction::Forward, 1)
            .run(vec![Phrase::new("one", "eins")])
            .unwrap_err();
        assert!(matches!(err, SessionError::InputClosed));
    }

    #[test]
    fn status_is_printed_from_second_guess_on() {
        let dir = tempfile::tempdir().unwrap();
        let mut reporter = ResultReporter::new(MissedPhraseLog::new(dir.path()));
        let mut console = answering(phrases(), None);
        let mut rng = StdRng::seed_from_u64(9);

        RoundRunner::new(&mut console, &mut rng, &mut reporter, Direction::Forward, 3)
            .run(phrases())
            .unwrap();

        assert_eq!(console.transcript().matches("Number of guesses:").count(), 2);
    }
}
