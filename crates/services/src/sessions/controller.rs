use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use drill_core::{Clock, Direction, PhraseSource};

use super::plan::SessionPlanner;
use super::report::ResultReporter;
use super::round::{RoundRunner, RoundSummary};
use crate::console::{Console, ask_yes_no};
use crate::error::SessionError;

/// Rounds played in one session, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub rounds: Vec<RoundSummary>,
}

/// Top-level quiz orchestration over a phrase source.
///
/// Plans the session, runs a round in the requested direction and offers a
/// replay in the opposite direction over the same planned phrases.
pub struct SessionController<S, R = StdRng> {
    source: S,
    rng: R,
    reporter: ResultReporter,
}

impl<S: PhraseSource> SessionController<S, StdRng> {
    /// Controller with a generator seeded once from `clock`.
    #[must_use]
    pub fn new(source: S, clock: Clock, reporter: ResultReporter) -> Self {
        Self::with_rng(source, StdRng::seed_from_u64(clock.seed()), reporter)
    }
}

impl<S: PhraseSource, R: Rng> SessionController<S, R> {
    #[must_use]
    pub fn with_rng(source: S, rng: R, reporter: ResultReporter) -> Self {
        Self {
            source,
            rng,
            reporter,
        }
    }

    /// Play a session starting in `direction`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the source holds no phrases; nothing
    /// is printed or written in that case. At most one missed-phrase file is
    /// written per call, covering the forward round and any reverse replay. Propagates console and storage
    /// failures, including `SessionError::InputClosed`.
    pub fn play<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        direction: Direction,
    ) -> Result<SessionReport, SessionError> {
        if self.source.is_empty() {
            warn!("session requested on an empty phrase collection");
            return Err(SessionError::Empty);
        }

        self.reporter.begin_session();

        let plan = SessionPlanner::for_source(&self.source).plan(&mut self.rng);
        let target = plan.total();
        let backup = plan.phrases.clone();
        info!(target, available = plan.available, "session planned");

        self.reporter.start_banner(console, target)?;

        let mut rounds = Vec::with_capacity(2);
        rounds.push(self.run_round(console, direction, plan.phrases, target)?);

        if ask_yes_no(console, "Do you wanna play the game in reverse?")? {
            rounds.push(self.run_round(console, direction.flipped(), backup, target)?);
        }

        Ok(SessionReport { rounds })
    }

    fn run_round<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        direction: Direction,
        phrases: Vec<drill_core::Phrase>,
        target: usize,
    ) -> Result<RoundSummary, SessionError> {
        let summary = RoundRunner::new(console, &mut self.rng, &mut self.reporter, direction, target)
            .run(phrases)?;
        info!(
            ?direction,
            guesses = summary.stats.guesses(),
            errors = summary.stats.errors(),
            passes = summary.passes,
            "round finished"
        );
        Ok(summary)
    }
}
