/// Guess counters for one round.
///
/// `errors` never exceeds `guesses`; every recorded guess is either correct
/// or an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    guesses: usize,
    errors: usize,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, correct: bool) {
        self.guesses += 1;
        if !correct {
            self.errors += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn guesses(&self) -> usize {
        self.guesses
    }

    #[must_use]
    pub fn errors(&self) -> usize {
        self.errors
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.guesses - self.errors
    }

    /// Percentage of correct guesses, or `None` before the first guess.
    #[must_use]
    pub fn precision(&self) -> Option<f64> {
        if self.guesses == 0 {
            return None;
        }
        Some(self.correct() as f64 * 100.0 / self.guesses as f64)
    }
}

/// Render a precision as `80 %` when integral, else `33.3 %`.
#[must_use]
pub fn format_precision(precision: f64) -> String {
    if precision.fract() == 0.0 {
        format!("{} %", precision as u64)
    } else {
        format!("{precision:.1} %")
    }
}
