use std::fmt;

use drill_core::{Direction, Phrase};

/// Outcome of comparing one guess with the expected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessCheck {
    pub guess: String,
    pub expected: String,
}

impl GuessCheck {
    /// Compare `raw_guess` (trailing whitespace ignored) with the answer side
    /// of `phrase`.
    #[must_use]
    pub fn new(raw_guess: &str, phrase: &Phrase, direction: Direction) -> Self {
        Self {
            guess: raw_guess.trim_end().to_owned(),
            expected: phrase.answer(direction).to_owned(),
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.guess == self.expected
    }

    /// Per-character differences up to the shorter length.
    #[must_use]
    pub fn mismatches(&self) -> Vec<CharMismatch> {
        diff_chars(&self.guess, &self.expected)
    }
}

/// One differing character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharMismatch {
    pub index: usize,
    pub guessed: char,
    pub expected: char,
}

/// Compare `guess` and `expected` character by character, stopping at the end
/// of the shorter string.
#[must_use]
pub fn diff_chars(guess: &str, expected: &str) -> Vec<CharMismatch> {
    guess
        .chars()
        .zip(expected.chars())
        .enumerate()
        .filter(|(_, (g, e))| g != e)
        .map(|(index, (guessed, expected))| CharMismatch {
            index,
            guessed,
            expected,
        })
        .collect()
}

fn render_char(c: char, capitalized: bool) -> String {
    match (c, capitalized) {
        (' ', true) => "Blank line".to_owned(),
        (' ', false) => "blank line".to_owned(),
        _ => format!("\"{c}\""),
    }
}

impl fmt::Display for CharMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at index {} should be replaced with {}",
            render_char(self.guessed, true),
            self.index,
            render_char(self.expected, false)
        )
    }
}
