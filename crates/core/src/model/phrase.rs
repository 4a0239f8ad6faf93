use std::fmt;

//
// ─── DIRECTION ─────────────────────────────────────────────────────────────────
//

/// Which side of a phrase is shown as the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Show the primary side, expect the target side.
    #[default]
    Forward,
    /// Show the target side, expect the primary side.
    Reverse,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

//
// ─── PHRASE ────────────────────────────────────────────────────────────────────
//

/// A vocabulary item: the same phrase in the primary and the target language.
///
/// Equality is exact and field-wise; two phrases are duplicates only when both
/// sides match byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phrase {
    primary: String,
    target: String,
}

impl Phrase {
    #[must_use]
    pub fn new(primary: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            target: target.into(),
        }
    }

    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The side presented to the user in the given direction.
    #[must_use]
    pub fn question(&self, direction: Direction) -> &str {
        match direction {
            Direction::Forward => &self.primary,
            Direction::Reverse => &self.target,
        }
    }

    /// The expected answer in the given direction, with any parenthetical
    /// annotation removed.
    ///
    /// ```
    /// # use drill_core::{Direction, Phrase};
    /// let phrase = Phrase::new("apple", "Apfel (der)");
    /// assert_eq!(phrase.answer(Direction::Forward), "Apfel");
    /// ```
    #[must_use]
    pub fn answer(&self, direction: Direction) -> &str {
        let raw = match direction {
            Direction::Forward => &self.target,
            Direction::Reverse => &self.primary,
        };
        strip_annotation(raw)
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.primary, self.target)
    }
}

/// Cut `text` at the first `(` and trim trailing whitespace.
///
/// Text without an opening parenthesis only has its trailing whitespace
/// trimmed.
#[must_use]
pub fn strip_annotation(text: &str) -> &str {
    let head = match text.find('(') {
        Some(idx) => &text[..idx],
        None => text,
    };
    head.trim_end()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
