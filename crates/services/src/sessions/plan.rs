use rand::Rng;

use drill_core::{Phrase, PhraseSource};

/// Working phrase sequence for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub phrases: Vec<Phrase>,
    pub available: usize,
}

impl SessionPlan {
    /// Number of phrases selected for this session; also the round target.
    #[must_use]
    pub fn total(&self) -> usize {
        self.phrases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// Picks and orders the phrases used in a session.
pub struct SessionPlanner<'a> {
    phrases: &'a [Phrase],
    size: usize,
}

impl<'a> SessionPlanner<'a> {
    /// Planner selecting `size` phrases; a size above the collection length
    /// selects everything.
    #[must_use]
    pub fn new(phrases: &'a [Phrase], size: usize) -> Self {
        Self {
            phrases,
            size: size.min(phrases.len()),
        }
    }

    /// Planner over a source's phrases at its resolved session size.
    #[must_use]
    pub fn for_source<S: PhraseSource + ?Sized>(source: &'a S) -> Self {
        Self::new(source.phrases(), source.session_size())
    }

    /// Build the working sequence.
    ///
    /// Each of the first `size` positions is swapped with a position drawn
    /// uniformly from the whole collection, then the sequence is cut to
    /// `size`. Partners are not restricted to the
    /// unfixed tail, so the pick is not a uniform sample.
    pub fn plan<R: Rng + ?Sized>(&self, rng: &mut R) -> SessionPlan {
        let mut working = self.phrases.to_vec();
        let len = working.len();
        let size = self.size;

        for i in 0..size {
            let r = rng.random_range(0..len);
            working.swap(i, r);
        }
        working.truncate(size);

        SessionPlan {
            phrases: working,
            available: len,
        }
    }
}
