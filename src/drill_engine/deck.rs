use rand::Rng;
use crate::drill_engine::{
    error::{DrillError, Result},
    models::{Problem, GRID_SIZE},
};

/// Number of facts in a full deck (9 × 9).
pub const DECK_LEN: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// All 81 facts in row-major order: multiplicand ascending, then multiplier.
pub fn generate() -> Vec<Problem> {
    (1..=GRID_SIZE)
        .flat_map(|m| (1..=GRID_SIZE).map(move |n| Problem::new(m, n)))
        .collect()
}

/// Fisher-Yates shuffle. `j` is drawn uniformly from the integer range `[0, i]`.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// The ordered set of facts being drilled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    problems: Vec<Problem>,
}

impl Deck {
    /// Build the full fact table and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck { problems: generate() };
        deck.shuffle(rng);
        deck
    }

    /// Wrap an explicit problem list, keeping its order.
    pub fn from_problems(problems: Vec<Problem>) -> Result<Self> {
        if problems.is_empty() {
            log::error!("refusing to build a deck with no problems");
            return Err(DrillError::EmptyDeck);
        }
        if let Some(bad) = problems.iter().find(|p| p.validate().is_err()) {
            log::error!("refusing to build a deck containing {:?}", bad);
            return Err(DrillError::InvalidProblem {
                multiplicand: bad.multiplicand,
                multiplier: bad.multiplier,
            });
        }
        Ok(Deck { problems })
    }

    /// Reorder the whole deck in place; the set of problems is unchanged.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle_in_place(&mut self.problems, rng);
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Problem at `index`; `None` past the end.
    pub fn get(&self, index: usize) -> Option<Problem> {
        self.problems.get(index).copied()
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }
}
