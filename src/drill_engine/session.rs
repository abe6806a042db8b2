use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::drill_engine::{
    cursor::{Cursor, CursorStep, ViewState},
    deck::Deck,
    error::{DrillError, Result},
    geometry::map_to_regions,
    models::{CardView, GridConfig, Problem},
};

/// Inputs for [`DrillSession::init`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// `Some` reproduces the same sequence of deck orders; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
    pub grid: GridConfig,
}

impl SessionOptions {
    pub fn seeded(seed: u64) -> Self {
        SessionOptions { rng_seed: Some(seed), ..Self::default() }
    }
}

/// Deck + cursor owned by the event loop. All state changes go through
/// [`DrillSession::on_advance`].
#[derive(Debug, Clone)]
pub struct DrillSession<R = StdRng> {
    deck: Deck,
    cursor: Cursor,
    grid: GridConfig,
    rng: R,
}

impl DrillSession<StdRng> {
    /// Generate and shuffle a fresh deck and stand on its first question.
    pub fn init(options: SessionOptions) -> Self {
        let rng = match options.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session = Self::with_rng(rng, options.grid);
        log::info!(
            "drill session started: {} cards, seed {:?}",
            session.deck.len(),
            options.rng_seed
        );
        session
    }
}

impl<R: Rng> DrillSession<R> {
    pub fn with_rng(mut rng: R, grid: GridConfig) -> Self {
        let deck = Deck::new_shuffled(&mut rng);
        // A generated deck always holds 81 valid facts.
        let cursor = match Cursor::new(deck.len()) {
            Ok(c) => c,
            Err(e) => unreachable!("generated deck is never empty: {e}"),
        };
        DrillSession { deck, cursor, grid, rng }
    }

    /// Use an explicit deck instead of the generated one. Order is kept until
    /// the first wraparound.
    pub fn from_deck(deck: Deck, rng: R, grid: GridConfig) -> Result<Self> {
        let cursor = Cursor::new(deck.len())?;
        Ok(DrillSession { deck, cursor, grid, rng })
    }

    /// The single input entry point: reveal the answer, or move on to the next
    /// question (reshuffling after the last card).
    pub fn on_advance(&mut self) -> CursorStep {
        let step = self.cursor.advance();
        match step {
            CursorStep::Revealed => {
                log::debug!("reveal card {} ({})", self.cursor.position(), self.current());
            }
            CursorStep::Advanced => {
                log::debug!("next card {}", self.cursor.position());
            }
            CursorStep::Wrapped => {
                self.deck.shuffle(&mut self.rng);
                log::info!("deck exhausted, reshuffled {} cards", self.deck.len());
            }
        }
        step
    }

    pub fn current(&self) -> Problem {
        // position < deck length is kept by Cursor.
        self.deck.problems()[self.cursor.position()]
    }

    /// Build what the presentation layer should draw right now.
    pub fn view(&self) -> Result<CardView> {
        let problem = self.deck.get(self.cursor.position()).ok_or(DrillError::EmptyDeck)?;
        match self.cursor.state() {
            ViewState::Question => Ok(CardView::Question(map_to_regions(&problem, &self.grid)?)),
            ViewState::Answer => Ok(CardView::Answer { problem, equation: problem.equation() }),
        }
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn state(&self) -> ViewState {
        self.cursor.state()
    }

    pub fn is_revealed(&self) -> bool {
        self.cursor.is_revealed()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }
}
