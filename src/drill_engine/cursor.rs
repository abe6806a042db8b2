//! Position + reveal flag over a deck of fixed length.
//!
//! The cursor alternates between `Question` and `Answer`. Advancing from
//! `Answer` moves to the next problem; stepping past the last one rewinds to
//! zero and reports [`CursorStep::Wrapped`] so the owner can reshuffle.

use std::num::NonZeroUsize;
use serde::Serialize;

use crate::drill_engine::error::{DrillError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    Question,
    Answer,
}

/// Result of one advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStep {
    /// Question → Answer, position unchanged.
    Revealed,
    /// Answer → Question on the next problem.
    Advanced,
    /// Answer → Question at position 0 after the last problem.
    Wrapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    revealed: bool,
    len: NonZeroUsize,
}

impl Cursor {
    /// Start at `{0, Question}` over a deck of `deck_len` problems.
    pub fn new(deck_len: usize) -> Result<Self> {
        let len = NonZeroUsize::new(deck_len).ok_or_else(|| {
            log::error!("cursor requested over an empty deck");
            DrillError::EmptyDeck
        })?;
        Ok(Cursor { position: 0, revealed: false, len })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn state(&self) -> ViewState {
        if self.revealed { ViewState::Answer } else { ViewState::Question }
    }

    pub fn deck_len(&self) -> usize {
        self.len.get()
    }

    /// Apply one advance signal: reveal the answer, or step to the next
    /// question, rewinding to 0 after the last one.
    pub fn advance(&mut self) -> CursorStep {
        if !self.revealed {
            self.revealed = true;
            return CursorStep::Revealed;
        }

        self.revealed = false;
        self.position += 1;
        if self.position == self.len.get() {
            self.position = 0;
            CursorStep::Wrapped
        } else {
            CursorStep::Advanced
        }
    }
}
