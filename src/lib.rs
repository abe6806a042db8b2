//! # times_grid_drill
//!
//! A flashcard drill for the 81 single-digit multiplication facts (1×1 through
//! 9×9), shown as array pictures on a fixed 9×9 grid.
//!
//! ## How it works
//!
//! 1. [`DrillSession::init`] generates the full fact table, shuffles it with
//!    Fisher-Yates, and stands on the first card's question view.
//! 2. The question view is a [`GridRegionSet`]: the bottom `multiplicand` rows
//!    and leftmost `multiplier` columns are highlighted, with the answer label
//!    in the block's top-right cell and two outline rectangles in abstract units.
//! 3. Every user commit calls [`DrillSession::on_advance`]: the first reveals
//!    the equation (`"5×7=35"`), the second moves to the next card. After the
//!    last card the deck is reshuffled and the cursor rewinds to zero.
//!
//! The core never draws anything. [`text_render`] turns a [`CardView`] into
//! terminal lines and [`json_adapter`] into a JSON document.
//!
//! ## Key features
//!
//! - **Deterministic**: `SessionOptions { rng_seed: Some(u64), .. }` reproduces
//!   the exact sequence of deck orders.
//! - **Configurable units**: [`GridConfig`] sets the cell size `U` and padding
//!   `P` used for the outline rectangles (defaults 60 and 20).
//!
//! ## Quick start
//!
//! ```rust
//! use times_grid_drill::{CardView, DrillSession, SessionOptions};
//!
//! let mut session = DrillSession::init(SessionOptions::seeded(42));
//!
//! if let CardView::Question(regions) = session.view().unwrap() {
//!     println!("{} highlighted cells", regions.highlighted_count());
//! }
//!
//! session.on_advance();
//! if let CardView::Answer { equation, .. } = session.view().unwrap() {
//!     println!("{equation}");
//! }
//! ```

pub mod drill_engine;
pub mod json_adapter;
pub mod text_render;

// Convenience re-exports so callers can use `times_grid_drill::DrillSession`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    generate, map_to_regions, AnswerLabel, BlockBounds, CardView, CellState, CursorStep, Deck,
    DrillError, DrillSession, GridConfig, GridRegionSet, Problem, Rect, SessionOptions,
    ViewState, DECK_LEN, GRID_SIZE,
};
pub use json_adapter::to_json;

#[cfg(test)]
mod tests;
