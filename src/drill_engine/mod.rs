//! Core drill engine — fact deck, cursor state machine, and grid geometry.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: problems, grid config, rectangles, region sets, card views |
//! | `error`    | `DrillError` for invariant violations |
//! | `deck`     | 81-fact deck generation and Fisher-Yates shuffle |
//! | `cursor`   | Question/answer toggle and position with wraparound |
//! | `geometry` | Problem → 9×9 cell flags, outlines, and label placement |
//! | `session`  | Deck + cursor + RNG owned by the event loop; `init` / `on_advance` / `view` |

pub mod cursor;
pub mod deck;
pub mod error;
pub mod geometry;
pub mod models;
pub mod session;

pub use cursor::{CursorStep, ViewState};
pub use deck::{generate, Deck, DECK_LEN};
pub use error::{DrillError, Result};
pub use geometry::map_to_regions;
pub use models::{
    AnswerLabel, BlockBounds, CardView, CellState, GridConfig, GridRegionSet, Problem, Rect,
    GRID_SIZE,
};
pub use session::{DrillSession, SessionOptions};
