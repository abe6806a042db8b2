use std::fmt;
use serde::{Deserialize, Serialize};

use crate::drill_engine::error::{DrillError, Result};

/// Side length of the fact table and of the visual grid.
pub const GRID_SIZE: u8 = 9;

// ---------------------------------------------------------------------------
// Problem
// ---------------------------------------------------------------------------

/// One multiplication fact: `multiplicand × multiplier = answer`.
///
/// The multiplicand is drawn as the number of rows of the block, the
/// multiplier as the number of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Problem {
    pub multiplicand: u8,
    pub multiplier: u8,
    pub answer: u8,
}

impl Problem {
    /// Build a fact and compute its product. Callers are expected to stay in
    /// `1..=9`; [`Problem::validate`] enforces it.
    pub const fn new(multiplicand: u8, multiplier: u8) -> Self {
        Problem {
            multiplicand,
            multiplier,
            answer: multiplicand.wrapping_mul(multiplier),
        }
    }

    /// Check both factors are in `1..=9` and the stored answer is their product.
    pub fn validate(&self) -> Result<()> {
        let in_range = |v: u8| (1..=GRID_SIZE).contains(&v);
        let consistent = u16::from(self.multiplicand) * u16::from(self.multiplier)
            == u16::from(self.answer);
        if in_range(self.multiplicand) && in_range(self.multiplier) && consistent {
            Ok(())
        } else {
            Err(DrillError::InvalidProblem {
                multiplicand: self.multiplicand,
                multiplier: self.multiplier,
            })
        }
    }

    /// The answer-view text, e.g. `"5×7=35"`.
    pub fn equation(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}={}", self.multiplicand, self.multiplier, self.answer)
    }
}

// ---------------------------------------------------------------------------
// Geometry configuration
// ---------------------------------------------------------------------------

/// Abstract length units used for the outline rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// `U`: side length of one grid cell.
    pub cell_size: u32,
    /// `P`: container padding in front of the grid on both axes.
    pub padding: u32,
}

impl GridConfig {
    /// Check the far edge of the grid, `P + 9U`, fits in `u32` and `U` is positive.
    /// Every outline coordinate is bounded by that edge.
    pub fn validate(&self) -> Result<()> {
        let far_edge = u32::from(GRID_SIZE)
            .checked_mul(self.cell_size)
            .and_then(|side| side.checked_add(self.padding));
        match far_edge {
            Some(_) if self.cell_size > 0 => Ok(()),
            _ => Err(DrillError::InvalidGridConfig {
                cell_size: self.cell_size,
                padding: self.padding,
            }),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            cell_size: 60,
            padding: 20,
        }
    }
}

/// Axis-aligned rectangle, top-left anchored, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Rectangles from a validated [`GridConfig`] never overflow here.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

// ---------------------------------------------------------------------------
// Grid region set
// ---------------------------------------------------------------------------

/// Flags for one cell of the 9×9 grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CellState {
    pub highlighted: bool,
    /// Vertical separator on the cell's right edge, only strictly inside the block.
    pub inner_line: bool,
    pub has_label: bool,
}

/// Row/column span of the highlighted block. `end_row` and `end_col` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockBounds {
    pub start_row: usize,
    pub end_row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl BlockBounds {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.start_row && row < self.end_row && col >= self.start_col && col < self.end_col
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerLabel {
    pub row: usize,
    pub col: usize,
    pub text: String,
}

/// Everything a presentation surface needs to draw one question card.
/// Row 0 is the top row; the block is anchored to the bottom-left corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRegionSet {
    pub problem: Problem,
    pub bounds: BlockBounds,
    pub cells: [[CellState; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub grid_outline: Rect,
    pub block_outline: Rect,
    pub label: AnswerLabel,
}

impl GridRegionSet {
    pub fn cell(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    pub fn highlighted_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.highlighted)
            .count()
    }
}

// ---------------------------------------------------------------------------
// Card views
// ---------------------------------------------------------------------------

/// What the presentation layer should show for the current card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardView {
    Question(GridRegionSet),
    Answer { problem: Problem, equation: String },
}

impl CardView {
    pub fn problem(&self) -> Problem {
        match self {
            CardView::Question(regions) => regions.problem,
            CardView::Answer { problem, .. } => *problem,
        }
    }

    pub fn is_answer(&self) -> bool {
        matches!(self, CardView::Answer { .. })
    }
}
