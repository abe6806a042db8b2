//! Maps a [`Problem`] onto the fixed 9×9 array picture.
//!
//! The block covers the bottom `multiplicand` rows and the leftmost
//! `multiplier` columns. Storage rows run top to bottom, so the block starts at
//! row `9 - multiplicand`. Inner vertical lines are drawn on every highlighted
//! cell except the block's rightmost column, and the answer label sits in the
//! block's top-right cell.

use crate::drill_engine::{
    error::Result,
    models::{
        AnswerLabel, BlockBounds, CellState, GridConfig, GridRegionSet, Problem, Rect, GRID_SIZE,
    },
};

const N: usize = GRID_SIZE as usize;

/// Row/column span of the block for a validated problem.
pub fn block_bounds(problem: &Problem) -> BlockBounds {
    BlockBounds {
        start_row: N - usize::from(problem.multiplicand),
        end_row: N,
        start_col: 0,
        end_col: usize::from(problem.multiplier),
    }
}

/// Outline of the whole grid: `(P, P)` to `(P + 9U, P + 9U)`. `config` must be validated.
fn grid_outline(config: &GridConfig) -> Rect {
    let side = GRID_SIZE as u32 * config.cell_size;
    Rect {
        x: config.padding,
        y: config.padding,
        width: side,
        height: side,
    }
}

/// Outline of the highlighted block in the same units as [`grid_outline`].
fn block_outline(problem: &Problem, bounds: &BlockBounds, config: &GridConfig) -> Rect {
    let u = config.cell_size;
    Rect {
        x: config.padding + bounds.start_col as u32 * u,
        y: config.padding + bounds.start_row as u32 * u,
        width: u32::from(problem.multiplier) * u,
        height: u32::from(problem.multiplicand) * u,
    }
}

/// Describe one question card: cell flags, answer label, and both outlines.
///
/// Fails with `InvalidProblem` for factors outside `1..=9` and with
/// `InvalidGridConfig` when `P + 9U` does not fit in `u32`; nothing is
/// produced in either case.
pub fn map_to_regions(problem: &Problem, config: &GridConfig) -> Result<GridRegionSet> {
    if let Err(e) = problem.validate() {
        log::error!("cannot map {:?} onto the grid: {}", problem, e);
        return Err(e);
    }
    if let Err(e) = config.validate() {
        log::error!("cannot lay out the grid with {:?}: {}", config, e);
        return Err(e);
    }

    let bounds = block_bounds(problem);
    // Both factors are >= 1, so the block is never empty and the label cell exists.
    let label_row = bounds.start_row;
    let label_col = bounds.end_col - 1;

    let mut cells = [[CellState::default(); N]; N];
    for (row, cells_row) in cells.iter_mut().enumerate() {
        for (col, cell) in cells_row.iter_mut().enumerate() {
            if bounds.contains(row, col) {
                *cell = CellState {
                    highlighted: true,
                    inner_line: col < bounds.end_col - 1,
                    has_label: row == label_row && col == label_col,
                };
            }
        }
    }

    Ok(GridRegionSet {
        problem: *problem,
        bounds,
        cells,
        grid_outline: grid_outline(config),
        block_outline: block_outline(problem, &bounds, config),
        label: AnswerLabel {
            row: label_row,
            col: label_col,
            text: problem.answer.to_string(),
        },
    })
}
