//! Plain-text picture of a card, one `String` per terminal line.
//!
//! Each grid cell is three columns wide with a one-column separator. Inner
//! block lines are drawn as `│`, the block's right edge as `┃`.

use crate::drill_engine::models::{CardView, GridRegionSet, GRID_SIZE};

const N: usize = GRID_SIZE as usize;
const CELL_WIDTH: usize = 3;
const FILL: &str = "▒▒▒";
const EMPTY: &str = " · ";

/// Width in characters of every line produced by [`question_lines`].
pub const CARD_WIDTH: usize = N * CELL_WIDTH + (N - 1) + 2;

pub fn question_lines(r: &GridRegionSet) -> Vec<String> {
    let inner = CARD_WIDTH - 2;
    let mut lines = Vec::with_capacity(N + 2);
    lines.push(format!("┌{}┐", "─".repeat(inner)));

    for row in 0..N {
        let mut line = String::from("│");
        for col in 0..N {
            let cell = r.cell(row, col);
            if cell.has_label {
                line.push_str(&format!("{:>width$}", r.label.text, width = CELL_WIDTH));
            } else if cell.highlighted {
                line.push_str(FILL);
            } else {
                line.push_str(EMPTY);
            }
            if col + 1 == N {
                continue;
            }
            line.push(if cell.inner_line {
                '│'
            } else if cell.highlighted {
                '┃'
            } else {
                ' '
            });
        }
        line.push('│');
        lines.push(line);
    }

    lines.push(format!("└{}┘", "─".repeat(inner)));
    lines
}

pub fn answer_lines(equation: &str) -> Vec<String> {
    let blank = " ".repeat(CARD_WIDTH);
    vec![
        blank.clone(),
        format!("{:^width$}", equation, width = CARD_WIDTH),
        blank,
    ]
}

pub fn card_lines(view: &CardView) -> Vec<String> {
    match view {
        CardView::Question(regions) => question_lines(regions),
        CardView::Answer { equation, .. } => answer_lines(equation),
    }
}

/// Footer with 1-based card number and the key hint for the current view.
pub fn status_line(position: usize, deck_len: usize, revealed: bool) -> String {
    let action = if revealed { "next card" } else { "show answer" };
    format!("card {}/{}  ·  space/enter/click: {}  ·  q: quit", position + 1, deck_len, action)
}
