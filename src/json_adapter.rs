use serde_json::{json, Value};
use crate::drill_engine::models::{CardView, CellState, GridRegionSet, Problem};

/// Build the `problem` block shared by both views.
fn problem_json(p: &Problem) -> Value {
    json!({
        "multiplicand": p.multiplicand,
        "multiplier": p.multiplier,
        "answer": p.answer
    })
}

/// One cell entry of the 9×9 `cells` array.
fn cell_json(c: &CellState) -> Value {
    json!({
        "highlighted": c.highlighted,
        "inner_line": c.inner_line,
        "has_label": c.has_label
    })
}

fn question_json(r: &GridRegionSet) -> Value {
    let cells: Vec<Value> = r
        .cells
        .iter()
        .map(|row| Value::Array(row.iter().map(cell_json).collect()))
        .collect();

    json!({
        "view": "question",
        "problem": problem_json(&r.problem),
        "bounds": r.bounds,
        "grid_outline": r.grid_outline,
        "block_outline": r.block_outline,
        "label": r.label,
        "cells": cells
    })
}

/// Convert a card view to the JSON document handed to non-terminal surfaces.
///
/// `position` is the 0-based index of the card in the deck; the document
/// carries it 1-based as `card` alongside `of`.
pub fn to_json(view: &CardView, position: usize, deck_len: usize) -> Value {
    let mut doc = match view {
        CardView::Question(regions) => question_json(regions),
        CardView::Answer { problem, equation } => json!({
            "view": "answer",
            "problem": problem_json(problem),
            "equation": equation
        }),
    };
    doc["card"] = json!(position + 1);
    doc["of"] = json!(deck_len);
    doc
}
