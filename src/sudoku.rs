//! The Sudoku frontend: builds a 9×9 binary CSP from a flattened board
//! line and renders assignments as a text grid.
//!
//! Cells are variables `0..81` in row-major order. A given clue restricts
//! the cell's original domain to that single digit; empty cells get all
//! nine digits. Every cell is constrained pairwise against its row, column
//! and 3×3 block under a values-differ predicate.

use std::{collections::HashMap, path::Path, sync::Arc};

use crate::{
    error::{Error, Result},
    solver::csp::{Assignment, Csp, VariableId},
};

pub const GRID_SIDE: usize = 9;
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;
pub const BLOCK_SIDE: usize = 3;
pub const EMPTY_CELL: char = '.';
pub const DIGITS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Builds the Sudoku CSP from an 81-character board line.
///
/// Each character must be a digit `1`–`9` (a given clue) or
/// [`EMPTY_CELL`]. Anything else, or the wrong length, is rejected here so
/// the core can assume a well-formed problem.
pub fn build(board: &str) -> Result<Csp<char>> {
    let cells: Vec<char> = board.chars().collect();
    if cells.len() != GRID_CELLS {
        return Err(Error::InvalidBoard(format!(
            "expected {GRID_CELLS} cells, got {}",
            cells.len()
        )));
    }

    let mut domains: HashMap<VariableId, Vec<char>> = HashMap::new();
    for (idx, &cell) in cells.iter().enumerate() {
        let domain = if cell == EMPTY_CELL {
            DIGITS.to_vec()
        } else if DIGITS.contains(&cell) {
            vec![cell]
        } else {
            return Err(Error::InvalidBoard(format!(
                "cell {idx} holds {cell:?}, expected a digit 1-9 or {EMPTY_CELL:?}"
            )));
        };
        domains.insert(idx as VariableId, domain);
    }

    Ok(Csp::new(
        domains,
        neighbor_map(),
        Arc::new(|_, a: &char, _, b: &char| a != b),
    ))
}

/// Row, column and block neighbors for every cell, deduplicated by the
/// [`Csp`] constructor.
fn neighbor_map() -> HashMap<VariableId, Vec<VariableId>> {
    let mut neighbors: HashMap<VariableId, Vec<VariableId>> = HashMap::new();
    let mut link_unit = |unit: &[usize]| {
        for &cell in unit {
            let entry = neighbors.entry(cell as VariableId).or_default();
            entry.extend(
                unit.iter()
                    .filter(|&&other| other != cell)
                    .map(|&other| other as VariableId),
            );
        }
    };

    for row in 0..GRID_SIDE {
        let cells: Vec<usize> = (0..GRID_SIDE).map(|col| row * GRID_SIDE + col).collect();
        link_unit(&cells);
    }
    for col in 0..GRID_SIDE {
        let cells: Vec<usize> = (0..GRID_SIDE).map(|row| row * GRID_SIDE + col).collect();
        link_unit(&cells);
    }
    for block_row in (0..GRID_SIDE).step_by(BLOCK_SIDE) {
        for block_col in (0..GRID_SIDE).step_by(BLOCK_SIDE) {
            let cells: Vec<usize> = (0..BLOCK_SIDE)
                .flat_map(|r| {
                    (0..BLOCK_SIDE).map(move |c| (block_row + r) * GRID_SIDE + block_col + c)
                })
                .collect();
            link_unit(&cells);
        }
    }

    neighbors
}

/// The assignment implied by the givens alone: every cell whose original
/// domain is a singleton. Used for the pre-search rendering.
pub fn clue_assignment(csp: &Csp<char>) -> Assignment<char> {
    let mut assignment = Assignment::new();
    for &var in csp.variables() {
        if let [clue] = csp.domain(var) {
            assignment.assign(var, *clue);
        }
    }
    assignment
}

/// Reads a board line from a file: the first line, trimmed.
pub fn load_board(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents.lines().next().unwrap_or("").trim().to_owned())
}

/// Renders an assignment as a fixed 9×9 text grid with block separators.
/// Unassigned cells show as `*`.
pub fn render(assignment: &Assignment<char>) -> String {
    let mut out = String::from("|-----------------------------|\n|");
    for idx in 0..GRID_CELLS {
        match assignment.get(idx as VariableId) {
            Some(value) => {
                out.push(' ');
                out.push(*value);
                out.push(' ');
            }
            None => out.push_str(" * "),
        }
        let n = idx + 1;
        if n % BLOCK_SIDE == 0 {
            out.push('|');
        }
        if n % GRID_SIDE == 0 {
            out.push_str("\n|");
        }
        if n % (BLOCK_SIDE * GRID_SIDE) == 0 && idx != GRID_CELLS - 1 {
            out.push_str("-----------------------------|\n|");
        }
    }
    out.push_str("-----------------------------|\n");
    out
}
