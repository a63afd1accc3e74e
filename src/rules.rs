//! This module contains the placement-legality checker for standard sudoku
//! rules: a value may appear at most once per row, per column, and per
//! block.
//!
//! The checker is pure. It never mutates the grid and never prints; when a
//! placement is rejected, the reason is an explicit [Conflict] value which
//! callers may show to the player. Checks run in a fixed order (row, then
//! column, then block) and stop at the first violation, so only one
//! conflict is ever reported at a time.
//!
//! Note that the checker deliberately does *not* test whether the target
//! cell is already occupied. That is a distinct rejection with a distinct
//! message, handled by [Game::place](crate::game::Game::place) before the
//! checker is consulted.

use crate::SudokuGrid;

use std::fmt::{self, Display, Formatter};

/// The reason a candidate placement was rejected: the uniqueness rule it
/// breaks, together with the coordinate at which the conflicting value sits.
/// This is diagnostic information for the player; it carries no meaning
/// beyond allow/deny.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Conflict {

    /// The value already appears in the target row, at the contained column.
    Row {
        /// Column of the conflicting cell (0-based).
        column: usize
    },

    /// The value already appears in the target column, at the contained row.
    Column {
        /// Row of the conflicting cell (0-based).
        row: usize
    },

    /// The value already appears in the block containing the target cell, at
    /// the contained position.
    Block {
        /// Column of the conflicting cell (0-based).
        column: usize,

        /// Row of the conflicting cell (0-based).
        row: usize
    }
}

impl Display for Conflict {

    /// Formats this conflict as a short explanation for the player.
    /// Coordinates are printed 1-based, matching the prompts.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::Row { column } =>
                write!(f, "it is already present in the same row, at column \
                    {}", column + 1),
            Conflict::Column { row } =>
                write!(f, "it is already present in the same column, at row \
                    {}", row + 1),
            Conflict::Block { column, row } =>
                write!(f, "it is already present in the same block, at \
                    column {}, row {}", column + 1, row + 1)
        }
    }
}

/// Checks whether `number` may be placed at the cell specified by `column`
/// and `row` without breaking row, column, or block uniqueness. The target
/// cell itself is skipped during the scans, so a grid whose cell already
/// contains `number` is not reported as conflicting with itself.
///
/// `column` and `row` must lie within the grid; this is the caller's
/// responsibility (the game validates coordinates before consulting the
/// checker).
///
/// # Errors
///
/// The first [Conflict] found, scanning the row, then the column, then the
/// block.
pub fn check_placement(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> Result<(), Conflict> {
    let size = grid.size();

    for other_column in 0..size {
        if other_column != column &&
                grid.has_number(other_column, row, number).unwrap() {
            return Err(Conflict::Row { column: other_column });
        }
    }

    for other_row in 0..size {
        if other_row != row &&
                grid.has_number(column, other_row, number).unwrap() {
            return Err(Conflict::Column { row: other_row });
        }
    }

    let block_size = grid.block_size();
    let block_column = (column / block_size) * block_size;
    let block_row = (row / block_size) * block_size;

    for other_row in block_row..(block_row + block_size) {
        for other_column in block_column..(block_column + block_size) {
            if (other_row != row || other_column != column) &&
                    grid.has_number(other_column, other_row, number)
                        .unwrap() {
                return Err(Conflict::Block {
                    column: other_column,
                    row: other_row
                });
            }
        }
    }

    Ok(())
}

/// Indicates whether the given grid breaks no uniqueness rule, that is,
/// every filled cell could legally be placed where it is. Used to reject
/// corrupt puzzle files before a game is started on them.
pub fn grid_respects_rules(grid: &SudokuGrid) -> bool {
    let size = grid.size();

    for row in 0..size {
        for column in 0..size {
            if let Some(number) = grid.get_cell(column, row).unwrap() {
                if check_placement(grid, column, row, number).is_err() {
                    return false;
                }
            }
        }
    }

    true
}
