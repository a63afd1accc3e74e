//! This module contains the game session: one grid, the history of
//! placements made on it, and the turn protocol that ties the two to the
//! legality checker.
//!
//! All game-rule rejections (occupied cell, rule conflict, undo with no
//! history) are modeled as informational outcomes, not errors. They are
//! expected, frequent, and part of normal play; none of them mutate any
//! state. `Err` values only arise from broken caller contracts, such as
//! coordinates outside the grid.

use crate::SudokuGrid;
use crate::error::SudokuResult;
use crate::rules::{self, Conflict};

/// The coordinate of one successful placement, recorded so it can be taken
/// back. Moves are produced and undone in strict LIFO order: only the most
/// recent placement is reversible at any time, and an undone move cannot be
/// redone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Move {

    /// Column of the placed cell (0-based).
    pub column: usize,

    /// Row of the placed cell (0-based).
    pub row: usize
}

/// The lifecycle state of a [Game]. There is no explicit quit: the only
/// terminal condition is a full grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameState {

    /// The grid still has empty cells and commands are being accepted.
    Playing,

    /// The grid is full. No further commands are accepted.
    Finished
}

/// The result of a [Game::place] call with valid coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaceOutcome {

    /// The placement was legal and has been applied to the grid.
    Placed,

    /// The target cell already holds a value. The legality checker was not
    /// consulted and nothing changed.
    CellNotFree,

    /// The placement breaks a uniqueness rule. Nothing changed.
    RuledOut(Conflict)
}

/// The result of a [Game::undo] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UndoOutcome {

    /// The contained move was the most recent one; its cell has been
    /// emptied again.
    Undone(Move),

    /// There is no move left to take back. Nothing changed.
    NothingToUndo
}

/// A game session. It owns exactly one [SudokuGrid] and one history of
/// moves; there is no other mutable state. The session starts in
/// [GameState::Playing] and ends in [GameState::Finished] as soon as the
/// grid is full after any mutation.
#[derive(Clone, Debug)]
pub struct Game {
    grid: SudokuGrid,
    moves: Vec<Move>,
    state: GameState
}

impl Game {

    /// Creates a new game played on the given grid, which usually comes
    /// from [load_puzzle](crate::puzzle::load_puzzle). A grid that is
    /// already full yields a session that is finished from the start.
    pub fn new(grid: SudokuGrid) -> Game {
        let state = if grid.is_full() {
            GameState::Finished
        }
        else {
            GameState::Playing
        };

        Game {
            grid,
            moves: Vec::new(),
            state
        }
    }

    /// Gets a reference to the grid this game is played on.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets the current lifecycle state of this game.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Gets the moves made so far and not taken back, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Attempts to place `number` at the cell specified by `column` and
    /// `row`. The placement is applied only if the cell is free and the
    /// placement breaks no uniqueness rule; in every other case the grid
    /// and the move history are left untouched and the returned outcome
    /// says why.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If `column` or `row` lie outside the
    /// grid.
    /// * `SudokuError::InvalidNumber` If `number` is not in the range
    /// `[1, size]`.
    pub fn place(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<PlaceOutcome> {
        if !self.grid.is_empty_cell(column, row)? {
            return Ok(PlaceOutcome::CellNotFree);
        }

        if let Err(conflict) =
                rules::check_placement(&self.grid, column, row, number) {
            return Ok(PlaceOutcome::RuledOut(conflict));
        }

        self.grid.set_cell(column, row, number)?;
        self.moves.push(Move {
            column,
            row
        });
        self.update_state();
        Ok(PlaceOutcome::Placed)
    }

    /// Takes back the most recent placement, emptying its cell again. If no
    /// placement is left to take back, this is a no-op and the outcome says
    /// so.
    pub fn undo(&mut self) -> UndoOutcome {
        match self.moves.pop() {
            Some(mv) => {
                // moves only ever hold coordinates that were placed
                self.grid.clear_cell(mv.column, mv.row).unwrap();
                self.update_state();
                UndoOutcome::Undone(mv)
            },
            None => UndoOutcome::NothingToUndo
        }
    }

    fn update_state(&mut self) {
        self.state = if self.grid.is_full() {
            GameState::Finished
        }
        else {
            GameState::Playing
        };
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::error::SudokuError;

    fn empty_game() -> Game {
        Game::new(SudokuGrid::new(3).unwrap())
    }

    #[test]
    fn legal_placement_is_applied_and_recorded() {
        let mut game = empty_game();

        assert_eq!(Ok(PlaceOutcome::Placed), game.place(4, 2, 7));
        assert_eq!(Some(7), game.grid().get_cell(4, 2).unwrap());
        assert_eq!(&[Move { column: 4, row: 2 }], game.moves());
    }

    #[test]
    fn occupied_cell_is_rejected_without_consulting_the_rules() {
        let mut game = empty_game();
        game.place(0, 0, 1).unwrap();

        // Even a perfectly legal value is refused on an occupied cell.
        assert_eq!(Ok(PlaceOutcome::CellNotFree), game.place(0, 0, 2));
        assert_eq!(Some(1), game.grid().get_cell(0, 0).unwrap());
        assert_eq!(1, game.moves().len());
    }

    #[test]
    fn conflicting_placement_leaves_the_grid_unchanged() {
        let mut game = empty_game();
        game.place(0, 0, 5).unwrap();

        assert_eq!(Ok(PlaceOutcome::RuledOut(Conflict::Row { column: 0 })),
            game.place(8, 0, 5));
        assert_eq!(None, game.grid().get_cell(8, 0).unwrap());
        assert_eq!(1, game.moves().len());

        assert_eq!(Ok(PlaceOutcome::RuledOut(Conflict::Column { row: 0 })),
            game.place(0, 8, 5));
        assert_eq!(Ok(PlaceOutcome::RuledOut(
            Conflict::Block { column: 0, row: 0 })), game.place(1, 1, 5));
        assert_eq!(1, game.moves().len());
    }

    #[test]
    fn block_conflict_scenario() {
        let mut game = empty_game();
        game.place(1, 1, 5).unwrap();

        assert_eq!(Ok(PlaceOutcome::RuledOut(
            Conflict::Block { column: 1, row: 1 })), game.place(0, 0, 5));
    }

    #[test]
    fn row_scenario_accepts_only_the_missing_value() {
        let mut game = empty_game();

        for column in 0..8 {
            assert_eq!(Ok(PlaceOutcome::Placed),
                game.place(column, 0, column + 1));
        }

        assert_eq!(Ok(PlaceOutcome::RuledOut(Conflict::Row { column: 0 })),
            game.place(8, 0, 1));
        assert_eq!(Ok(PlaceOutcome::Placed), game.place(8, 0, 9));
    }

    #[test]
    fn undo_restores_the_previous_state() {
        let mut game = empty_game();
        game.place(2, 3, 4).unwrap();
        game.place(5, 6, 8).unwrap();

        assert_eq!(UndoOutcome::Undone(Move { column: 5, row: 6 }),
            game.undo());
        assert_eq!(None, game.grid().get_cell(5, 6).unwrap());
        assert_eq!(Some(4), game.grid().get_cell(2, 3).unwrap());
        assert_eq!(1, game.moves().len());
    }

    #[test]
    fn undo_is_strictly_lifo() {
        let mut game = empty_game();
        game.place(0, 0, 1).unwrap();
        game.place(1, 0, 2).unwrap();
        game.place(2, 0, 3).unwrap();

        assert_eq!(UndoOutcome::Undone(Move { column: 2, row: 0 }),
            game.undo());
        assert_eq!(UndoOutcome::Undone(Move { column: 1, row: 0 }),
            game.undo());
        assert_eq!(UndoOutcome::Undone(Move { column: 0, row: 0 }),
            game.undo());
        assert_eq!(UndoOutcome::NothingToUndo, game.undo());
        assert!(game.grid().is_empty());
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut game = empty_game();

        assert_eq!(UndoOutcome::NothingToUndo, game.undo());
        assert!(game.grid().is_empty());
        assert_eq!(GameState::Playing, game.state());
    }

    #[test]
    fn rejected_placements_are_not_recorded() {
        let mut game = empty_game();
        game.place(0, 0, 5).unwrap();
        game.place(8, 0, 5).unwrap();
        game.place(0, 0, 6).unwrap();

        // Only the initial placement may be taken back.
        assert_eq!(UndoOutcome::Undone(Move { column: 0, row: 0 }),
            game.undo());
        assert_eq!(UndoOutcome::NothingToUndo, game.undo());
    }

    #[test]
    fn place_then_undo_round_trip() {
        let mut game = empty_game();

        assert_eq!(Ok(PlaceOutcome::Placed), game.place(3, 7, 2));
        assert!(matches!(game.undo(), UndoOutcome::Undone(_)));
        assert!(game.grid().is_empty_cell(3, 7).unwrap());
    }

    #[test]
    fn out_of_range_input_is_an_error_and_changes_nothing() {
        let mut game = empty_game();

        assert_eq!(Err(SudokuError::OutOfBounds), game.place(9, 0, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), game.place(0, 9, 1));
        assert_eq!(Err(SudokuError::InvalidNumber), game.place(0, 0, 10));
        assert!(game.grid().is_empty());
        assert!(game.moves().is_empty());
    }

    #[test]
    fn filling_the_last_cell_finishes_the_game() {
        let code = "2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,";
        let mut game = Game::new(SudokuGrid::parse(code).unwrap());

        assert_eq!(GameState::Playing, game.state());
        assert_eq!(Ok(PlaceOutcome::Placed), game.place(3, 3, 4));
        assert_eq!(GameState::Finished, game.state());
    }

    #[test]
    fn undoing_the_last_cell_resumes_play() {
        let code = "2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,";
        let mut game = Game::new(SudokuGrid::parse(code).unwrap());
        game.place(3, 3, 4).unwrap();

        assert_eq!(UndoOutcome::Undone(Move { column: 3, row: 3 }),
            game.undo());
        assert_eq!(GameState::Playing, game.state());
    }

    #[test]
    fn full_grid_finishes_immediately() {
        let code = "2;2,3,4,1,1,4,2,3,4,1,3,2,3,2,1,4";
        let game = Game::new(SudokuGrid::parse(code).unwrap());

        assert_eq!(GameState::Finished, game.state());
    }

    #[test]
    fn stack_length_tracks_placements_minus_undos() {
        let mut game = empty_game();
        game.place(0, 0, 1).unwrap();
        game.place(1, 1, 2).unwrap();
        game.place(2, 2, 3).unwrap();
        game.undo();

        assert_eq!(2, game.moves().len());

        game.place(3, 3, 4).unwrap();

        assert_eq!(3, game.moves().len());
    }
}
