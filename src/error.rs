//! This module contains the error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Miscellaneous errors that can occur on some methods of
/// [SudokuGrid](crate::SudokuGrid) and [Game](crate::game::Game). This does
/// not include errors that occur when parsing a grid code, see
/// [GridParseError] for that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the block size specified for a created grid is invalid.
    /// This is the case if it is zero.
    InvalidDimensions,

    /// Indicates that some number is invalid for the size of the grid in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the size.
    OutOfBounds
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidDimensions =>
                write!(f, "invalid grid dimensions"),
            SudokuError::InvalidNumber =>
                write!(f, "number lies outside the valid range of the grid"),
            SudokuError::OutOfBounds =>
                write!(f, "coordinates lie outside the grid")
        }
    }
}

impl std::error::Error for SudokuError { }

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a grid code with
/// [SudokuGrid::parse](crate::SudokuGrid::parse).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GridParseError {

    /// Indicates that the code has the wrong number of parts. The code should
    /// have two parts: block size and cells (separated by ';'), so if the
    /// code does not contain exactly one semicolon, this error will be
    /// returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the number deduced from the block size.
    WrongNumberOfCells,

    /// Indicates that the provided block size is invalid (i.e. zero).
    InvalidDimensions,

    /// Indicates that one of the numbers (block size or cell content) could
    /// not be parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than the grid size).
    InvalidNumber
}

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::NumberFormatError
    }
}

impl Display for GridParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridParseError::WrongNumberOfParts =>
                write!(f, "the code must consist of a block size and cells, \
                    separated by a single semicolon"),
            GridParseError::WrongNumberOfCells =>
                write!(f, "the number of cells does not match the grid size"),
            GridParseError::InvalidDimensions =>
                write!(f, "the block size must be greater than zero"),
            GridParseError::NumberFormatError =>
                write!(f, "a number in the code could not be parsed"),
            GridParseError::InvalidNumber =>
                write!(f, "a cell contains a number outside the valid range")
        }
    }
}

impl std::error::Error for GridParseError { }

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

/// An enumeration of the errors that may occur while obtaining a puzzle from
/// the puzzle directory (see the [puzzle](crate::puzzle) module). All of
/// these are fatal: the game is never started on a partially loaded grid.
#[derive(Debug)]
pub enum PuzzleLoadError {

    /// Indicates that the requested puzzle number lies outside the range of
    /// shipped puzzles (1 to [PUZZLE_COUNT](crate::puzzle::PUZZLE_COUNT)).
    InvalidIndex(usize),

    /// Indicates that the puzzle file at the contained path could not be
    /// read.
    Io(PathBuf, io::Error),

    /// Indicates that the content of a puzzle file is not a valid grid code.
    Parse(GridParseError),

    /// Indicates that the puzzle file parsed correctly, but its content
    /// breaks row, column, or block uniqueness and is therefore not a
    /// playable puzzle.
    InvalidPuzzle(PathBuf)
}

impl From<GridParseError> for PuzzleLoadError {
    fn from(e: GridParseError) -> Self {
        PuzzleLoadError::Parse(e)
    }
}

impl Display for PuzzleLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleLoadError::InvalidIndex(index) =>
                write!(f, "there is no puzzle with number {}", index),
            PuzzleLoadError::Io(path, error) =>
                write!(f, "could not read the puzzle file '{}': {}\n\
                    Make sure the puzzle directory is present and contains \
                    the files 'puzzle1.sud' to 'puzzle10.sud'.",
                    path.display(), error),
            PuzzleLoadError::Parse(error) =>
                write!(f, "the puzzle file is malformed: {}", error),
            PuzzleLoadError::InvalidPuzzle(path) =>
                write!(f, "the puzzle file '{}' contains duplicate values in \
                    a row, column, or block", path.display())
        }
    }
}

impl std::error::Error for PuzzleLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PuzzleLoadError::Io(_, error) => Some(error),
            PuzzleLoadError::Parse(error) => Some(error),
            _ => None
        }
    }
}
