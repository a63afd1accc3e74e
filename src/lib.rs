// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]

//! This crate implements a terminal sudoku game. It supports the following
//! key features:
//!
//! * Parsing and printing sudoku grids
//! * Checking the legality of a placement according to standard rules, with
//! an explicit reason when it is rejected
//! * A game session which applies legal placements and can take back the
//! most recent one
//! * Loading numbered puzzle files, selected explicitly or at random
//!
//! The grid size is not hard-coded: a grid is built from its block size `n`
//! and spans `n² × n²` cells (`n = 3` for the ordinary 9×9 game). Smaller
//! blocks are handy in tests, so most examples here use 2x2 blocks.
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code. Codes can be
//! used to exchange grids (the shipped puzzle files contain one each), while
//! the `Display` implementation lays the grid out for the terminal, with
//! row and column labels, block separators, and `.` marking empty cells.
//!
//! ```
//! use sudoku_play::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("2;1, ,2, , ,3, ,4, , ,3, , ,1, ,2").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Playing
//!
//! A [Game](game::Game) owns a grid and the history of placements made on
//! it. Placements are checked against the standard uniqueness rules before
//! they are applied; rejections are ordinary outcomes, not errors, and the
//! most recent placement can be taken back.
//!
//! ```
//! use sudoku_play::SudokuGrid;
//! use sudoku_play::game::{Game, GameState, PlaceOutcome, UndoOutcome};
//!
//! let mut game = Game::new(SudokuGrid::new(2).unwrap());
//! assert_eq!(GameState::Playing, game.state());
//!
//! // Place a 3 in the top-left cell, then change our mind.
//! assert_eq!(PlaceOutcome::Placed, game.place(0, 0, 3).unwrap());
//! assert!(matches!(game.undo(), UndoOutcome::Undone(_)));
//! assert!(game.grid().is_empty_cell(0, 0).unwrap());
//! ```
//!
//! # Checking placements directly
//!
//! The checker in the [rules] module is a pure function from a grid and a
//! candidate placement to either "legal" or a [Conflict](rules::Conflict)
//! naming the broken rule and the coordinate of the conflicting value.
//!
//! ```
//! use sudoku_play::SudokuGrid;
//! use sudoku_play::rules::{check_placement, Conflict};
//!
//! let mut grid = SudokuGrid::new(2).unwrap();
//! grid.set_cell(0, 0, 3).unwrap();
//!
//! assert_eq!(Ok(()), check_placement(&grid, 2, 2, 3));
//! assert_eq!(Err(Conflict::Row { column: 0 }),
//!     check_placement(&grid, 3, 0, 3));
//! ```

pub mod error;
pub mod game;
pub mod input;
pub mod puzzle;
pub mod rules;

use error::{GridParseError, GridParseResult, SudokuError, SudokuResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Error, Formatter};

/// The character that marks an empty cell in the terminal rendering.
const EMPTY_CELL_CHAR: char = '.';

/// A sudoku grid is composed of cells that are organized into square blocks
/// of a given size. The grid itself is a square as well: for a block size of
/// `n`, it spans `n²` rows and `n²` columns, tiled by `n²` blocks. Each cell
/// may or may not be occupied by a number.
///
/// In the ordinary game the block size is 3, giving the familiar 9×9 grid:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ║          ...          ║           ║
/// ```
///
/// `SudokuGrid` implements `Display`, but only grids with a size (that is,
/// width or height) of less than or equal to 9 can be displayed with digits
/// 1 to 9. Grids of all other sizes will raise an error.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuGrid {
    block_size: usize,
    size: usize,
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        EMPTY_CELL_CHAR
    }
}

fn line(grid: &SudokuGrid, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let size = grid.size();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else if x % grid.block_size == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn header_row(grid: &SudokuGrid) -> String {
    let labels =
        line(grid, ' ', ' ', ' ', |x| to_char(Some(x + 1)), ' ', ' ', false);
    let mut result = String::from(labels.trim_end());
    result.push('\n');
    result
}

fn top_row(grid: &SudokuGrid) -> String {
    line(grid, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(grid: &SudokuGrid) -> String {
    line(grid, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(grid: &SudokuGrid) -> String {
    line(grid, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(grid: &SudokuGrid) -> String {
    line(grid, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line(grid, '║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ',
        '║', true)
}

// The margin under the row labels, so separator lines stay aligned with
// content rows.
const LABEL_MARGIN: &str = "  ";

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();

        if size > 9 {
            return Err(Error::default());
        }

        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);

        f.write_str(LABEL_MARGIN)?;
        f.write_str(header_row(self).as_str())?;

        for y in 0..size {
            if y == 0 {
                f.write_str(LABEL_MARGIN)?;
                f.write_str(top_row(self).as_str())?;
            }
            else if y % self.block_size == 0 {
                f.write_str(LABEL_MARGIN)?;
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(LABEL_MARGIN)?;
                f.write_str(thin_separator_line.as_str())?;
            }

            write!(f, "{} ", y + 1)?;
            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(LABEL_MARGIN)?;
        f.write_str(bottom_row(self).as_str())?;
        Ok(())
    }
}

fn cell_to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

impl SudokuGrid {

    /// Creates a new, empty sudoku grid with the given block size. The total
    /// width and height of the grid will be equal to the square of
    /// `block_size`.
    ///
    /// # Arguments
    ///
    /// * `block_size`: The dimension of one sub-block of the grid. This is
    /// also the number of blocks that tile the grid along each axis. For an
    /// ordinary sudoku grid, this is 3. Must be greater than 0.
    ///
    /// # Errors
    ///
    /// If `block_size` is invalid (zero).
    pub fn new(block_size: usize) -> SudokuResult<SudokuGrid> {
        if block_size == 0 {
            return Err(SudokuError::InvalidDimensions);
        }

        let size = block_size * block_size;
        let cells = vec![None; size * size];

        Ok(SudokuGrid {
            block_size,
            size,
            cells
        })
    }

    /// Parses a code encoding a sudoku grid. The code has to be of the
    /// format `<block_size>;<cells>` where `<cells>` is a comma-separated
    /// list of entries, which are either empty or a number. The entries are
    /// assigned left-to-right, top-to-bottom, where each row is completed
    /// before the next one is started. Whitespace in the entries is ignored
    /// to allow for more intuitive formatting. The number of entries must
    /// match the amount of cells in a grid with the given block size, i.e.
    /// it must be `block_size⁴`.
    ///
    /// As an example, the code `2;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` will
    /// parse to the following grid:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 1 │   ║ 2 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 3 ║   │ 4 ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║   │ 3 ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 1 ║   │ 2 ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of [GridParseError] (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<SudokuGrid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(GridParseError::WrongNumberOfParts);
        }

        let block_size = parts[0].trim().parse::<usize>()?;

        if block_size == 0 {
            return Err(GridParseError::InvalidDimensions);
        }

        let mut grid = SudokuGrid::new(block_size)
            .map_err(|_| GridParseError::InvalidDimensions)?;
        let size = grid.size();
        let numbers: Vec<&str> = parts[1].split(',').collect();

        if numbers.len() != size * size {
            return Err(GridParseError::WrongNumberOfCells);
        }

        for (i, number_str) in numbers.iter().enumerate() {
            let number_str = number_str.trim();

            if number_str.is_empty() {
                continue;
            }

            let number = number_str.parse::<usize>()?;

            if number == 0 || number > size {
                return Err(GridParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_play::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new(3).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{};", self.block_size);
        let cells = self.cells.iter()
            .map(cell_to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the size (number of rows and columns) of one sub-block of the
    /// grid. This is also the number of blocks that tile the grid along each
    /// axis.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). Since a square grid is enforced at construction time,
    /// this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        let size = self.size();

        if column >= size || row >= size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            let index = index(column, row, size);
            Ok(self.cells[index])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, size]`, `false` will always be
    /// returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Indicates whether the cell at the specified position is empty.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are greater than or equal to the size. In
    /// that case, `SudokuError::OutOfBounds` is returned.
    pub fn is_empty_cell(&self, column: usize, row: usize)
            -> SudokuResult<bool> {
        Ok(self.get_cell(column, row)?.is_none())
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten. Note that no legality check is performed here; whether
    /// the number may go there under the rules of the game is the business
    /// of [check_placement](crate::rules::check_placement), which callers
    /// are expected to consult first.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > size {
            return Err(SudokuError::InvalidNumber);
        }

        let index = index(column, row, size);
        self.cells[index] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are greater than or equal to the size. In
    /// that case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(SudokuError::OutOfBounds);
        }

        let index = index(column, row, size);
        self.cells[index] = None;
        Ok(())
    }

    /// Counts the number of filled cells in this grid.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. The entire grid is rescanned on every query.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = GridParseError;

    fn try_from(code: String) -> GridParseResult<SudokuGrid> {
        SudokuGrid::parse(code.as_str())
    }
}
