//! This module contains the line-based command input used by the terminal
//! front end. Malformed and out-of-range entries are handled here, by
//! re-prompting until the player types something valid; the game core never
//! sees them.
//!
//! All functions are generic over the reader and writer so tests can drive
//! them with byte slices instead of a terminal. Coordinates and values are
//! prompted 1-based, as printed next to the grid, and converted to 0-based
//! before they reach the core.

use std::io::{self, BufRead, Write};

/// A parsed player command, ready for the game core.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {

    /// Place `value` at the cell at (`column`, `row`), both 0-based.
    Place {
        /// Column of the target cell (0-based).
        column: usize,

        /// Row of the target cell (0-based).
        row: usize,

        /// The value to place, in `[1, size]`.
        value: usize
    },

    /// Take back the most recent placement.
    Undo
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof,
            "input closed"));
    }

    Ok(line)
}

/// Prompts for an integer in the inclusive range `[minimum, maximum]`,
/// repeating the prompt until the player enters one. Anything that does not
/// parse as an integer in range earns an explanatory message and another
/// attempt.
///
/// # Errors
///
/// If reading from `input` or writing to `output` fails, including the case
/// that `input` is exhausted (end of file).
pub fn read_number<R, W>(input: &mut R, output: &mut W, prompt: &str,
        minimum: usize, maximum: usize) -> io::Result<usize>
where
    R: BufRead,
    W: Write
{
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let line = read_line(input)?;

        match line.trim().parse::<usize>() {
            Ok(value) if value >= minimum && value <= maximum =>
                return Ok(value),
            _ => writeln!(output,
                "The value must be an integer between {} and {}.", minimum,
                maximum)?
        }
    }
}

/// Prompts for the next command on a grid of the given size: `p`/`place`
/// asks for row, column, and value in turn (each 1-based, each validated
/// with [read_number]), `u`/`undo` takes back the most recent placement.
/// Unknown actions earn an explanatory message and another attempt.
///
/// # Errors
///
/// If reading from `input` or writing to `output` fails, including the case
/// that `input` is exhausted (end of file).
pub fn read_command<R, W>(input: &mut R, output: &mut W, size: usize)
        -> io::Result<Command>
where
    R: BufRead,
    W: Write
{
    loop {
        write!(output, "Action ([p]lace or [u]ndo)? ")?;
        output.flush()?;

        let line = read_line(input)?;

        match line.trim().to_lowercase().as_str() {
            "p" | "place" => {
                let row = read_number(input, output, "Row number? ", 1,
                    size)?;
                let column = read_number(input, output, "Column number? ",
                    1, size)?;
                let value_prompt =
                    format!("Value to place (between 1 and {})? ", size);
                let value = read_number(input, output,
                    value_prompt.as_str(), 1, size)?;

                return Ok(Command::Place {
                    column: column - 1,
                    row: row - 1,
                    value
                });
            },
            "u" | "undo" => return Ok(Command::Undo),
            _ => writeln!(output, "The action must be 'p' or 'u'.")?
        }
    }
}
