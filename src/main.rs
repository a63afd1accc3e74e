//! The terminal front end: loads a puzzle, then loops rendering the grid
//! and applying player commands until the grid is full.

use clap::Parser;

use log::debug;

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use sudoku_play::game::{Game, GameState, PlaceOutcome, UndoOutcome};
use sudoku_play::input::{self, Command};
use sudoku_play::puzzle;

/// A terminal sudoku game. Pick one of the shipped puzzles, place values
/// under the standard rules, and take back your most recent move when you
/// change your mind. The game ends once the grid is full.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {

    /// Puzzle number to load (1 to 10). Prompts interactively when omitted.
    #[arg(short, long, value_name = "NUMBER")]
    puzzle: Option<usize>,

    /// Directory containing the puzzle files.
    #[arg(long, value_name = "DIR", default_value = "puzzles")]
    dir: PathBuf
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(error) = run(&args) {
        eprintln!("ERROR: {}", error);
        process::exit(1);
    }
}

fn choose_index<R, W>(args: &Args, input: &mut R, output: &mut W)
        -> io::Result<usize>
where
    R: BufRead,
    W: Write
{
    if let Some(index) = args.puzzle {
        return Ok(index);
    }

    let prompt = format!(
        "Choose a puzzle between 1 and {} (0 to let chance decide): ",
        puzzle::PUZZLE_COUNT);
    let choice =
        input::read_number(input, output, prompt.as_str(), 0,
            puzzle::PUZZLE_COUNT)?;

    if choice == 0 {
        Ok(puzzle::random_index(&mut rand::thread_rng()))
    }
    else {
        Ok(choice)
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let index = choose_index(args, &mut input, &mut output)?;
    debug!("selected puzzle {}", index);

    let grid = puzzle::load_puzzle(&args.dir, index)?;
    let mut game = Game::new(grid);

    while game.state() == GameState::Playing {
        writeln!(output, "\n{}\n", game.grid())?;

        match input::read_command(&mut input, &mut output,
                game.grid().size())? {
            Command::Place { column, row, value } =>
                match game.place(column, row, value)? {
                    PlaceOutcome::Placed => {},
                    PlaceOutcome::CellNotFree =>
                        writeln!(output,
                            "Impossible, the selected cell is not free.")?,
                    PlaceOutcome::RuledOut(conflict) =>
                        writeln!(output,
                            "The value {} cannot be placed there: {}.",
                            value, conflict)?
                },
            Command::Undo => match game.undo() {
                UndoOutcome::Undone(mv) =>
                    writeln!(output,
                        "Removed the value at row {}, column {}.",
                        mv.row + 1, mv.column + 1)?,
                UndoOutcome::NothingToUndo =>
                    writeln!(output, "Nothing to undo.")?
            }
        }
    }

    writeln!(output, "\n{}\n", game.grid())?;
    writeln!(output, "The grid is full, the game is over.")?;
    Ok(())
}
