//! This module obtains the initial grid for a game from the puzzle
//! directory. The directory ships a fixed set of numbered files,
//! `puzzle1.sud` to `puzzle10.sud`, each containing a grid code as
//! understood by [SudokuGrid::parse].
//!
//! The player either names a puzzle number or lets chance decide; the
//! randomness is injected as a [Rng] so tests can seed it. Every failure
//! here is fatal for the program: the game core is only ever started on a
//! fully materialized, rule-respecting grid.

use crate::SudokuGrid;
use crate::error::PuzzleLoadError;
use crate::rules;

use log::{debug, info};

use rand::Rng;

use std::fs;
use std::path::{Path, PathBuf};

/// The number of puzzle files shipped in the puzzle directory.
pub const PUZZLE_COUNT: usize = 10;

/// The path of the puzzle file with the given number inside `directory`.
/// The file is not required to exist.
pub fn puzzle_path(directory: &Path, index: usize) -> PathBuf {
    directory.join(format!("puzzle{}.sud", index))
}

/// Draws a random puzzle number in the range `[1, PUZZLE_COUNT]` from the
/// given random number generator.
pub fn random_index<R: Rng>(rng: &mut R) -> usize {
    rng.gen_range(1..=PUZZLE_COUNT)
}

/// Loads the puzzle with the given number from `directory`, parses it, and
/// verifies that it respects the uniqueness rules.
///
/// # Errors
///
/// * `PuzzleLoadError::InvalidIndex` If `index` is not in the range
/// `[1, PUZZLE_COUNT]`.
/// * `PuzzleLoadError::Io` If the puzzle file cannot be read.
/// * `PuzzleLoadError::Parse` If its content is not a valid grid code.
/// * `PuzzleLoadError::InvalidPuzzle` If the parsed grid contains duplicate
/// values in a row, column, or block.
pub fn load_puzzle(directory: &Path, index: usize)
        -> Result<SudokuGrid, PuzzleLoadError> {
    if index < 1 || index > PUZZLE_COUNT {
        return Err(PuzzleLoadError::InvalidIndex(index));
    }

    let path = puzzle_path(directory, index);
    debug!("loading puzzle file {}", path.display());

    let code = fs::read_to_string(&path)
        .map_err(|e| PuzzleLoadError::Io(path.clone(), e))?;
    let grid = SudokuGrid::parse(code.trim())?;

    if !rules::grid_respects_rules(&grid) {
        return Err(PuzzleLoadError::InvalidPuzzle(path));
    }

    info!("loaded puzzle {}: {}x{} cells, {} given", index, grid.size(),
        grid.size(), grid.count_clues());
    Ok(grid)
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use std::env;
    use std::fs::File;
    use std::io::Write;

    fn shipped_puzzles() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("puzzles")
    }

    #[test]
    fn every_shipped_puzzle_loads() {
        let directory = shipped_puzzles();

        for index in 1..=PUZZLE_COUNT {
            let grid = load_puzzle(&directory, index).unwrap();

            assert_eq!(9, grid.size());
            assert!(!grid.is_full());
            assert!(rules::grid_respects_rules(&grid));
        }
    }

    #[test]
    fn invalid_index_is_rejected() {
        let directory = shipped_puzzles();

        assert!(matches!(load_puzzle(&directory, 0),
            Err(PuzzleLoadError::InvalidIndex(0))));
        assert!(matches!(load_puzzle(&directory, PUZZLE_COUNT + 1),
            Err(PuzzleLoadError::InvalidIndex(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let directory = Path::new("surely/not/a/puzzle/directory");

        assert!(matches!(load_puzzle(directory, 1),
            Err(PuzzleLoadError::Io(_, _))));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let directory = env::temp_dir()
            .join(format!("sudoku-play-parse-{}", std::process::id()));
        fs::create_dir_all(&directory).unwrap();
        let mut file = File::create(puzzle_path(&directory, 1)).unwrap();
        write!(file, "3;1,2,3").unwrap();

        assert!(matches!(load_puzzle(&directory, 1),
            Err(PuzzleLoadError::Parse(_))));

        fs::remove_dir_all(&directory).unwrap();
    }

    #[test]
    fn rule_breaking_file_is_rejected() {
        let directory = env::temp_dir()
            .join(format!("sudoku-play-invalid-{}", std::process::id()));
        fs::create_dir_all(&directory).unwrap();
        let mut file = File::create(puzzle_path(&directory, 2)).unwrap();

        // Two 1s in the first row.
        write!(file, "2;1,1,,,,,,,,,,,,,,").unwrap();

        assert!(matches!(load_puzzle(&directory, 2),
            Err(PuzzleLoadError::InvalidPuzzle(_))));

        fs::remove_dir_all(&directory).unwrap();
    }

    #[test]
    fn random_index_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..100 {
            let index = random_index(&mut rng);
            assert!(index >= 1 && index <= PUZZLE_COUNT);
        }
    }

    #[test]
    fn random_index_is_deterministic_for_a_fixed_seed() {
        let mut rng_1 = ChaCha8Rng::seed_from_u64(7);
        let mut rng_2 = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..10 {
            assert_eq!(random_index(&mut rng_1), random_index(&mut rng_2));
        }
    }
}
