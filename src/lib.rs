//! 15-Puzzle Solver Library
//!
//! Finds a sequence of blank moves turning one 4x4 sliding-tile arrangement
//! into another with best-first search ordered by `f = g + h`, where `h` is
//! the Manhattan-distance sum of the tiles.

pub mod board;
pub mod error;
pub mod expand;
pub mod frontier;
pub mod heuristic;
pub mod moves;
pub mod node;
pub mod persistence;
pub mod search;
pub mod solution;

pub use board::Board;
pub use error::PuzzleError;
pub use frontier::TieBreak;
pub use moves::Direction;
pub use search::{solve, SearchConfig, SearchOutcome};
pub use solution::Solution;

/// Solves a parsed puzzle file, turning every outcome without a goal node
/// into [`PuzzleError::NoSolution`].
pub fn solve_pair(
    input: &persistence::PuzzleInput,
    config: &SearchConfig,
) -> Result<Solution, PuzzleError> {
    solve(&input.initial, &input.goal, config).into_solution()
}
