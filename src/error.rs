//! Error type for reading puzzles and reporting results.
//!
//! The search itself cannot fail; everything here comes from the edges:
//! reading and validating input, writing output, and asking a search that
//! ended without a goal node for its solution.

use std::path::PathBuf;

use crate::board::BoardDefect;

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid {which} state: {defect}")]
    InvalidBoard {
        which: &'static str,
        #[source]
        defect: BoardDefect,
    },

    #[error("no solution available: search {outcome}")]
    NoSolution { outcome: &'static str },
}

impl PuzzleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
