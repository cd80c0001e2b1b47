//! Manhattan-distance heuristic.
//!
//! The estimate is the sum, over tiles 1..=15, of each tile's row and column
//! distance from its goal cell. Every unit of that distance needs at least one
//! move, and a move shifts a single tile by one cell, so the estimate never
//! overestimates and changes by at most one per move.

use crate::board::{to_coordinates, Board, CoordTable};

/// The target arrangement together with its coordinate table, converted once
/// so each heuristic evaluation only converts the candidate state.
#[derive(Clone, Debug)]
pub struct Goal {
    board: Board,
    table: CoordTable,
}

impl Goal {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            table: to_coordinates(&board),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn is_goal(&self, state: &Board) -> bool {
        *state == self.board
    }

    /// Manhattan distance of a state, given as a coordinate table, from the goal.
    #[inline]
    pub fn distance(&self, table: &CoordTable) -> u32 {
        manhattan_tables(table, &self.table)
    }
}

/// Sum of Manhattan distances between two coordinate tables, blank excluded.
#[inline]
pub fn manhattan_tables(state: &CoordTable, goal: &CoordTable) -> u32 {
    state[1..]
        .iter()
        .zip(&goal[1..])
        .map(|(&(row, col), &(goal_row, goal_col))| {
            u32::from(row.abs_diff(goal_row)) + u32::from(col.abs_diff(goal_col))
        })
        .sum()
}

/// Sum of Manhattan distances of tiles 1..=15 between `state` and `goal`.
pub fn manhattan(state: &Board, goal: &Board) -> u32 {
    manhattan_tables(&to_coordinates(state), &to_coordinates(goal))
}
