//! Solution trace reconstruction.

use crate::moves::{format_moves, Direction};
use crate::node::{NodeArena, NodeId};

/// What a finished search reports: the path to the goal and its cost profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Moves from the root to the goal node (its `g`).
    pub depth: u32,
    /// Size of the generated set when the search stopped, root included.
    pub generated_count: usize,
    /// Blank moves, root to goal.
    pub moves: Vec<Direction>,
    /// `f` of every node on the path, root to goal; one longer than `moves`.
    pub f_values: Vec<u32>,
}

impl Solution {
    /// Builds the record for `goal_id` by walking parent links back to the root.
    pub fn record(arena: &NodeArena, goal_id: NodeId, generated_count: usize) -> Self {
        let mut f_values: Vec<u32> = arena.ancestors(goal_id).map(|node| node.f()).collect();
        f_values.reverse();

        Self {
            depth: arena.get(goal_id).g(),
            generated_count,
            moves: arena.move_history(goal_id),
            f_values,
        }
    }

    /// Moves as space-separated symbols.
    pub fn moves_line(&self) -> String {
        format_moves(&self.moves)
    }

    /// `f` values as space-separated integers.
    pub fn f_values_line(&self) -> String {
        self.f_values
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
