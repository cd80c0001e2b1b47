//! Successor generation.
//!
//! The parent's coordinate table is built once and used as a scratch buffer:
//! each direction swaps the blank with its neighbor, reads off the child
//! state and heuristic, then swaps back.

use rustc_hash::FxHashSet;

use crate::board::{from_coordinates, to_coordinates, BoardKey};
use crate::heuristic::Goal;
use crate::moves::{swap_in_table, Direction};
use crate::node::{Node, NodeId};

/// Appends the children of `parent` to `children`, in Left, Right, Up, Down
/// order, skipping moves blocked by the board edge and states already in
/// `generated`.
///
/// The move straight back to the grandparent is skipped without building the
/// state: the parent's parent is always in `generated` already.
///
/// Neither `generated` nor the caller's frontier is touched; the caller
/// decides what to do with the accepted children.
pub fn expand(
    parent_id: NodeId,
    parent: &Node,
    goal: &Goal,
    generated: &FxHashSet<BoardKey>,
    children: &mut Vec<Node>,
) {
    let state = parent.state();
    let mut table = to_coordinates(state);

    let backtrack = parent.last_move().map(Direction::opposite);

    for direction in Direction::ALL {
        if backtrack == Some(direction) {
            continue;
        }
        let Some(neighbor) = swap_in_table(&mut table, state, direction) else {
            continue;
        };

        let child_state = from_coordinates(&table);
        if !generated.contains(&child_state.key()) {
            let h = goal.distance(&table);
            children.push(Node::child(parent_id, parent, child_state, direction, h));
        }

        // undo the move so the table describes the parent again
        table.swap(0, neighbor as usize);
    }
}
