//! Blank moves and their effect on boards.
//!
//! A move is named after the direction the blank travels: `L` slides the
//! tile left of the blank one cell to the right, and so on.

use std::fmt;

use crate::board::{Board, Coord, CoordTable, SIDE};

/// Direction the blank moves in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Expansion order: children are generated Left, Right, Up, Down.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Single-letter symbol used in result files.
    pub const fn symbol(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
            Self::Up => 'U',
            Self::Down => 'D',
        }
    }

    /// Parses a symbol produced by [`Direction::symbol`].
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            _ => None,
        }
    }

    /// The move that undoes this one.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Cell the blank lands on when it moves from `blank`, or `None` when the
    /// blank already sits on the board edge in this direction.
    #[inline]
    pub fn step(self, (row, col): Coord) -> Option<Coord> {
        const LAST: u8 = SIDE as u8 - 1;
        match self {
            Self::Left if col != 0 => Some((row, col - 1)),
            Self::Right if col != LAST => Some((row, col + 1)),
            Self::Up if row != 0 => Some((row - 1, col)),
            Self::Down if row != LAST => Some((row + 1, col)),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Moves the blank on a coordinate table in place.
///
/// `board` must be the board the table describes; it is used to find which
/// tile the blank trades places with. Returns the displaced tile, or `None`
/// (table untouched) when the move is blocked by the edge. Swapping entry 0
/// with the returned tile's entry undoes the move.
#[inline]
pub fn swap_in_table(table: &mut CoordTable, board: &Board, direction: Direction) -> Option<u8> {
    let blank = table[0];
    let target = direction.step(blank)?;
    let neighbor = board.tile_at(target);
    table.swap(0, neighbor as usize);
    Some(neighbor)
}

/// Returns the board after moving the blank, or `None` if the move is blocked.
pub fn apply(board: &Board, direction: Direction) -> Option<Board> {
    let blank = board.blank();
    let target = direction.step(blank)?;
    let mut moved = *board;
    moved.swap(blank, target);
    Some(moved)
}

/// Applies `moves` in order, stopping at the first blocked move.
pub fn replay(board: &Board, moves: &[Direction]) -> Option<Board> {
    moves
        .iter()
        .try_fold(*board, |current, &direction| apply(&current, direction))
}

/// Formats moves as space-separated symbols, e.g. `"R R U"`.
pub fn format_moves(moves: &[Direction]) -> String {
    moves
        .iter()
        .map(|direction| direction.symbol().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{from_coordinates, to_coordinates};

    #[test]
    fn test_symbol_roundtrip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_symbol(direction.symbol()), Some(direction));
        }
        assert_eq!(Direction::from_symbol('X'), None);
    }

    #[test]
    fn test_blank_in_corner_has_two_moves() {
        let allowed: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|direction| direction.step((3, 3)).is_some())
            .collect();
        assert_eq!(allowed, vec![Direction::Left, Direction::Up]);
    }

    #[test]
    fn test_blank_in_center_has_four_moves() {
        for direction in Direction::ALL {
            assert!(direction.step((1, 2)).is_some(), "{direction} should be open");
        }
    }

    #[test]
    fn test_apply_moves_neighbor_into_blank() {
        let moved = apply(&Board::SOLVED, Direction::Left).unwrap();
        assert_eq!(moved.blank(), (3, 2));
        assert_eq!(moved.tile_at((3, 3)), 15);
        assert_eq!(apply(&Board::SOLVED, Direction::Right), None);
    }

    #[test]
    fn test_opposite_undoes_move() {
        for direction in [Direction::Left, Direction::Up] {
            let there = apply(&Board::SOLVED, direction).unwrap();
            let back = apply(&there, direction.opposite()).unwrap();
            assert_eq!(back, Board::SOLVED);
        }
    }

    #[test]
    fn test_table_swap_agrees_with_board_apply() {
        for direction in [Direction::Left, Direction::Up] {
            let mut table = to_coordinates(&Board::SOLVED);
            let neighbor = swap_in_table(&mut table, &Board::SOLVED, direction).unwrap();
            assert_eq!(
                Some(from_coordinates(&table)),
                apply(&Board::SOLVED, direction)
            );

            table.swap(0, neighbor as usize);
            assert_eq!(table, to_coordinates(&Board::SOLVED));
        }
    }

    #[test]
    fn test_blocked_table_swap_leaves_table_alone() {
        let mut table = to_coordinates(&Board::SOLVED);
        assert_eq!(swap_in_table(&mut table, &Board::SOLVED, Direction::Down), None);
        assert_eq!(table, to_coordinates(&Board::SOLVED));
    }

    #[test]
    fn test_replay_stops_on_blocked_move() {
        let moves = [Direction::Left, Direction::Left, Direction::Up];
        let moved = replay(&Board::SOLVED, &moves).unwrap();
        assert_eq!(moved.blank(), (2, 1));
        assert_eq!(replay(&Board::SOLVED, &[Direction::Down]), None);
    }

    #[test]
    fn test_format_moves() {
        assert_eq!(format_moves(&[Direction::Right, Direction::Up]), "R U");
        assert_eq!(format_moves(&[]), "");
    }
}
