//! Board representation and coordinate conversions for the 15-puzzle.
//!
//! A board is a 4x4 grid holding each value 0..=15 exactly once, where 0 is
//! the blank. Alongside the grid the solver works with a coordinate table:
//! sixteen `(row, col)` pairs indexed by tile value, so `table[0]` is always
//! the blank's position.

use std::fmt;

/// Board width and height.
pub const SIDE: usize = 4;

/// Number of cells (and tile values, blank included).
pub const CELLS: usize = SIDE * SIDE;

/// Tile value of the blank.
pub const BLANK: u8 = 0;

/// A cell position as `(row, col)`, both in `0..SIDE`.
pub type Coord = (u8, u8);

/// Position of every tile value, indexed by value.
pub type CoordTable = [Coord; CELLS];

/// Compact board encoding: one nibble per cell, row-major from the low bits.
///
/// Two boards are equal exactly when their keys are equal, so the key is what
/// the generated set stores.
pub type BoardKey = u64;

/// Reasons a grid is not a permutation of 0..=15.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardDefect {
    #[error("value {value} at row {row}, column {col} is outside 0..=15")]
    OutOfRange { row: usize, col: usize, value: u8 },
    #[error("value {value} appears more than once")]
    Duplicate { value: u8 },
}

/// A 4x4 arrangement of the tiles 0..=15.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[u8; SIDE]; SIDE],
}

impl Board {
    /// Tiles 1..=15 in reading order with the blank in the bottom-right corner.
    pub const SOLVED: Self = Self {
        cells: [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 0]],
    };

    /// Builds a board, rejecting grids that are not a permutation of 0..=15.
    pub fn from_rows(rows: [[u8; SIDE]; SIDE]) -> Result<Self, BoardDefect> {
        let mut seen = [false; CELLS];
        for (row, cells) in rows.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value as usize >= CELLS {
                    return Err(BoardDefect::OutOfRange { row, col, value });
                }
                if std::mem::replace(&mut seen[value as usize], true) {
                    return Err(BoardDefect::Duplicate { value });
                }
            }
        }
        // sixteen in-range values with no repeats cover every value once
        Ok(Self { cells: rows })
    }

    /// The grid rows, top to bottom.
    #[inline]
    pub fn rows(&self) -> &[[u8; SIDE]; SIDE] {
        &self.cells
    }

    /// Tile value at `(row, col)`.
    #[inline(always)]
    pub fn tile_at(&self, (row, col): Coord) -> u8 {
        self.cells[row as usize][col as usize]
    }

    /// Position of the blank.
    pub fn blank(&self) -> Coord {
        to_coordinates(self)[BLANK as usize]
    }

    /// Packs the board into a [`BoardKey`].
    #[inline]
    pub fn key(&self) -> BoardKey {
        self.cells
            .iter()
            .flatten()
            .enumerate()
            .fold(0, |key, (cell, &value)| key | (u64::from(value) << (4 * cell)))
    }

    /// Exchanges the contents of two cells. Keeps the permutation intact.
    #[inline]
    pub(crate) fn swap(&mut self, a: Coord, b: Coord) {
        let first = self.tile_at(a);
        self.cells[a.0 as usize][a.1 as usize] = self.tile_at(b);
        self.cells[b.0 as usize][b.1 as usize] = first;
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.cells.iter()).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_board(self))
    }
}

/// Records where every tile value sits: `table[state[r][c]] = (r, c)`.
pub fn to_coordinates(state: &Board) -> CoordTable {
    let mut table = [(0, 0); CELLS];
    for (row, cells) in state.cells.iter().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            table[value as usize] = (row as u8, col as u8);
        }
    }
    table
}

/// Inverse of [`to_coordinates`].
///
/// The table must be a bijection onto the 16 cells; tables built by
/// [`to_coordinates`] and then modified only by swapping entries always are.
pub fn from_coordinates(table: &CoordTable) -> Board {
    let mut cells = [[BLANK; SIDE]; SIDE];
    for (value, &(row, col)) in table.iter().enumerate() {
        cells[row as usize][col as usize] = value as u8;
    }
    Board { cells }
}

/// Number of tile pairs (blank excluded) that appear out of order when the
/// board is read row-major.
pub fn inversions(board: &Board) -> usize {
    let tiles: Vec<u8> = board
        .cells
        .iter()
        .flatten()
        .copied()
        .filter(|&value| value != BLANK)
        .collect();

    tiles
        .iter()
        .enumerate()
        .map(|(i, &value)| tiles[i + 1..].iter().filter(|&&later| later < value).count())
        .sum()
}

/// Permutation parity class of a board.
///
/// On an even-width board a horizontal move changes neither the inversion
/// count nor the blank's row, and a vertical move changes both by an odd
/// amount, so `inversions + blank_row` keeps its parity under every move.
pub fn parity(board: &Board) -> usize {
    (inversions(board) + board.blank().0 as usize) % 2
}

/// Whether `to` can be reached from `from` by sliding tiles.
pub fn is_reachable(from: &Board, to: &Board) -> bool {
    parity(from) == parity(to)
}

/// Formats a board the way the input file lays it out: four lines of four
/// space-separated values.
pub fn format_board(board: &Board) -> String {
    board
        .cells
        .iter()
        .map(|row| {
            row.iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [[u8; SIDE]; SIDE]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_coordinate_table_roundtrip_solved() {
        let table = to_coordinates(&Board::SOLVED);
        assert_eq!(table[0], (3, 3), "blank should sit in the last cell");
        assert_eq!(table[1], (0, 0));
        assert_eq!(table[15], (3, 2));
        assert_eq!(from_coordinates(&table), Board::SOLVED);
    }

    #[test]
    fn test_coordinate_table_roundtrip_scrambled() {
        let scrambled = board([[5, 1, 0, 8], [2, 15, 3, 4], [9, 6, 11, 7], [13, 10, 14, 12]]);
        let table = to_coordinates(&scrambled);
        for (value, &(row, col)) in table.iter().enumerate() {
            assert!(row < 4 && col < 4, "value {value} mapped off the board");
            assert_eq!(scrambled.tile_at((row, col)), value as u8);
        }
        assert_eq!(from_coordinates(&table), scrambled);
    }

    #[test]
    fn test_from_rows_rejects_duplicate() {
        let err = Board::from_rows([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 15]])
            .unwrap_err();
        assert_eq!(err, BoardDefect::Duplicate { value: 15 });
    }

    #[test]
    fn test_from_rows_rejects_out_of_range() {
        let err = Board::from_rows([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 16, 0]])
            .unwrap_err();
        assert_eq!(
            err,
            BoardDefect::OutOfRange {
                row: 3,
                col: 2,
                value: 16
            }
        );
    }

    #[test]
    fn test_key_distinguishes_single_swap() {
        let mut swapped = Board::SOLVED;
        swapped.swap((3, 3), (3, 2));
        assert_ne!(swapped.key(), Board::SOLVED.key());
        assert_eq!(swapped.blank(), (3, 2));
    }

    #[test]
    fn test_key_packs_nibbles_row_major() {
        let key = Board::SOLVED.key();
        assert_eq!(key & 0xF, 1, "first cell should be the low nibble");
        assert_eq!(key >> 60, 0, "blank in the last cell should be the high nibble");
    }

    #[test]
    fn test_solved_has_no_inversions() {
        assert_eq!(inversions(&Board::SOLVED), 0);
        assert_eq!(parity(&Board::SOLVED), 1);
    }

    #[test]
    fn test_swapping_two_tiles_breaks_reachability() {
        // the classic 14-15 swap is unsolvable
        let swapped = board([[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 15, 14, 0]]);
        assert!(!is_reachable(&swapped, &Board::SOLVED));
    }

    #[test]
    fn test_blank_moves_keep_reachability() {
        let mut moved = Board::SOLVED;
        moved.swap((3, 3), (2, 3));
        moved.swap((2, 3), (2, 2));
        assert!(is_reachable(&moved, &Board::SOLVED));
    }

    #[test]
    fn test_format_board_matches_input_layout() {
        assert_eq!(
            format_board(&Board::SOLVED),
            "1 2 3 4\n5 6 7 8\n9 10 11 12\n13 14 15 0"
        );
    }
}
