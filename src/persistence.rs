//! Reading puzzle files and writing result files.
//!
//! Input layout:
//! - lines 1-4: the initial state, four space-separated values per line
//! - line 5: blank
//! - lines 6-9: the goal state, same layout
//!
//! Anything after line 9 is ignored.
//!
//! Result layout:
//! - lines 1-9: the input lines, echoed (trailing whitespace removed)
//! - line 10: blank
//! - line 11: depth of the goal node
//! - line 12: number of generated nodes
//! - line 13: the moves, space-separated
//! - line 14: the `f` values from root to goal, space-separated
//!
//! Compared with the original program's output, line 10 is always written
//! empty (the original copies a tenth input line, which is usually absent),
//! and line 14 ends with a newline (the original leaves it unterminated).

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::board::{Board, SIDE};
use crate::error::PuzzleError;
use crate::moves::Direction;
use crate::solution::Solution;

/// Number of input lines that carry the two grids and the separator.
const HEADER_LINES: usize = 2 * SIDE + 1;

/// 0-based indices of the result lines that follow the header and line 10.
const DEPTH_LINE: usize = HEADER_LINES + 1;
const GENERATED_LINE: usize = DEPTH_LINE + 1;
const MOVES_LINE: usize = GENERATED_LINE + 1;
const F_VALUES_LINE: usize = MOVES_LINE + 1;

/// A parsed puzzle file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleInput {
    pub initial: Board,
    pub goal: Board,
    /// The input lines echoed at the top of the result file.
    pub header: Vec<String>,
}

/// Parses a puzzle file's contents.
pub fn parse_input(text: &str) -> Result<PuzzleInput, PuzzleError> {
    let lines: Vec<&str> = text.lines().take(HEADER_LINES).collect();
    if lines.len() < HEADER_LINES {
        return Err(PuzzleError::parse(
            lines.len() + 1,
            format!("expected {HEADER_LINES} lines, found {}", lines.len()),
        ));
    }

    let initial = parse_grid(&lines[..SIDE], 1, "initial")?;

    if !lines[SIDE].trim().is_empty() {
        return Err(PuzzleError::parse(
            SIDE + 1,
            "expected a blank line between the two states",
        ));
    }

    let goal = parse_grid(&lines[SIDE + 1..], SIDE + 2, "goal")?;

    Ok(PuzzleInput {
        initial,
        goal,
        header: lines.iter().map(|line| line.trim_end().to_string()).collect(),
    })
}

/// Parses four grid lines; `first_line` is the 1-based line number of `lines[0]`.
fn parse_grid(
    lines: &[&str],
    first_line: usize,
    which: &'static str,
) -> Result<Board, PuzzleError> {
    let mut rows = [[0u8; SIDE]; SIDE];

    for (row_index, (row, line)) in rows.iter_mut().zip(lines).enumerate() {
        let line_number = first_line + row_index;
        let values: Vec<&str> = line.split_whitespace().collect();
        if values.len() != SIDE {
            return Err(PuzzleError::parse(
                line_number,
                format!("expected {SIDE} values, found {}", values.len()),
            ));
        }

        for (cell, token) in row.iter_mut().zip(values) {
            *cell = token.parse().map_err(|_| {
                PuzzleError::parse(line_number, format!("`{token}` is not a tile value"))
            })?;
        }
    }

    Board::from_rows(rows).map_err(|defect| PuzzleError::InvalidBoard { which, defect })
}

/// Reads and parses a puzzle file.
pub fn read_input(path: &Path) -> Result<PuzzleInput, PuzzleError> {
    let text = fs::read_to_string(path).map_err(|e| PuzzleError::io(path, e))?;
    parse_input(&text)
}

/// Renders the result file for a solved puzzle.
pub fn render_output(input: &PuzzleInput, solution: &Solution) -> String {
    let mut output = String::new();
    for line in &input.header {
        output.push_str(line);
        output.push('\n');
    }
    output.push('\n');
    output.push_str(&format!("{}\n", solution.depth));
    output.push_str(&format!("{}\n", solution.generated_count));
    output.push_str(&solution.moves_line());
    output.push('\n');
    output.push_str(&solution.f_values_line());
    output.push('\n');
    output
}

/// Writes the result file for a solved puzzle.
pub fn write_output(
    path: &Path,
    input: &PuzzleInput,
    solution: &Solution,
) -> Result<(), PuzzleError> {
    fs::write(path, render_output(input, solution)).map_err(|e| PuzzleError::io(path, e))
}

/// Parses a result file back into the puzzle it echoes and its solution.
pub fn parse_result(text: &str) -> Result<(PuzzleInput, Solution), PuzzleError> {
    let input = parse_input(text)?;
    let lines: Vec<&str> = text.lines().collect();
    let line = |index: usize| {
        lines
            .get(index)
            .copied()
            .ok_or_else(|| PuzzleError::parse(index + 1, "result file ends early"))
    };

    let depth = parse_number(line(DEPTH_LINE)?.trim(), DEPTH_LINE + 1)?;
    let generated_count = parse_number(line(GENERATED_LINE)?.trim(), GENERATED_LINE + 1)?;

    let moves = line(MOVES_LINE)?
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => Direction::from_symbol(symbol),
                _ => None,
            }
            .ok_or_else(|| PuzzleError::parse(MOVES_LINE + 1, format!("`{token}` is not a move")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let f_values = line(F_VALUES_LINE)?
        .split_whitespace()
        .map(|token| parse_number(token, F_VALUES_LINE + 1))
        .collect::<Result<Vec<_>, _>>()?;

    let solution = Solution {
        depth,
        generated_count,
        moves,
        f_values,
    };
    Ok((input, solution))
}

/// Reads and parses a result file.
pub fn read_result(path: &Path) -> Result<(PuzzleInput, Solution), PuzzleError> {
    let text = fs::read_to_string(path).map_err(|e| PuzzleError::io(path, e))?;
    parse_result(&text)
}

fn parse_number<T: FromStr>(token: &str, line: usize) -> Result<T, PuzzleError> {
    token
        .parse()
        .map_err(|_| PuzzleError::parse(line, format!("`{token}` is not a number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Direction;
    use crate::search::{solve, SearchConfig};

    const TWO_MOVES: &str = "\
1 2 3 4
5 6 7 8
9 10 11 12
13 0 14 15

1 2 3 4
5 6 7 8
9 10 11 12
13 14 15 0
";

    #[test]
    fn test_parse_two_grids() {
        let input = parse_input(TWO_MOVES).unwrap();
        assert_eq!(input.goal, Board::SOLVED);
        assert_eq!(input.initial.blank(), (3, 1));
        assert_eq!(input.header.len(), 9);
        assert_eq!(input.header[4], "");
    }

    #[test]
    fn test_parse_tolerates_extra_spaces_and_trailing_text() {
        let text = TWO_MOVES.replace("5 6 7 8", " 5  6 7 8  ") + "\nnotes that are ignored\n";
        let input = parse_input(&text).unwrap();
        assert_eq!(input.goal, Board::SOLVED);
        assert_eq!(input.header[1], " 5  6 7 8");
    }

    #[test]
    fn test_parse_reports_short_row() {
        let text = TWO_MOVES.replacen("9 10 11 12", "9 10 11", 1);
        let err = parse_input(&text).unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 3, .. }), "{err}");
    }

    #[test]
    fn test_parse_reports_bad_token() {
        let text = TWO_MOVES.replacen("13 0 14 15", "13 x 14 15", 1);
        let err = parse_input(&text).unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 4, .. }), "{err}");
    }

    #[test]
    fn test_parse_requires_separator() {
        let text = TWO_MOVES.replacen("\n\n", "\n-\n", 1);
        let err = parse_input(&text).unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 5, .. }), "{err}");
    }

    #[test]
    fn test_parse_reports_truncated_file() {
        let err = parse_input("1 2 3 4\n5 6 7 8\n").unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 3, .. }), "{err}");
    }

    #[test]
    fn test_parse_rejects_duplicate_tile_in_goal() {
        let text = TWO_MOVES.replace("13 14 15 0", "13 14 14 0");
        let err = parse_input(&text).unwrap_err();
        assert!(
            matches!(err, PuzzleError::InvalidBoard { which: "goal", .. }),
            "{err}"
        );
    }

    #[test]
    fn test_render_output_layout() {
        let input = parse_input(TWO_MOVES).unwrap();
        let solution = solve(&input.initial, &input.goal, &SearchConfig::default())
            .into_solution()
            .unwrap();
        assert_eq!(solution.moves, vec![Direction::Right, Direction::Right]);

        insta::assert_snapshot!(render_output(&input, &solution), @r"
        1 2 3 4
        5 6 7 8
        9 10 11 12
        13 0 14 15

        1 2 3 4
        5 6 7 8
        9 10 11 12
        13 14 15 0

        2
        6
        R R
        2 2 2
        ");
    }

    #[test]
    fn test_render_depth_zero_has_empty_moves_line() {
        let input = parse_input(&TWO_MOVES.replacen("13 0 14 15", "13 14 15 0", 1)).unwrap();
        let solution = solve(&input.initial, &input.goal, &SearchConfig::default())
            .into_solution()
            .unwrap();
        let rendered = render_output(&input, &solution);
        let tail: Vec<&str> = rendered.lines().skip(10).collect();
        assert_eq!(tail, vec!["0", "1", "", "0"]);
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = std::env::temp_dir().join(format!("fifteen-persistence-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input_path = dir.join("input.txt");
        let output_path = dir.join("output.txt");
        fs::write(&input_path, TWO_MOVES).unwrap();

        let input = read_input(&input_path).unwrap();
        let solution = solve(&input.initial, &input.goal, &SearchConfig::default())
            .into_solution()
            .unwrap();
        write_output(&output_path, &input, &solution).unwrap();

        let written = fs::read_to_string(&output_path).unwrap();
        assert_eq!(written, render_output(&input, &solution));
        let (echoed, recorded) = read_result(&output_path).unwrap();
        assert_eq!(echoed, input);
        assert_eq!(recorded, solution);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_tenth_input_line_is_not_echoed() {
        let input = parse_input(&format!("{TWO_MOVES}notes that are ignored\n")).unwrap();
        let solution = solve(&input.initial, &input.goal, &SearchConfig::default())
            .into_solution()
            .unwrap();
        let rendered = render_output(&input, &solution);

        assert_eq!(rendered.lines().nth(HEADER_LINES), Some(""));
        assert!(!rendered.contains("notes"));
        assert!(rendered.ends_with("2 2 2\n"));
    }

    #[test]
    fn test_parse_result_of_depth_zero() {
        let input = parse_input(&TWO_MOVES.replacen("13 0 14 15", "13 14 15 0", 1)).unwrap();
        let solution = solve(&input.initial, &input.goal, &SearchConfig::default())
            .into_solution()
            .unwrap();

        let (_, recorded) = parse_result(&render_output(&input, &solution)).unwrap();
        assert_eq!(recorded.depth, 0);
        assert!(recorded.moves.is_empty());
        assert_eq!(recorded.f_values, vec![0]);
    }

    #[test]
    fn test_parse_result_rejects_unknown_move() {
        let input = parse_input(TWO_MOVES).unwrap();
        let solution = solve(&input.initial, &input.goal, &SearchConfig::default())
            .into_solution()
            .unwrap();
        let text = render_output(&input, &solution).replace("R R", "R X");

        let err = parse_result(&text).unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 13, .. }), "{err}");
    }

    #[test]
    fn test_parse_result_requires_all_lines() {
        let err = parse_result(&format!("{TWO_MOVES}\n2\n6\n")).unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 13, .. }), "{err}");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_input(Path::new("definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, PuzzleError::Io { .. }));
    }
}
