//! 15-Puzzle Solver
//!
//! Reads an initial and a goal arrangement of the 4x4 sliding-tile puzzle
//! from a text file, searches for a sequence of blank moves between them,
//! and writes the depth, node count, moves and `f` values to a result file.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use fifteen::board::{format_board, is_reachable};
use fifteen::heuristic::manhattan;
use fifteen::moves::replay;
use fifteen::{persistence, solve_pair, SearchConfig, TieBreak};

/// Solves the 15-puzzle with Manhattan-distance best-first search.
#[derive(Parser)]
#[command(name = "fifteen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle file and write the result.
    Solve {
        /// Puzzle file: initial grid, blank line, goal grid.
        input: PathBuf,
        /// Result file; printed to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Which open node to expand among those with equal f.
        #[arg(long, value_enum, default_value_t = TieBreakArg::Fifo)]
        tie_break: TieBreakArg,
        /// Give up after generating this many nodes.
        #[arg(long)]
        node_limit: Option<usize>,
        /// Refuse to search when the goal is unreachable.
        #[arg(long)]
        check_solvable: bool,
    },
    /// Validate a puzzle file and report its distance and solvability.
    Check {
        /// Puzzle file: initial grid, blank line, goal grid.
        input: PathBuf,
    },
    /// Check that a result file's moves lead from its initial state to its goal.
    Verify {
        /// Result file written by `solve`.
        result: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TieBreakArg {
    Fifo,
    Lifo,
    LowestG,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Fifo => TieBreak::Fifo,
            TieBreakArg::Lifo => TieBreak::Lifo,
            TieBreakArg::LowestG => TieBreak::LowestG,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Solve {
            input,
            output,
            tie_break,
            node_limit,
            check_solvable,
        } => {
            let config = SearchConfig {
                tie_break: tie_break.into(),
                node_limit,
                check_solvable,
            };
            run_solve(&input, output.as_deref(), &config)
        }
        Command::Check { input } => run_check(&input),
        Command::Verify { result } => run_verify(&result),
    }
}

/// Logs go to stderr so a result printed on stdout stays clean.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Solves the puzzle in `input` and writes or prints the result.
fn run_solve(input: &Path, output: Option<&Path>, config: &SearchConfig) -> anyhow::Result<()> {
    let puzzle = persistence::read_input(input)
        .with_context(|| format!("failed to load puzzle from {}", input.display()))?;

    let solution = solve_pair(&puzzle, config)?;
    debug_assert_eq!(replay(&puzzle.initial, &solution.moves), Some(puzzle.goal));

    match output {
        Some(path) => {
            persistence::write_output(path, &puzzle, &solution)?;
            println!(
                "Solved in {} moves ({} nodes generated); wrote {}",
                solution.depth,
                solution.generated_count,
                path.display()
            );
        }
        None => print!("{}", persistence::render_output(&puzzle, &solution)),
    }
    Ok(())
}

/// Prints the parsed states, their Manhattan distance and whether they connect.
fn run_check(input: &Path) -> anyhow::Result<()> {
    let puzzle = persistence::read_input(input)
        .with_context(|| format!("failed to load puzzle from {}", input.display()))?;

    println!("Initial:\n{}\n", format_board(&puzzle.initial));
    println!("Goal:\n{}\n", format_board(&puzzle.goal));
    println!("Manhattan distance: {}", manhattan(&puzzle.initial, &puzzle.goal));

    if !is_reachable(&puzzle.initial, &puzzle.goal) {
        bail!("goal is not reachable from the initial state");
    }
    println!("Goal is reachable");
    Ok(())
}

/// Replays the moves recorded in a result file and checks its counts.
fn run_verify(result: &Path) -> anyhow::Result<()> {
    let (puzzle, solution) = persistence::read_result(result)
        .with_context(|| format!("failed to load result from {}", result.display()))?;

    if solution.moves.len() != solution.depth as usize {
        bail!(
            "depth is {} but {} moves are listed",
            solution.depth,
            solution.moves.len()
        );
    }
    if solution.f_values.len() != solution.moves.len() + 1 {
        bail!(
            "expected {} f values, found {}",
            solution.moves.len() + 1,
            solution.f_values.len()
        );
    }
    match replay(&puzzle.initial, &solution.moves) {
        Some(reached) if reached == puzzle.goal => {}
        Some(reached) => bail!("moves end at\n{}\ninstead of the goal", format_board(&reached)),
        None => bail!("a listed move pushes the blank off the board"),
    }

    println!(
        "Result is consistent: {} moves reach the goal ({} nodes generated)",
        solution.depth, solution.generated_count
    );
    Ok(())
}
