//! Best-first search driver.
//!
//! The driver repeatedly takes the open node with the lowest `f`, expands it,
//! and records every accepted child in both the generated set and the
//! frontier. The goal test runs on new children as they are produced, plus
//! once on the root before the loop starts.
//!
//! A state that was generated once is never generated again, even if a
//! cheaper path to it shows up later. Costs are never revised.

use rustc_hash::FxHashSet;
use tracing::{debug, info, info_span, warn};

use crate::board::{is_reachable, to_coordinates, Board, BoardKey};
use crate::error::PuzzleError;
use crate::expand::expand;
use crate::frontier::{Frontier, TieBreak};
use crate::heuristic::Goal;
use crate::node::{Node, NodeArena, NodeId};
use crate::solution::Solution;

/// Expansions between progress log lines.
const PROGRESS_INTERVAL: usize = 100_000;

/// Knobs for a search run. The default reproduces the plain algorithm with
/// first-in-first-out tie-breaking.
#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
    pub tie_break: TieBreak,
    /// Stop once this many nodes have been generated.
    pub node_limit: Option<usize>,
    /// Refuse to search when the goal has the wrong permutation parity.
    pub check_solvable: bool,
}

/// Where the search state machine currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Running,
    GoalFound(NodeId),
    Exhausted,
    LimitReached,
}

impl SearchState {
    pub fn is_terminal(self) -> bool {
        self != Self::Running
    }
}

/// Counters describing a search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Distinct states generated, root included.
    pub generated: usize,
    /// Nodes taken off the frontier and expanded.
    pub expanded: usize,
    /// Largest frontier size seen.
    pub frontier_high_water: usize,
}

/// How a search ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution, SearchStats),
    /// The frontier emptied without producing the goal.
    Exhausted(SearchStats),
    /// The configured node limit was hit first.
    LimitReached(SearchStats),
    /// Rejected before searching: the goal has the wrong parity.
    Unreachable,
}

impl SearchOutcome {
    /// Short description used in logs and errors.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Solved(..) => "solved",
            Self::Exhausted(_) => "exhausted the frontier",
            Self::LimitReached(_) => "reached the node limit",
            Self::Unreachable => "rejected an unreachable goal",
        }
    }

    pub fn stats(&self) -> Option<&SearchStats> {
        match self {
            Self::Solved(_, stats) | Self::Exhausted(stats) | Self::LimitReached(stats) => {
                Some(stats)
            }
            Self::Unreachable => None,
        }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution, _) => Some(solution),
            _ => None,
        }
    }

    /// The solution, or an error for searches that ended without a goal node.
    pub fn into_solution(self) -> Result<Solution, PuzzleError> {
        match self {
            Self::Solved(solution, _) => Ok(solution),
            other => Err(PuzzleError::NoSolution {
                outcome: other.label(),
            }),
        }
    }
}

/// A single search run, advanced one expansion at a time.
pub struct Search {
    goal: Goal,
    node_limit: Option<usize>,
    arena: NodeArena,
    frontier: Frontier,
    generated: FxHashSet<BoardKey>,
    expanded: usize,
    state: SearchState,
    children: Vec<Node>,
}

impl Search {
    /// Creates the root node and seeds the generated set and the frontier
    /// with it. A root that already equals the goal ends the search at once.
    pub fn new(initial: Board, goal: Board, config: &SearchConfig) -> Self {
        let goal = Goal::new(goal);
        let root = Node::root(initial, goal.distance(&to_coordinates(&initial)));

        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new(config.tie_break);
        let mut generated = FxHashSet::default();

        let root_id = arena.push(root);
        let root = arena.get(root_id);
        generated.insert(root.state().key());
        frontier.push(root_id, root);

        let state = if goal.is_goal(&initial) {
            SearchState::GoalFound(root_id)
        } else {
            SearchState::Running
        };

        Self {
            goal,
            node_limit: config.node_limit,
            arena,
            frontier,
            generated,
            expanded: 0,
            state,
            children: Vec::with_capacity(4),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn generated_count(&self) -> usize {
        self.generated.len()
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            generated: self.generated.len(),
            expanded: self.expanded,
            frontier_high_water: self.frontier.high_water(),
        }
    }

    /// Expands the best open node. Does nothing once a terminal state is reached.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }

        let Some(best_id) = self.frontier.pop_best() else {
            self.state = SearchState::Exhausted;
            return self.state;
        };

        self.children.clear();
        expand(
            best_id,
            self.arena.get(best_id),
            &self.goal,
            &self.generated,
            &mut self.children,
        );
        self.expanded += 1;

        let mut goal_id = None;
        for child in self.children.drain(..) {
            let is_goal = self.goal.is_goal(child.state());
            self.generated.insert(child.state().key());
            let id = self.arena.push(child);
            self.frontier.push(id, self.arena.get(id));
            if is_goal && goal_id.is_none() {
                goal_id = Some(id);
            }
        }

        if self.expanded % PROGRESS_INTERVAL == 0 {
            debug!(
                expanded = self.expanded,
                generated = self.generated.len(),
                frontier = self.frontier.len(),
                best_f = self.arena.get(best_id).f(),
                "search progress"
            );
        }

        self.state = match goal_id {
            Some(id) => SearchState::GoalFound(id),
            None if self
                .node_limit
                .is_some_and(|limit| self.generated.len() >= limit) =>
            {
                SearchState::LimitReached
            }
            None => SearchState::Running,
        };
        self.state
    }

    /// Steps until a terminal state and reports the outcome.
    pub fn run(mut self) -> SearchOutcome {
        while !self.step().is_terminal() {}

        let stats = self.stats();
        let outcome = match self.state {
            SearchState::GoalFound(goal_id) => {
                let solution = Solution::record(&self.arena, goal_id, stats.generated);
                SearchOutcome::Solved(solution, stats)
            }
            SearchState::LimitReached => SearchOutcome::LimitReached(stats),
            SearchState::Exhausted | SearchState::Running => SearchOutcome::Exhausted(stats),
        };

        match outcome.solution() {
            Some(solution) => info!(
                depth = solution.depth,
                generated = stats.generated,
                expanded = stats.expanded,
                "goal found"
            ),
            None => warn!(
                generated = stats.generated,
                expanded = stats.expanded,
                "search {}",
                outcome.label()
            ),
        }
        outcome
    }
}

/// Searches for a move sequence turning `initial` into `goal`.
pub fn solve(initial: &Board, goal: &Board, config: &SearchConfig) -> SearchOutcome {
    let _span = info_span!("solve", tie_break = ?config.tie_break).entered();

    if config.check_solvable && !is_reachable(initial, goal) {
        warn!("goal is not reachable from the initial state");
        return SearchOutcome::Unreachable;
    }

    info!(
        h = crate::heuristic::manhattan(initial, goal),
        node_limit = ?config.node_limit,
        "starting search"
    );
    Search::new(*initial, *goal, config).run()
}
