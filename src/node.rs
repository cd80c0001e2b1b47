//! Search nodes and the arena that owns them.
//!
//! Nodes are never freed during a search: the arena hands out sequential
//! [`NodeId`]s and children refer to their parent by id. The move history is
//! not copied into each node; it is the chain of `last_move`s from a node back
//! to the root.

use crate::board::Board;
use crate::moves::Direction;

/// Index of a node in its [`NodeArena`]. Ids follow creation order.
pub type NodeId = usize;

/// An immutable search node.
#[derive(Clone, Debug)]
pub struct Node {
    state: Board,
    parent: Option<NodeId>,
    last_move: Option<Direction>,
    g: u32,
    h: u32,
    f: u32,
}

impl Node {
    /// The search root: no parent, no moves, `g = 0`.
    pub fn root(state: Board, h: u32) -> Self {
        Self {
            state,
            parent: None,
            last_move: None,
            g: 0,
            h,
            f: h,
        }
    }

    /// A node reached from `parent` (stored at `parent_id`) by one blank move.
    pub fn child(
        parent_id: NodeId,
        parent: &Node,
        state: Board,
        last_move: Direction,
        h: u32,
    ) -> Self {
        let g = parent.g + 1;
        Self {
            state,
            parent: Some(parent_id),
            last_move: Some(last_move),
            g,
            h,
            f: g + h,
        }
    }

    #[inline]
    pub fn state(&self) -> &Board {
        &self.state
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Move that produced this node; `None` only for the root.
    #[inline]
    pub fn last_move(&self) -> Option<Direction> {
        self.last_move
    }

    /// Moves from the root.
    #[inline]
    pub fn g(&self) -> u32 {
        self.g
    }

    /// Heuristic estimate of the moves left.
    #[inline]
    pub fn h(&self) -> u32 {
        self.h
    }

    /// `g + h`, fixed at creation.
    #[inline]
    pub fn f(&self) -> u32 {
        self.f
    }
}

/// Append-only node storage.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a node and returns its id.
    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Ids come only from [`NodeArena::push`], so lookups never miss.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Walks parent links from `id` to the root, starting with `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        std::iter::successors(Some(self.get(id)), |node| node.parent.map(|parent| self.get(parent)))
    }

    /// Moves from the root to `id`, in the order they were made.
    pub fn move_history(&self, id: NodeId) -> Vec<Direction> {
        let mut moves: Vec<Direction> = self.ancestors(id).filter_map(Node::last_move).collect();
        moves.reverse();
        moves
    }
}
