//! Open set with lowest-f selection.
//!
//! `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to pop the
//! smallest key first. The key orders by `f`, then by the configured
//! [`TieBreak`], then by node id, which makes selection fully deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{Node, NodeId};

/// Which node wins among open nodes with equal `f`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Oldest node first.
    #[default]
    Fifo,
    /// Newest node first.
    Lifo,
    /// Fewest moves from the root first, then oldest.
    LowestG,
}

/// Heap ordering key: `(f, secondary, order)` compared lexicographically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    f: u32,
    secondary: u32,
    order: u64,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    id: NodeId,
}

/// The not-yet-expanded nodes of a search.
#[derive(Debug)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    tie_break: TieBreak,
    high_water: usize,
}

impl Frontier {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            tie_break,
            high_water: 0,
        }
    }

    fn key(&self, id: NodeId, node: &Node) -> FrontierKey {
        let order = id as u64;
        match self.tie_break {
            TieBreak::Fifo => FrontierKey {
                f: node.f(),
                secondary: 0,
                order,
            },
            TieBreak::Lifo => FrontierKey {
                f: node.f(),
                secondary: 0,
                order: u64::MAX - order,
            },
            TieBreak::LowestG => FrontierKey {
                f: node.f(),
                secondary: node.g(),
                order,
            },
        }
    }

    /// Adds a node stored at `id` in the arena.
    pub fn push(&mut self, id: NodeId, node: &Node) {
        let key = self.key(id, node);
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            id,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Id of the node that [`Frontier::pop_best`] would return.
    pub fn select_best(&self) -> Option<NodeId> {
        self.heap.peek().map(|entry| entry.id)
    }

    /// Removes and returns the node with the lowest `f`.
    pub fn pop_best(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.id)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
