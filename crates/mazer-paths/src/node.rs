//! Search-tree nodes and path reconstruction.
//!
//! Nodes live in an append-only arena and point to their parent by index,
//! so the tree is rooted at the start node and parent links only lead back
//! towards it.

use mazer_core::Cell;

use crate::neighbors::{Action, Move};
use crate::step::Path;

/// Index of a node in a [`NodeArena`].
pub type NodeId = usize;

/// A node of the search tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub state: Cell,
    pub parent: Option<NodeId>,
    pub action: Option<Action>,
}

/// Owner of every node created during one solve.
#[derive(Debug, Default, Clone)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root node (no parent, no action).
    pub fn root(&mut self, state: Cell) -> NodeId {
        self.nodes.push(SearchNode {
            state,
            parent: None,
            action: None,
        });
        self.nodes.len() - 1
    }

    /// Add the node reached from `parent` by `mv`.
    pub fn child(&mut self, parent: NodeId, mv: Move) -> NodeId {
        self.nodes.push(SearchNode {
            state: mv.to,
            parent: Some(parent),
            action: Some(mv.action),
        });
        self.nodes.len() - 1
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    #[inline]
    pub fn state(&self, id: NodeId) -> Cell {
        self.nodes[id].state
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent links from `id` to the root, then reverse, so the path
    /// reads start→goal. The root's own state is not part of the path.
    pub fn reconstruct(&self, id: NodeId) -> Path {
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut cur = self.get(id);
        while let (Some(parent), Some(action)) = (cur.parent, cur.action) {
            actions.push(action);
            cells.push(cur.state);
            cur = self.get(parent);
        }
        actions.reverse();
        cells.reverse();
        Path { actions, cells }
    }
}
