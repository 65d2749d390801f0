use std::collections::HashSet;

use mazer_core::{Cell, Maze};

use crate::error::SolveError;
use crate::neighbors::Move;
use crate::node::NodeId;
use crate::search::Search;
use crate::step::StepResult;
use crate::strategy::{Strategy, StrategyKind};
use crate::traits::Pather;

/// Depth-first frontier, shared with the trace phase of dead-end filling.
///
/// A cell is pushed only if it is neither explored nor already on the
/// stack.
#[derive(Debug, Default)]
pub(crate) struct DepthFirst {
    stack: Vec<NodeId>,
    queued: HashSet<Cell>,
    nbuf: Vec<Move>,
}

impl DepthFirst {
    /// Seed the frontier with a root node at `start`.
    pub(crate) fn new(search: &mut Search, start: Cell) -> Self {
        let root = search.nodes.root(start);
        let mut frontier = Self::default();
        frontier.stack.push(root);
        frontier.queued.insert(start);
        frontier
    }

    /// Expand one node and report it.
    pub(crate) fn advance<P: Pather>(
        &mut self,
        search: &mut Search,
        pather: &P,
        goal: Cell,
    ) -> StepResult {
        loop {
            let Some(id) = self.stack.pop() else {
                return search.failed();
            };
            let cell = search.nodes.state(id);
            self.queued.remove(&cell);
            if search.is_explored(cell) {
                continue;
            }
            if cell == goal {
                return search.done(id);
            }
            search.mark(cell);

            let mut nbuf = std::mem::take(&mut self.nbuf);
            nbuf.clear();
            pather.moves(cell, &mut nbuf);
            for &mv in &nbuf {
                if search.is_explored(mv.to) || self.queued.contains(&mv.to) {
                    continue;
                }
                let child = search.nodes.child(id, mv);
                self.stack.push(child);
                self.queued.insert(mv.to);
            }
            self.nbuf = nbuf;
            return search.exploring(cell);
        }
    }
}

/// Depth-first search: last discovered, first expanded.
///
/// Finds a path when one exists, though not necessarily a short one.
#[derive(Debug)]
pub struct Dfs<'m> {
    maze: &'m Maze,
    frontier: DepthFirst,
    search: Search,
}

impl<'m> Dfs<'m> {
    pub fn new(maze: &'m Maze) -> Self {
        let mut search = Search::new();
        let frontier = DepthFirst::new(&mut search, maze.start());
        Self {
            maze,
            frontier,
            search,
        }
    }
}

impl Strategy for Dfs<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Dfs
    }

    fn pull_step(&mut self) -> Result<StepResult, SolveError> {
        self.search.begin()?;
        Ok(self
            .frontier
            .advance(&mut self.search, self.maze, self.maze.goal()))
    }

    fn is_finished(&self) -> bool {
        self.search.is_finished()
    }
}
