//! A solver's private, cost-aware view of a maze.

use std::borrow::Cow;
use std::collections::{HashSet, VecDeque};

use mazer_core::{Cell, Maze, TileKind};

use crate::cost::CostModel;
use crate::distance::PortalDistance;
use crate::neighbors::Move;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Prices moves with a [`CostModel`] and applies hint unlocking.
///
/// Hints are applied once, when the view is built: a flood from the start
/// unlocks the neighbours of every hint it reaches and keeps flooding into
/// the opened cells. Every cost-aware solver therefore searches the same
/// graph, whatever order it expands cells in. The shared maze stays
/// borrowed unless a hint actually clears a wall. Without a heuristic,
/// [`estimate`](AstarPather::estimate) is zero and best-first search
/// degenerates to Dijkstra.
#[derive(Debug, Clone)]
pub struct Terrain<'m> {
    maze: Cow<'m, Maze>,
    costs: CostModel,
    hints_consumed: Vec<Cell>,
    heuristic: Option<(PortalDistance, f64)>,
}

impl<'m> Terrain<'m> {
    pub fn new(maze: &'m Maze, costs: CostModel, unlock_hints: bool) -> Self {
        let mut terrain = Self {
            maze: Cow::Borrowed(maze),
            costs,
            hints_consumed: Vec::new(),
            heuristic: None,
        };
        if unlock_hints {
            terrain.unlock_reachable_hints();
        }
        terrain
    }

    fn unlock_reachable_hints(&mut self) {
        let start = self.maze.start();
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut nbuf: Vec<Move> = Vec::new();
        while let Some(c) = queue.pop_front() {
            if self.maze.classify(c) == Some(TileKind::Hint) {
                self.hints_consumed.push(c);
                let walled = c
                    .neighbors_4()
                    .into_iter()
                    .any(|n| self.maze.in_bounds(n) && self.maze.is_wall(n));
                if walled {
                    log::debug!("hint at {c} unlocks its neighbours");
                    self.maze.to_mut().unlock_area(c);
                }
            }
            nbuf.clear();
            self.maze.moves(c, &mut nbuf);
            for mv in &nbuf {
                if seen.insert(mv.to) {
                    queue.push_back(mv.to);
                }
            }
        }
    }

    /// Attach a move lower bound scaled by `scale` per move.
    pub fn with_heuristic(mut self, distance: PortalDistance, scale: f64) -> Self {
        self.heuristic = Some((distance, scale));
        self
    }

    /// The current view, including any unlocked areas.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    /// Hint cells reachable from the start, in the order they were reached.
    pub fn hints_consumed(&self) -> &[Cell] {
        &self.hints_consumed
    }
}

impl Pather for Terrain<'_> {
    fn moves(&self, c: Cell, buf: &mut Vec<Move>) {
        self.maze.moves(c, buf);
    }
}

impl WeightedPather for Terrain<'_> {
    fn cost(&self, _from: Cell, to: Cell) -> f64 {
        self.costs.step_cost(self.maze.classify(to))
    }
}

impl AstarPather for Terrain<'_> {
    fn estimate(&self, from: Cell, goal: Cell) -> f64 {
        match &self.heuristic {
            Some((distance, scale)) => {
                debug_assert_eq!(distance.goal(), goal);
                distance.moves(from) as f64 * scale
            }
            None => 0.0,
        }
    }
}
