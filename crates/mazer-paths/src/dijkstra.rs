use std::collections::HashMap;

use mazer_core::{Cell, Maze};

use crate::config::SolverConfig;
use crate::cost::CostModel;
use crate::error::{ConfigError, SolveError};
use crate::frontier::PriorityFrontier;
use crate::neighbors::Move;
use crate::search::Search;
use crate::step::StepResult;
use crate::strategy::{Strategy, StrategyKind};
use crate::terrain::Terrain;
use crate::traits::AstarPather;

/// Best-first frontier keyed by cost so far plus the pather's estimate.
///
/// With a zero estimate this is Dijkstra's algorithm. A neighbour is
/// (re)pushed only when the new cost is strictly lower than the best known
/// one; stale heap entries are skipped when popped.
#[derive(Debug)]
pub(crate) struct BestFirst {
    open: PriorityFrontier,
    cost_so_far: HashMap<Cell, f64>,
    nbuf: Vec<Move>,
}

impl BestFirst {
    pub(crate) fn new<P: AstarPather>(
        search: &mut Search,
        pather: &P,
        start: Cell,
        goal: Cell,
    ) -> Self {
        let root = search.nodes.root(start);
        let mut open = PriorityFrontier::new();
        open.push(root, pather.estimate(start, goal));
        Self {
            open,
            cost_so_far: HashMap::from([(start, 0.0)]),
            nbuf: Vec::new(),
        }
    }

    pub(crate) fn advance<P: AstarPather>(
        &mut self,
        search: &mut Search,
        pather: &P,
        goal: Cell,
    ) -> StepResult {
        loop {
            let Some(id) = self.open.pop() else {
                return search.failed();
            };
            let cell = search.nodes.state(id);
            if search.is_explored(cell) {
                continue;
            }
            if cell == goal {
                return search.done(id);
            }
            let g = self.cost_so_far.get(&cell).copied().unwrap_or_default();
            search.mark(cell);

            let mut nbuf = std::mem::take(&mut self.nbuf);
            nbuf.clear();
            pather.moves(cell, &mut nbuf);
            for &mv in &nbuf {
                if search.is_explored(mv.to) {
                    continue;
                }
                let new_cost = g + pather.cost(cell, mv.to);
                if self
                    .cost_so_far
                    .get(&mv.to)
                    .is_some_and(|&best| new_cost >= best)
                {
                    continue;
                }
                self.cost_so_far.insert(mv.to, new_cost);
                let child = search.nodes.child(id, mv);
                self.open.push(child, new_cost + pather.estimate(mv.to, goal));
            }
            self.nbuf = nbuf;
            return search.exploring(cell);
        }
    }
}

/// Uniform-cost search over tile-weighted moves.
///
/// Penalty tiles cost [`CostModel::DIJKSTRA_PENALTY`] unless the
/// configuration says otherwise. The returned path has minimal total cost.
#[derive(Debug)]
pub struct Dijkstra<'m> {
    terrain: Terrain<'m>,
    frontier: BestFirst,
    search: Search,
}

impl<'m> Dijkstra<'m> {
    pub fn new(maze: &'m Maze, config: &SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let terrain = Terrain::new(
            maze,
            config.cost_model(CostModel::DIJKSTRA_PENALTY),
            config.unlock_hints,
        );
        let mut search = Search::new();
        let frontier = BestFirst::new(&mut search, &terrain, maze.start(), maze.goal());
        Ok(Self {
            terrain,
            frontier,
            search,
        })
    }

    /// The solver's private view of the maze.
    pub fn terrain(&self) -> &Terrain<'m> {
        &self.terrain
    }
}

impl Strategy for Dijkstra<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Dijkstra
    }

    fn pull_step(&mut self) -> Result<StepResult, SolveError> {
        self.search.begin()?;
        let goal = self.terrain.maze().goal();
        Ok(self
            .frontier
            .advance(&mut self.search, &self.terrain, goal))
    }

    fn is_finished(&self) -> bool {
        self.search.is_finished()
    }
}
