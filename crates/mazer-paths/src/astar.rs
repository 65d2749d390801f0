use mazer_core::Maze;

use crate::config::SolverConfig;
use crate::cost::CostModel;
use crate::dijkstra::BestFirst;
use crate::distance::PortalDistance;
use crate::error::{ConfigError, SolveError};
use crate::search::Search;
use crate::step::StepResult;
use crate::strategy::{Strategy, StrategyKind};
use crate::terrain::Terrain;

/// A* search: cost so far plus a move-count lower bound to the goal.
///
/// The bound is Manhattan distance lowered through teleport pairs (see
/// [`PortalDistance`]), scaled by the cheapest step cost times the
/// configured heuristic weight. With the default weight of 1.0 the
/// heuristic never overestimates, so the path cost equals Dijkstra's under
/// the same cost model. Penalties default to [`CostModel::ASTAR_PENALTY`].
#[derive(Debug)]
pub struct Astar<'m> {
    terrain: Terrain<'m>,
    frontier: BestFirst,
    search: Search,
}

impl<'m> Astar<'m> {
    pub fn new(maze: &'m Maze, config: &SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let costs = config.cost_model(CostModel::ASTAR_PENALTY);
        let scale = costs.min_step_cost() * config.heuristic_weight;
        let terrain = Terrain::new(maze, costs, config.unlock_hints)
            .with_heuristic(PortalDistance::new(maze), scale);
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

impl Strategy for Astar<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Astar
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
