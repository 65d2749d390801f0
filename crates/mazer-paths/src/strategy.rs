//! The step protocol shared by every solver, and the strategy factory.

use std::fmt;
use std::str::FromStr;

use mazer_core::Maze;

use crate::astar::Astar;
use crate::bfs::Bfs;
use crate::config::{Hand, SolverConfig};
use crate::dead_end::DeadEndFill;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::error::{ConfigError, SolveError};
use crate::step::StepResult;
use crate::wall_follower::WallFollower;

/// A restartable, finite producer of [`StepResult`]s.
///
/// Each pull performs a bounded amount of work and returns one step. After
/// a terminal step (`Done` or `Failed`) further pulls return
/// [`SolveError::Finished`]. Abandoning a strategy mid-run needs no
/// teardown.
pub trait Strategy {
    fn kind(&self) -> StrategyKind;

    /// Advance by one step.
    fn pull_step(&mut self) -> Result<StepResult, SolveError>;

    /// Whether the terminal step has been produced.
    fn is_finished(&self) -> bool;
}

/// The available solvers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Dfs,
    Bfs,
    Dijkstra,
    Astar,
    WallFollower(Hand),
    DeadEndFill,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 7] = [
        Self::Dfs,
        Self::Bfs,
        Self::Dijkstra,
        Self::Astar,
        Self::WallFollower(Hand::Left),
        Self::WallFollower(Hand::Right),
        Self::DeadEndFill,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
            Self::Astar => "astar",
            Self::WallFollower(Hand::Left) => "left-hand",
            Self::WallFollower(Hand::Right) => "right-hand",
            Self::DeadEndFill => "dead-end-fill",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" => Ok(Self::Dfs),
            "bfs" => Ok(Self::Bfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" => Ok(Self::Astar),
            "left-hand" | "lhr" | "wall-follower" => Ok(Self::WallFollower(Hand::Left)),
            "right-hand" | "rhr" => Ok(Self::WallFollower(Hand::Right)),
            "dead-end-fill" | "def" => Ok(Self::DeadEndFill),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Build a strategy of the given kind over `maze`.
///
/// The configuration is validated here, before any step can be pulled.
pub fn create_strategy<'m>(
    kind: StrategyKind,
    maze: &'m Maze,
    config: &SolverConfig,
) -> Result<Box<dyn Strategy + 'm>, ConfigError> {
    config.validate()?;
    log::debug!(
        "{kind} on a {}x{} maze from {} to {}",
        maze.height(),
        maze.width(),
        maze.start(),
        maze.goal()
    );
    let strategy: Box<dyn Strategy + 'm> = match kind {
        StrategyKind::Dfs => Box::new(Dfs::new(maze)),
        StrategyKind::Bfs => Box::new(Bfs::new(maze)),
        StrategyKind::Dijkstra => Box::new(Dijkstra::new(maze, config)?),
        StrategyKind::Astar => Box::new(Astar::new(maze, config)?),
        StrategyKind::WallFollower(hand) => {
            Box::new(WallFollower::new(maze, config.hand.unwrap_or(hand), config)?)
        }
        StrategyKind::DeadEndFill => Box::new(DeadEndFill::new(maze)),
    };
    Ok(strategy)
}

/// Iterator over the remaining steps of a strategy, terminal step included.
pub struct Steps<'s, S: ?Sized> {
    strategy: &'s mut S,
}

impl<S: Strategy + ?Sized> Iterator for Steps<'_, S> {
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        if self.strategy.is_finished() {
            return None;
        }
        self.strategy.pull_step().ok()
    }
}

/// Borrow `strategy` as an iterator of steps.
pub fn steps<S: Strategy + ?Sized>(strategy: &mut S) -> Steps<'_, S> {
    Steps { strategy }
}

/// Pull until the terminal step and return it.
pub fn run_to_end<S: Strategy + ?Sized>(strategy: &mut S) -> Result<StepResult, SolveError> {
    loop {
        let step = strategy.pull_step()?;
        if step.is_terminal() {
            return Ok(step);
        }
    }
}
