//! Step-wise maze solvers.
//!
//! Every solver is a [`Strategy`]: a finite producer of [`StepResult`]s that
//! does a bounded amount of work per [`pull_step`](Strategy::pull_step), so
//! a driver can animate, interleave or abandon a search at any point.
//!
//! - **DFS** ([`Dfs`]) and **BFS** with reward/teleport priority lanes ([`Bfs`])
//! - **Dijkstra** over tile-weighted moves ([`Dijkstra`])
//! - **A\*** with a teleport-aware admissible heuristic ([`Astar`])
//! - **Wall following**, left or right hand ([`WallFollower`])
//! - **Dead-end filling** followed by a depth-first trace ([`DeadEndFill`])
//!
//! Strategies are usually built with [`create_strategy`] from a
//! [`StrategyKind`] and a [`SolverConfig`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | DFS, BFS, dead-end tracing |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! Teleport resolution happens in one place, [`push_moves`]: a cell with a
//! partner gets a trailing [`Action::Teleport`] move that solvers may or may
//! not take.

mod astar;
mod bfs;
pub mod config;
pub mod cost;
mod dead_end;
mod dfs;
mod dijkstra;
mod distance;
pub mod error;
mod frontier;
mod neighbors;
pub mod node;
mod search;
pub mod step;
mod strategy;
mod terrain;
mod traits;
mod wall_follower;

pub use astar::Astar;
pub use bfs::Bfs;
pub use config::{Hand, SolverConfig};
pub use cost::CostModel;
pub use dead_end::DeadEndFill;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use distance::PortalDistance;
pub use error::{ConfigError, SolveError};
pub use neighbors::{Action, Move, push_moves};
pub use node::{NodeArena, NodeId, SearchNode};
pub use step::{Path, Status, StepResult};
pub use strategy::{Steps, Strategy, StrategyKind, create_strategy, run_to_end, steps};
pub use terrain::Terrain;
pub use traits::{AstarPather, Pather, WeightedPather};
pub use wall_follower::WallFollower;
