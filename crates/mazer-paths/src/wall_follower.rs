use std::collections::HashMap;

use mazer_core::{Cell, Direction, Maze};

use crate::config::{Hand, SolverConfig};
use crate::error::{ConfigError, SolveError};
use crate::neighbors::{Action, Move};
use crate::node::NodeId;
use crate::search::Search;
use crate::step::StepResult;
use crate::strategy::{Strategy, StrategyKind};

/// Keep one hand on the wall.
///
/// The walker starts on the start cell facing right. At each cell it tries,
/// in order, turning toward its hand, going forward, turning away from its
/// hand and turning back, and takes the first open cell. Teleports are
/// never taken.
///
/// Every new cell is one step. Walking back onto a visited cell produces no
/// step and cuts the loop out of the recorded path, so the final path is
/// simple. The walk gives up with `Failed` once it has made `iteration_cap`
/// moves, which bounds the work on mazes where the goal is not on the wall
/// the walker follows.
#[derive(Debug)]
pub struct WallFollower<'m> {
    maze: &'m Maze,
    hand: Hand,
    cap: usize,
    moves: usize,
    facing: Direction,
    at: NodeId,
    node_of: HashMap<Cell, NodeId>,
    search: Search,
}

impl<'m> WallFollower<'m> {
    pub fn new(maze: &'m Maze, hand: Hand, config: &SolverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut search = Search::new();
        let at = search.nodes.root(maze.start());
        Ok(Self {
            maze,
            hand,
            cap: config.iteration_cap_for(maze),
            moves: 0,
            facing: Direction::Right,
            at,
            node_of: HashMap::from([(maze.start(), at)]),
            search,
        })
    }

    /// Directions to try from the current heading, most preferred first.
    fn preferences(&self) -> [Direction; 4] {
        let f = self.facing;
        match self.hand {
            Hand::Left => [f.turn_left(), f, f.turn_right(), f.reverse()],
            Hand::Right => [f.turn_right(), f, f.turn_left(), f.reverse()],
        }
    }

    fn advance(&mut self) -> StepResult {
        let start = self.maze.start();
        if !self.search.is_explored(start) {
            self.search.mark(start);
            return self.search.exploring(start);
        }
        loop {
            if self.moves >= self.cap {
                log::warn!(
                    "{}-hand wall follower gave up after {} moves",
                    self.hand,
                    self.moves
                );
                return self.search.failed();
            }
            let here = self.search.nodes.state(self.at);
            let Some(dir) = self
                .preferences()
                .into_iter()
                .find(|&d| self.maze.is_open(here.step(d)))
            else {
                return self.search.failed();
            };
            self.moves += 1;
            self.facing = dir;
            let to = here.step(dir);

            if let Some(&id) = self.node_of.get(&to) {
                self.at = id;
                continue;
            }
            let id = self.search.nodes.child(
                self.at,
                Move {
                    action: Action::Move(dir),
                    to,
                },
            );
            self.node_of.insert(to, id);
            self.at = id;
            if to == self.maze.goal() {
                return self.search.done(id);
            }
            self.search.mark(to);
            return self.search.exploring(to);
        }
    }
}

impl Strategy for WallFollower<'_> {
    fn kind(&self) -> StrategyKind {
        StrategyKind::WallFollower(self.hand)
    }

    fn pull_step(&mut self) -> Result<StepResult, SolveError> {
        self.search.begin()?;
        Ok(self.advance())
    }

    fn is_finished(&self) -> bool {
        self.search.is_finished()
    }
}
