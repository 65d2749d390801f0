use std::collections::VecDeque;

use mazer_core::{Cell, Maze};

use crate::dfs::DepthFirst;
use crate::error::SolveError;
use crate::search::Search;
use crate::step::StepResult;
use crate::strategy::{Strategy, StrategyKind};

#[derive(Debug)]
enum Phase {
    Filling(VecDeque<Cell>),
    Tracing(DepthFirst),
}

/// Dead-end filling followed by a depth-first trace.
///
/// Works on a private copy of the maze. Each pull of the filling phase
/// walls up one dead end (an open cell with at most one open neighbour);
/// the start, the goal and teleport endpoints are never filled. When no
/// dead end remains, the pruned maze is searched depth-first from the
/// start, teleports included.
#[derive(Debug)]
pub struct DeadEndFill {
    maze: Maze,
    phase: Phase,
    filled: usize,
    search: Search,
}

impl DeadEndFill {
    pub fn new(maze: &Maze) -> Self {
        let maze = maze.clone();
        let candidates = maze
            .bounds()
            .iter()
            .filter(|&c| is_dead_end(&maze, c))
            .collect();
        Self {
            maze,
            phase: Phase::Filling(candidates),
            filled: 0,
            search: Search::new(),
        }
    }

    /// The maze as pruned so far.
    pub fn pruned(&self) -> &Maze {
        &self.maze
    }

    fn advance(&mut self) -> StepResult {
        if let Phase::Filling(queue) = &mut self.phase {
            while let Some(c) = queue.pop_front() {
                // A candidate may have been filled or lost its status since
                // it was queued.
                if !is_dead_end(&self.maze, c) {
                    continue;
                }
                self.maze.set_wall(c, true);
                self.filled += 1;
                queue.extend(
                    c.neighbors_4()
                        .into_iter()
                        .filter(|&n| is_dead_end(&self.maze, n)),
                );
                self.search.mark(c);
                return self.search.exploring(c);
            }
            log::debug!("filled {} dead ends, tracing", self.filled);
            let trace = DepthFirst::new(&mut self.search, self.maze.start());
            self.phase = Phase::Tracing(trace);
        }
        match &mut self.phase {
            Phase::Tracing(trace) => trace.advance(&mut self.search, &self.maze, self.maze.goal()),
            Phase::Filling(_) => self.search.failed(),
        }
    }
}

fn is_dead_end(maze: &Maze, c: Cell) -> bool {
    maze.is_open(c)
        && c != maze.start()
        && c != maze.goal()
        && !maze.is_teleport(c)
        && maze.open_count(c) <= 1
}

impl Strategy for DeadEndFill {
    fn kind(&self) -> StrategyKind {
        StrategyKind::DeadEndFill
    }

    fn pull_step(&mut self) -> Result<StepResult, SolveError> {
        self.search.begin()?;
        Ok(self.advance())
    }

    fn is_finished(&self) -> bool {
        self.search.is_finished()
    }
}
