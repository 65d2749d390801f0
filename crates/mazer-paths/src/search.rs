//! Bookkeeping shared by every strategy: the node arena, the explored set,
//! the step counter and the clock.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use mazer_core::Cell;

use crate::error::SolveError;
use crate::node::{NodeArena, NodeId};
use crate::step::{Status, StepResult};

#[derive(Debug, Default)]
pub(crate) struct Search {
    pub(crate) nodes: NodeArena,
    explored: BTreeSet<Cell>,
    steps: usize,
    started: Option<Instant>,
    finished: bool,
}

impl Search {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Start of every pull: refuses to continue past a terminal step and
    /// starts the clock on the first pull.
    pub(crate) fn begin(&mut self) -> Result<(), SolveError> {
        if self.finished {
            return Err(SolveError::Finished);
        }
        self.started.get_or_insert_with(Instant::now);
        Ok(())
    }

    #[inline]
    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub(crate) fn is_explored(&self, c: Cell) -> bool {
        self.explored.contains(&c)
    }

    /// Record `c` as expanded.
    #[inline]
    pub(crate) fn mark(&mut self, c: Cell) {
        self.explored.insert(c);
    }

    fn elapsed(&self) -> Duration {
        self.started.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// An `Exploring` step positioned at `current`.
    pub(crate) fn exploring(&mut self, current: Cell) -> StepResult {
        self.steps += 1;
        StepResult {
            status: Status::Exploring,
            current: Some(current),
            path: None,
            explored: self.explored.clone(),
            steps: self.steps,
            elapsed: self.elapsed(),
        }
    }

    /// The terminal `Done` step for the goal node `goal`.
    pub(crate) fn done(&mut self, goal: NodeId) -> StepResult {
        self.steps += 1;
        self.finished = true;
        let path = self.nodes.reconstruct(goal);
        log::debug!(
            "goal reached: {} moves, {} steps, {} cells explored",
            path.len(),
            self.steps,
            self.explored.len()
        );
        StepResult {
            status: Status::Done,
            current: Some(self.nodes.state(goal)),
            path: Some(path),
            explored: std::mem::take(&mut self.explored),
            steps: self.steps,
            elapsed: self.elapsed(),
        }
    }

    /// The terminal `Failed` step.
    pub(crate) fn failed(&mut self) -> StepResult {
        self.finished = true;
        log::debug!(
            "no path: {} steps, {} cells explored",
            self.steps,
            self.explored.len()
        );
        StepResult {
            status: Status::Failed,
            current: None,
            path: None,
            explored: std::mem::take(&mut self.explored),
            steps: self.steps,
            elapsed: self.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explored_snapshots_are_cumulative() {
        let mut s = Search::new();
        s.begin().unwrap();
        s.mark(Cell::new(0, 0));
        let first = s.exploring(Cell::new(0, 0));
        s.mark(Cell::new(0, 1));
        let second = s.exploring(Cell::new(0, 1));
        assert_eq!(first.explored.len(), 1);
        assert_eq!(second.explored.len(), 2);
        assert_eq!(second.steps, 2);
    }

    #[test]
    fn pulling_after_terminal_is_an_error() {
        let mut s = Search::new();
        s.begin().unwrap();
        s.mark(Cell::new(0, 0));
        let end = s.failed();
        assert_eq!(end.status, Status::Failed);
        assert!(end.explored.contains(&Cell::new(0, 0)));
        assert!(s.is_finished());
        assert_eq!(s.begin(), Err(SolveError::Finished));
    }
}
