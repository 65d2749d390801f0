//! The unit of observable progress emitted by every strategy.

use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

use mazer_core::{Cell, Maze};

use crate::cost::CostModel;
use crate::neighbors::Action;

/// Where a strategy is in its run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    Exploring,
    Done,
    Failed,
}

impl Status {
    /// `Done` and `Failed` end the step sequence.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Exploring)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exploring => "exploring",
            Self::Done => "done",
            Self::Failed => "failed",
        })
    }
}

/// A solution: the actions taken from the start and the cells they reach,
/// in start→goal order. The start cell itself is not included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub actions: Vec<Action>,
    pub cells: Vec<Cell>,
}

impl Path {
    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The final cell, if any move was made.
    pub fn end(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Total cost of the path under `costs`.
    pub fn cost(&self, maze: &Maze, costs: &CostModel) -> f64 {
        self.cells
            .iter()
            .map(|&c| costs.step_cost(maze.classify(c)))
            .sum()
    }

    /// Apply the actions to `maze.start()` and return the cells visited.
    ///
    /// Returns `None` if a teleport action is taken from a cell without a
    /// partner.
    pub fn replay(&self, maze: &Maze) -> Option<Vec<Cell>> {
        let mut cur = maze.start();
        let mut cells = Vec::with_capacity(self.actions.len());
        for action in &self.actions {
            cur = match *action {
                Action::Move(d) => cur.step(d),
                Action::Teleport => maze.teleport_partner(cur)?,
            };
            cells.push(cur);
        }
        Some(cells)
    }
}

/// One pull's worth of progress.
///
/// `explored` is the full cumulative set of expanded cells at the time of
/// the step, not a delta.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepResult {
    pub status: Status,
    pub current: Option<Cell>,
    pub path: Option<Path>,
    pub explored: BTreeSet<Cell>,
    pub steps: usize,
    pub elapsed: Duration,
}

impl StepResult {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
