use mazer_core::{Cell, Maze};

use crate::neighbors::{Move, push_moves};

/// Minimal search interface: move enumeration.
pub trait Pather {
    /// Append the moves available from `c` into `buf`. The caller clears
    /// `buf` before calling.
    fn moves(&self, c: Cell, buf: &mut Vec<Move>);
}

/// Pather with weighted (non-negative) moves.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to `to`. Must be >= 0.
    fn cost(&self, from: Cell, to: Cell) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `goal`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Cell, goal: Cell) -> f64;
}

/// The maze itself is the authoritative adjacency source: open cardinal
/// neighbours plus the optional teleport jump.
impl Pather for Maze {
    fn moves(&self, c: Cell, buf: &mut Vec<Move>) {
        push_moves(c, |n| self.is_open(n), self.teleport_partner(c), buf);
    }
}
