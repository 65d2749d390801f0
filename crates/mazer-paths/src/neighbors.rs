use std::fmt;

use mazer_core::{Cell, Direction};

/// What led from a node's parent to the node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    Move(Direction),
    Teleport,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(d) => f.write_str(d.name()),
            Self::Teleport => f.write_str("teleport"),
        }
    }
}

/// A single available move: the action and where it lands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub action: Action,
    pub to: Cell,
}

/// Append the moves of `c` into `buf`.
///
/// Cardinal moves come first in [`Direction::ADJACENCY`] order (up, down,
/// left, right), keeping only destinations for which `is_open` holds. When
/// `c` has a teleport partner, a trailing [`Action::Teleport`] move to it is
/// appended; taking it is optional.
pub fn push_moves(
    c: Cell,
    is_open: impl Fn(Cell) -> bool,
    partner: Option<Cell>,
    buf: &mut Vec<Move>,
) {
    for dir in Direction::ADJACENCY {
        let to = c.step(dir);
        if is_open(to) {
            buf.push(Move {
                action: Action::Move(dir),
                to,
            });
        }
    }
    if let Some(to) = partner.filter(|&p| is_open(p)) {
        buf.push(Move {
            action: Action::Teleport,
            to,
        });
    }
}
