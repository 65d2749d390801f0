//! Special tile kinds and the glyphs of the maze text format.

use std::fmt;

pub const WALL: char = '#';
pub const OPEN: char = ' ';
pub const START: char = 'A';
pub const GOAL: char = 'B';
pub const TELEPORT: char = 'T';

/// A classified special cell. Kinds are mutually exclusive per cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TileKind {
    Key,
    Hint,
    Checkpoint,
    Reward,
    Penalty,
}

impl TileKind {
    pub const ALL: [TileKind; 5] = [
        Self::Key,
        Self::Hint,
        Self::Checkpoint,
        Self::Reward,
        Self::Penalty,
    ];

    /// Kind encoded by a glyph, if any.
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            'K' => Some(Self::Key),
            'H' => Some(Self::Hint),
            'C' => Some(Self::Checkpoint),
            'N' => Some(Self::Reward),
            'P' => Some(Self::Penalty),
            _ => None,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Key => 'K',
            Self::Hint => 'H',
            Self::Checkpoint => 'C',
            Self::Reward => 'N',
            Self::Penalty => 'P',
        }
    }

    /// Tiles priced below a plain step (keys and rewards).
    pub const fn is_reward(self) -> bool {
        matches!(self, Self::Key | Self::Reward)
    }

    /// Tiles priced above a plain step (checkpoints and penalties).
    pub const fn is_penalty(self) -> bool {
        matches!(self, Self::Checkpoint | Self::Penalty)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Hint => "hint",
            Self::Checkpoint => "checkpoint",
            Self::Reward => "reward",
            Self::Penalty => "penalty",
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a glyph denotes a passable cell. Unknown glyphs are walls.
pub fn passable(ch: char) -> bool {
    matches!(ch, OPEN | START | GOAL | TELEPORT) || TileKind::from_glyph(ch).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_round_trip() {
        for kind in TileKind::ALL {
            assert_eq!(TileKind::from_glyph(kind.glyph()), Some(kind));
        }
        assert_eq!(TileKind::from_glyph('x'), None);
    }

    #[test]
    fn reward_and_penalty_are_disjoint() {
        for kind in TileKind::ALL {
            assert!(!(kind.is_reward() && kind.is_penalty()));
        }
        assert!(!TileKind::Hint.is_reward() && !TileKind::Hint.is_penalty());
    }

    #[test]
    fn passable_glyphs() {
        for ch in [' ', 'A', 'B', 'T', 'K', 'H', 'C', 'N', 'P'] {
            assert!(passable(ch), "{ch:?}");
        }
        for ch in ['#', '.', 'x', '█'] {
            assert!(!passable(ch), "{ch:?}");
        }
    }
}
