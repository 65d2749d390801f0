//! Traversal costs of destination cells.

use mazer_core::TileKind;

/// Maps a destination's tile kind to the cost of stepping onto it.
///
/// Overrides are checked in a fixed order (reward, penalty, hint) so at most
/// one applies; anything else costs `base`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    pub base: f64,
    pub reward: f64,
    pub penalty: f64,
    pub hint: f64,
}

impl CostModel {
    pub const BASE: f64 = 1.0;
    pub const REWARD: f64 = 0.5;
    pub const HINT: f64 = 0.7;
    /// Penalty weight used by Dijkstra unless configured.
    pub const DIJKSTRA_PENALTY: f64 = 5.0;
    /// Penalty weight used by A* unless configured.
    pub const ASTAR_PENALTY: f64 = 2.0;

    /// Default prices with the given penalty weight.
    pub const fn with_penalty(penalty: f64) -> Self {
        Self {
            base: Self::BASE,
            reward: Self::REWARD,
            penalty,
            hint: Self::HINT,
        }
    }

    /// Every cell costs 1.
    pub const fn uniform() -> Self {
        Self {
            base: 1.0,
            reward: 1.0,
            penalty: 1.0,
            hint: 1.0,
        }
    }

    /// Cost of stepping onto a cell of the given kind.
    pub fn step_cost(&self, kind: Option<TileKind>) -> f64 {
        match kind {
            Some(k) if k.is_reward() => self.reward,
            Some(k) if k.is_penalty() => self.penalty,
            Some(TileKind::Hint) => self.hint,
            _ => self.base,
        }
    }

    /// The cheapest possible step, used to scale admissible heuristics.
    pub fn min_step_cost(&self) -> f64 {
        self.base.min(self.reward).min(self.penalty).min(self.hint)
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::with_penalty(Self::DIJKSTRA_PENALTY)
    }
}
