use std::fmt;
use std::str::FromStr;

use mazer_core::Maze;

use crate::cost::CostModel;
use crate::error::ConfigError;

/// Which hand a wall follower keeps on the wall.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Hand {
    #[default]
    Left,
    Right,
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

impl FromStr for Hand {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            _ => Err(ConfigError::UnknownHand(s.to_string())),
        }
    }
}

/// Configuration shared by all strategies; each reads the fields it needs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Multiplier on the A* heuristic. Values above 1 trade optimality for
    /// fewer expansions.
    pub heuristic_weight: f64,
    /// Cost of penalty and checkpoint tiles. `None` uses the strategy's own
    /// default ([`CostModel::DIJKSTRA_PENALTY`], [`CostModel::ASTAR_PENALTY`]).
    pub penalty_cost: Option<f64>,
    /// Cost of reward and key tiles.
    pub reward_cost: f64,
    /// Cost of hint tiles.
    pub hint_cost: f64,
    /// Overrides the hand of a wall-follower strategy.
    pub hand: Option<Hand>,
    /// Wall-follower move budget. `None` means `4 × width × height`.
    pub iteration_cap: Option<usize>,
    /// Whether pricing a hint tile unlocks its neighbours (in the solver's
    /// private view of the maze).
    pub unlock_hints: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            heuristic_weight: 1.0,
            penalty_cost: None,
            reward_cost: CostModel::REWARD,
            hint_cost: CostModel::HINT,
            hand: None,
            iteration_cap: None,
            unlock_hints: true,
        }
    }
}

fn check_cost(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidCost { name, value })
    }
}

impl SolverConfig {
    /// Reject negative or non-finite numbers and a zero iteration cap.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.heuristic_weight.is_finite() && self.heuristic_weight >= 0.0) {
            return Err(ConfigError::InvalidHeuristicWeight(self.heuristic_weight));
        }
        if let Some(p) = self.penalty_cost {
            check_cost("penalty cost", p)?;
        }
        check_cost("reward cost", self.reward_cost)?;
        check_cost("hint cost", self.hint_cost)?;
        if self.iteration_cap == Some(0) {
            return Err(ConfigError::ZeroIterationCap);
        }
        Ok(())
    }

    /// The cost model for a strategy whose penalty weight defaults to
    /// `default_penalty`.
    pub fn cost_model(&self, default_penalty: f64) -> CostModel {
        CostModel {
            base: CostModel::BASE,
            reward: self.reward_cost,
            penalty: self.penalty_cost.unwrap_or(default_penalty),
            hint: self.hint_cost,
        }
    }

    /// The wall-follower move budget for `maze`.
    pub fn iteration_cap_for(&self, maze: &Maze) -> usize {
        self.iteration_cap
            .unwrap_or(4 * maze.width() * maze.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(SolverConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_negative_costs() {
        let cfg = SolverConfig {
            penalty_cost: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidCost {
                name: "penalty cost",
                value: -1.0
            })
        );
        let cfg = SolverConfig {
            reward_cost: -0.5,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = SolverConfig {
            hint_cost: f64::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_bad_weight_and_cap() {
        let cfg = SolverConfig {
            heuristic_weight: -2.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidHeuristicWeight(-2.0)));
        let cfg = SolverConfig {
            iteration_cap: Some(0),
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroIterationCap));
    }

    #[test]
    fn penalty_defaults_per_strategy() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.cost_model(CostModel::DIJKSTRA_PENALTY).penalty, 5.0);
        assert_eq!(cfg.cost_model(CostModel::ASTAR_PENALTY).penalty, 2.0);
        let cfg = SolverConfig {
            penalty_cost: Some(3.0),
            ..Default::default()
        };
        assert_eq!(cfg.cost_model(CostModel::ASTAR_PENALTY).penalty, 3.0);
    }

    #[test]
    fn default_iteration_cap() {
        let maze = Maze::parse("A  \n  B").unwrap();
        assert_eq!(SolverConfig::default().iteration_cap_for(&maze), 24);
    }

    #[test]
    fn parse_hand() {
        assert_eq!("Right".parse::<Hand>(), Ok(Hand::Right));
        assert_eq!("l".parse::<Hand>(), Ok(Hand::Left));
        assert!("up".parse::<Hand>().is_err());
    }
}
