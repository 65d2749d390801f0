use std::fmt;

/// Invalid solver configuration, rejected before any step is pulled.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A cost is negative, NaN or infinite.
    InvalidCost { name: &'static str, value: f64 },
    /// The heuristic weight is negative, NaN or infinite.
    InvalidHeuristicWeight(f64),
    /// The wall-follower iteration cap is zero.
    ZeroIterationCap,
    /// No strategy has this name.
    UnknownStrategy(String),
    /// No hand has this name.
    UnknownHand(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCost { name, value } => {
                write!(f, "{name} must be a finite non-negative number, got {value}")
            }
            Self::InvalidHeuristicWeight(w) => {
                write!(f, "heuristic weight must be a finite non-negative number, got {w}")
            }
            Self::ZeroIterationCap => write!(f, "iteration cap must be at least 1"),
            Self::UnknownStrategy(s) => write!(f, "unknown strategy \u{201c}{s}\u{201d}"),
            Self::UnknownHand(s) => {
                write!(f, "unknown hand \u{201c}{s}\u{201d} (expected left or right)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Misuse of a strategy handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// A step was pulled after the terminal step had been produced.
    Finished,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished => write!(f, "strategy already produced its terminal step"),
        }
    }
}

impl std::error::Error for SolveError {}
