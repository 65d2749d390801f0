use std::fmt;

/// Errors that can occur when parsing maze text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text has no rows or no columns.
    Empty,
    /// The text does not contain exactly one start marker.
    StartCount(usize),
    /// The text does not contain exactly one goal marker.
    GoalCount(usize),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: empty input"),
            Self::StartCount(n) => {
                write!(f, "maze must have exactly one start point (found {n})")
            }
            Self::GoalCount(n) => write!(f, "maze must have exactly one goal (found {n})"),
        }
    }
}

impl std::error::Error for ParseError {}
