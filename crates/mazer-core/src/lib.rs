//! **mazer-core**: the maze grid model.
//!
//! This crate provides the types shared by every solver: geometry
//! primitives, special tile kinds, and the [`Maze`] grid parsed from the
//! plain-text maze format.
//!
//! # Text format
//!
//! | Glyph | Meaning |
//! |---|---|
//! | `#` | wall |
//! | space | open |
//! | `A` / `B` | start / goal (exactly one each) |
//! | `T` | teleport endpoint, paired in input order |
//! | `K`, `H`, `C`, `N`, `P` | key, hint, checkpoint, reward, penalty |
//!
//! Any other character is a wall.

pub mod error;
pub mod geom;
pub mod maze;
pub mod tiles;

pub use error::ParseError;
pub use geom::{Cell, Direction, Range};
pub use maze::Maze;
pub use tiles::TileKind;
