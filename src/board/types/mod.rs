//! Core chess types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - 0x88 board square representation (u8)
//! - `SquareValue` - packed square byte (kind, color, virgin flag)
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;
mod value;

// Re-export all public types
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use piece::PROMOTION_PIECES;
pub(crate) use value::SquareValue;
