//! Chess board representation and game logic.
//!
//! Uses a 0x88 mailbox board for move generation and rule enforcement.
//! Supports full chess rules including castling, en passant, promotions,
//! and draw-condition tracking (threefold repetition, fifty-move rule).
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let mut board = Board::new();
//! let from: Square = "e2".parse().unwrap();
//! let moves = board.moves_from(from);
//! println!("e2 pawn has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
#[cfg(debug_assertions)]
mod debug;
mod error;
mod game;
mod make_unmake;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{MoveError, SquareError};
pub use game::GameStatus;
pub use state::Board;
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, Square};

pub(crate) use attacks::{BISHOP_OFFSETS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_OFFSETS};
pub(crate) use types::{SquareValue, PROMOTION_PIECES};
