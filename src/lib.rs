pub mod board;
pub mod zobrist;

pub use board::{
    Board, BoardBuilder, Color, GameStatus, Move, MoveError, MoveList, Piece, Square, SquareError,
};
