//! Error types for board operations.

use std::fmt;

use super::game::GameStatus;
use super::{Piece, Square};

/// Reasons `Board::try_move` rejects a move. All are recoverable: the
/// board is left untouched and the caller may retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The start square is empty
    EmptySquare { from: Square },
    /// The piece on the start square belongs to the other side; a caller
    /// bug, reported distinctly from an ordinary illegal move
    WrongSide { from: Square },
    /// The target is not among the legal moves for the start square
    Illegal { from: Square, to: Square },
    /// A pawn reaches its farthest rank and no promotion kind was given
    PromotionRequired { from: Square, to: Square },
    /// The supplied promotion kind is not a legal choice
    InvalidPromotion { piece: Piece },
    /// The game has already ended in checkmate or stalemate
    GameOver { status: GameStatus },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { from } => {
                write!(f, "No piece on {from}")
            }
            MoveError::WrongSide { from } => {
                write!(f, "Piece on {from} does not belong to the side to move")
            }
            MoveError::Illegal { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
            MoveError::PromotionRequired { from, to } => {
                write!(f, "Move {from}{to} promotes and needs a promotion piece")
            }
            MoveError::InvalidPromotion { piece } => {
                write!(f, "Cannot promote to {}", piece.to_char())
            }
            MoveError::GameOver { status } => {
                write!(f, "Game is over: {status}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_empty_square() {
        let from: Square = "e4".parse().unwrap();
        let err = MoveError::EmptySquare { from };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_move_error_wrong_side() {
        let from: Square = "e7".parse().unwrap();
        let err = MoveError::WrongSide { from };
        assert!(err.to_string().contains("e7"));
    }

    #[test]
    fn test_move_error_illegal() {
        let from: Square = "e2".parse().unwrap();
        let to: Square = "e5".parse().unwrap();
        let err = MoveError::Illegal { from, to };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_move_error_invalid_promotion() {
        let err = MoveError::InvalidPromotion {
            piece: crate::board::Piece::King,
        };
        assert!(err.to_string().contains('k'));
    }

    #[test]
    fn test_move_error_equality() {
        let from: Square = "a1".parse().unwrap();
        let err1 = MoveError::EmptySquare { from };
        let err2 = MoveError::EmptySquare { from };
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_square_error_rank_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_error_clone() {
        let err = SquareError::InvalidNotation {
            notation: "i9".to_string(),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
