//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - node-count validation of move generation
//! - `draw.rs` - draw detection (50-move, repetition) and undo
//! - `make_unmake.rs` - apply/unapply correctness
//! - `movegen.rs` - legal move generation and the try_move contract
//! - `edge_cases.rs` - castling, en passant, promotion, game endings
//! - `proptest.rs` - property-based tests

mod draw;
mod make_unmake;
mod proptest;

use super::Square;

pub(crate) fn sq(notation: &str) -> Square {
    notation.parse().expect("test square")
}

#[cfg(feature = "serde")]
mod serde_round_trip {
    use super::sq;
    use crate::board::{Color, GameStatus, Piece, Square};

    #[test]
    fn test_square_round_trip() {
        let square = sq("e4");
        let json = serde_json::to_string(&square).unwrap();
        let back: Square = serde_json::from_str(&json).unwrap();
        assert_eq!(square, back);
    }

    #[test]
    fn test_status_round_trip() {
        let status = GameStatus::Checkmate(Color::White);
        let json = serde_json::to_string(&status).unwrap();
        let back: GameStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, back);
    }

    #[test]
    fn test_piece_round_trip() {
        for piece in Piece::ALL {
            let json = serde_json::to_string(&piece).unwrap();
            let back: Piece = serde_json::from_str(&json).unwrap();
            assert_eq!(piece, back);
        }
    }
}
