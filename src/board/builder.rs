//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece; the setup layer for tests
//! and embedders (there is no FEN parser in this crate).
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, Piece::King)
//!     .piece("e8".parse().unwrap(), Color::Black, Piece::King)
//!     .piece("a2".parse().unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece, bool)>,
    side_to_move: Color,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            en_passant_target: None,
            halfmove_clock: 0,
        }
    }

    /// Place a piece. Kings and rooks are placed with their virgin flag
    /// set, i.e. treated as never having moved.
    #[must_use]
    pub fn piece(mut self, sq: Square, color: Color, piece: Piece) -> Self {
        let virgin = matches!(piece, Piece::King | Piece::Rook);
        self.pieces.push((sq, color, piece, virgin));
        self
    }

    /// Place a piece that has already moved (no virgin flag); relevant
    /// for kings and rooks when castling must be ruled out.
    #[must_use]
    pub fn moved_piece(mut self, sq: Square, color: Color, piece: Piece) -> Self {
        self.pieces.push((sq, color, piece, false));
        self
    }

    /// Set which side moves next.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the en-passant target (a pawn's double-step landing square).
    #[must_use]
    pub fn en_passant_target(mut self, sq: Square) -> Self {
        self.en_passant_target = Some(sq);
        self
    }

    /// Set the half-move clock (half-moves since capture or pawn move).
    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Build the board: place the pieces, compute the position hash and
    /// count the position once in the repetition table.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (sq, color, piece, virgin) in self.pieces {
            board.set_piece(sq, color, piece, virgin);
        }
        board.white_to_move = self.side_to_move == Color::White;
        board.en_passant_target = self.en_passant_target;
        board.halfmove_clock = self.halfmove_clock;
        board.hash = board.compute_hash();
        board.repetition_counts.set(board.hash, 1);
        board
    }
}
