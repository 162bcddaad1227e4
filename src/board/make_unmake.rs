//! Move application and reversal.
//!
//! `apply`/`unapply` mutate square bytes only. Side to move, the
//! en-passant target, the half-move clock, the hash and the repetition
//! table are commit-layer concerns (`game.rs`); keeping them out of here
//! makes the in-generation make/unmake an exact inverse.

use super::{Board, Move, Piece, Square, SquareValue};

/// Corner and landing files for the rook in a castle, keyed by the king's
/// destination file (6 = kingside, 2 = queenside).
fn castle_rook_files(king_to_file: u8) -> (u8, u8) {
    if king_to_file == 6 {
        (7, 5)
    } else {
        (0, 3)
    }
}

impl Board {
    /// Enact `m` on the square array.
    ///
    /// Clears the start square and the captured square (which differs from
    /// the target for en passant), then writes the moved piece - virgin
    /// flag stripped - or the given promotion piece to the target. A king
    /// moving two files also relocates the matching rook and strips its
    /// virgin flag.
    pub(crate) fn apply(&mut self, m: &Move, promotion: Option<Piece>) {
        let color = m.moved.color();

        self.squares[m.captured_at.index()] = SquareValue::EMPTY;
        self.squares[m.from.index()] = SquareValue::EMPTY;
        self.squares[m.to.index()] = match promotion {
            Some(kind) => SquareValue::piece(kind, color, false),
            None => m.moved.without_virgin(),
        };

        if m.is_castling() {
            let (corner_file, landing_file) = castle_rook_files(m.to.file());
            let rank = m.to.rank();
            let corner = Square::new(rank, corner_file).expect("castle corner");
            let landing = Square::new(rank, landing_file).expect("castle rook landing");
            debug_assert!(self.value_at(corner).is(color, Piece::Rook));
            self.squares[corner.index()] = SquareValue::EMPTY;
            self.squares[landing.index()] = SquareValue::piece(Piece::Rook, color, false);
        }
    }

    /// Exactly reverse the most recently applied move.
    ///
    /// Restores the stored pre-move bytes at the start, target and
    /// captured squares (virgin flags ride along in the bytes) and, for a
    /// castle, puts the rook back in its corner with the virgin flag
    /// re-set. Only valid for the single most recent `apply`; earlier
    /// history is gone.
    pub(crate) fn unapply(&mut self, m: &Move) {
        if m.is_castling() {
            let color = m.moved.color();
            let (corner_file, landing_file) = castle_rook_files(m.to.file());
            let rank = m.to.rank();
            let corner = Square::new(rank, corner_file).expect("castle corner");
            let landing = Square::new(rank, landing_file).expect("castle rook landing");
            self.squares[landing.index()] = SquareValue::EMPTY;
            self.squares[corner.index()] = SquareValue::piece(Piece::Rook, color, true);
        }

        self.squares[m.to.index()] = SquareValue::EMPTY;
        self.squares[m.from.index()] = m.moved;
        // For a plain capture this re-fills `to`; for en passant it
        // re-fills the bypassed square; for a quiet move it writes EMPTY
        // back onto `to`.
        self.squares[m.captured_at.index()] = m.captured;
    }
}
