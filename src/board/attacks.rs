//! Attack detection.
//!
//! `is_square_attacked` is the single geometric primitive behind check
//! detection and castling path safety. It works backward from the target
//! square: knight jumps are probed directly, everything else by scanning
//! outward along the eight ray directions and classifying the first
//! occupied square per ray.

use super::{Board, Color, Piece, Square};

/// Knight jump deltas in 0x88 space.
pub(crate) const KNIGHT_OFFSETS: [i16; 8] = [-33, -31, -18, -14, 14, 18, 31, 33];
/// One-step deltas for kings, also the eight ray directions for queens.
pub(crate) const KING_OFFSETS: [i16; 8] = [-17, -16, -15, -1, 1, 15, 16, 17];
/// Diagonal ray directions.
pub(crate) const BISHOP_OFFSETS: [i16; 4] = [-17, -15, 15, 17];
/// Orthogonal ray directions.
pub(crate) const ROOK_OFFSETS: [i16; 4] = [-16, -1, 1, 16];

const fn is_diagonal(delta: i16) -> bool {
    matches!(delta, -17 | -15 | 15 | 17)
}

impl Board {
    /// True if any piece of `attacker` could geometrically reach `square`.
    ///
    /// Ignores whose turn it is and whether the attacking move would
    /// itself be legal; that is exactly what check detection and the
    /// castling path test need.
    pub(crate) fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        for delta in KNIGHT_OFFSETS {
            if let Some(from) = square.offset(delta) {
                if self.value_at(from).is(attacker, Piece::Knight) {
                    return true;
                }
            }
        }

        for delta in KING_OFFSETS {
            let mut cursor = square;
            let mut distance = 0u8;
            while let Some(next) = cursor.offset(delta) {
                distance += 1;
                let value = self.value_at(next);
                let Some((color, piece)) = value.decode() else {
                    cursor = next;
                    continue;
                };
                if color == attacker && attacks_from(piece, color, delta, distance) {
                    return true;
                }
                break;
            }
        }

        false
    }

    /// Locate `color`'s king by scanning the 64 real squares.
    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.value_at(sq).is(color, Piece::King))
    }

    /// True if `color`'s king stands attacked. Exactly one king of each
    /// color exists at all times; a board without one is corrupt.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = self.find_king(color).expect("king missing from board");
        self.is_square_attacked(king, color.opponent())
    }

    /// The square of the side-to-move king if it is currently in check.
    #[must_use]
    pub fn checked_king(&self) -> Option<Square> {
        let color = self.current_color();
        let king = self.find_king(color).expect("king missing from board");
        if self.is_square_attacked(king, color.opponent()) {
            Some(king)
        } else {
            None
        }
    }
}

/// Whether `piece` of `color`, sitting `distance` steps from the defended
/// square along ray `delta` (defender toward attacker), attacks it.
fn attacks_from(piece: Piece, color: Color, delta: i16, distance: u8) -> bool {
    match piece {
        Piece::Queen | Piece::Rook | Piece::Bishop => {
            if is_diagonal(delta) {
                piece.attacks_diagonally()
            } else {
                piece.attacks_straight()
            }
        }
        Piece::King => distance == 1,
        // A pawn covers the two diagonals it would capture along: walking
        // from the defender, a white attacker lies below (-15/-17), a
        // black one above (+15/+17).
        Piece::Pawn => {
            distance == 1
                && match color {
                    Color::White => delta == -15 || delta == -17,
                    Color::Black => delta == 15 || delta == 17,
                }
        }
        // Knight jumps are not ray-shaped; probed separately.
        Piece::Knight => false,
    }
}
