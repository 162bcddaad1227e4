//! Packed square byte.
//!
//! Each board slot holds one byte:
//! - bits 0-2: piece kind (0 = empty; pawns are color-specific kinds
//!   because their move direction differs)
//! - bit 3:    color (set = black)
//! - bit 4:    virgin, meaning the occupant has never moved (only
//!   meaningful for kings and rooks, consulted for castling)

use super::piece::{Color, Piece};

const KIND_MASK: u8 = 0b0000_0111;
const COLOR_BIT: u8 = 0b0000_1000;
const VIRGIN_BIT: u8 = 0b0001_0000;

const KIND_WHITE_PAWN: u8 = 1;
const KIND_BLACK_PAWN: u8 = 2;
const KIND_KNIGHT: u8 = 3;
const KIND_BISHOP: u8 = 4;
const KIND_ROOK: u8 = 5;
const KIND_QUEEN: u8 = 6;
const KIND_KING: u8 = 7;

/// Contents of one board slot. Zero is an empty square.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub(crate) struct SquareValue(u8);

impl SquareValue {
    pub(crate) const EMPTY: SquareValue = SquareValue(0);

    /// Pack a piece into a square byte.
    #[must_use]
    pub(crate) const fn piece(piece: Piece, color: Color, virgin: bool) -> Self {
        let kind = match (piece, color) {
            (Piece::Pawn, Color::White) => KIND_WHITE_PAWN,
            (Piece::Pawn, Color::Black) => KIND_BLACK_PAWN,
            (Piece::Knight, _) => KIND_KNIGHT,
            (Piece::Bishop, _) => KIND_BISHOP,
            (Piece::Rook, _) => KIND_ROOK,
            (Piece::Queen, _) => KIND_QUEEN,
            (Piece::King, _) => KIND_KING,
        };
        let mut bits = kind;
        if matches!(color, Color::Black) {
            bits |= COLOR_BIT;
        }
        if virgin {
            bits |= VIRGIN_BIT;
        }
        SquareValue(bits)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The occupying piece kind, or `None` for an empty square.
    #[inline]
    #[must_use]
    pub(crate) const fn kind(self) -> Option<Piece> {
        match self.0 & KIND_MASK {
            0 => None,
            KIND_WHITE_PAWN | KIND_BLACK_PAWN => Some(Piece::Pawn),
            KIND_KNIGHT => Some(Piece::Knight),
            KIND_BISHOP => Some(Piece::Bishop),
            KIND_ROOK => Some(Piece::Rook),
            KIND_QUEEN => Some(Piece::Queen),
            _ => Some(Piece::King),
        }
    }

    /// The occupant's color; meaningless for an empty square.
    #[inline]
    #[must_use]
    pub(crate) const fn color(self) -> Color {
        if self.0 & COLOR_BIT != 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Both occupant fields at once, `None` for an empty square.
    #[inline]
    #[must_use]
    pub(crate) const fn decode(self) -> Option<(Color, Piece)> {
        match self.kind() {
            Some(piece) => Some((self.color(), piece)),
            None => None,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn is_virgin(self) -> bool {
        self.0 & VIRGIN_BIT != 0
    }

    /// The same occupant with the virgin bit cleared (cleared whenever a
    /// piece moves; never set again).
    #[inline]
    #[must_use]
    pub(crate) const fn without_virgin(self) -> Self {
        SquareValue(self.0 & !VIRGIN_BIT)
    }

    /// True when the slot holds `piece` of `color`.
    #[inline]
    #[must_use]
    pub(crate) fn is(self, color: Color, piece: Piece) -> bool {
        self.decode() == Some((color, piece))
    }
}
