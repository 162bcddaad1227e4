//! Move record and move list.

use std::fmt;
use std::ops::Index;

use super::piece::Piece;
use super::square::Square;
use super::value::SquareValue;

/// A single move, carrying everything the unapplier needs to restore the
/// pre-move board exactly.
///
/// The captured byte may come from a square other than `to`: for an en
/// passant capture the victim sits beside the capturer, not on the
/// diagonal target. The promotion kind is not part of the move; it is an
/// argument at apply time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    /// Byte at `from` before the move, virgin flag included.
    pub(crate) moved: SquareValue,
    /// Byte at `captured_at` before the move; `EMPTY` for a quiet move.
    pub(crate) captured: SquareValue,
    /// Square the captured byte came from. Equals `to` except en passant.
    pub(crate) captured_at: Square,
    /// En-passant target this move leaves behind (double pawn pushes only).
    pub(crate) ep_target: Option<Square>,
}

impl Move {
    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub fn is_capture(self) -> bool {
        !self.captured.is_empty()
    }

    /// Returns true if this move is an en passant capture
    #[inline]
    #[must_use]
    pub fn is_en_passant(self) -> bool {
        self.is_capture() && self.captured_at != self.to
    }

    /// Returns true if this move is castling (a king moving two files)
    #[inline]
    #[must_use]
    pub fn is_castling(self) -> bool {
        self.moved.kind() == Some(Piece::King)
            && (i16::from(self.from.file()) - i16::from(self.to.file())).abs() == 2
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub fn is_double_push(self) -> bool {
        self.ep_target.is_some()
    }

    /// Returns true if this move is made by a pawn
    #[inline]
    #[must_use]
    pub fn is_pawn_move(self) -> bool {
        self.moved.kind() == Some(Piece::Pawn)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

pub(crate) const MAX_MOVES: usize = 256;

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Option<Move>; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [None; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = Some(mv);
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves[..self.len].iter().map(|m| m.expect("filled slot"))
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            self.moves[idx]
        } else {
            None
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Find the move targeting `to`, if one was generated.
    #[must_use]
    pub fn towards(&self, to: Square) -> Option<Move> {
        self.iter().find(|m| m.to == to)
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        self.moves[idx].as_ref().expect("filled slot")
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            mv
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}
