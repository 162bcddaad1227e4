//! Top-level move contract: validate, commit, classify.
//!
//! `try_move` is the single mutation entry point for callers. A rejected
//! move leaves the board untouched; an accepted move updates the draw
//! counters, flips the side to move and re-evaluates the opponent's
//! check/mobility to classify the game state.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveError;
use super::{Board, Color, Piece, Square, PROMOTION_PIECES};

/// Game state as seen by the rules engine.
///
/// Terminal once `Checkmate` or `Stalemate` is reported: the board stays
/// queryable but no further moves are accepted. `Checkmate(c)` means
/// color `c` has been mated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Checkmate(Color),
    Stalemate,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Checkmate(color) => write!(f, "{color} is checkmated"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Attempt the move `from` -> `to` for the side to move.
    ///
    /// Rejections return an error and mutate nothing. A promotion kind is
    /// required exactly when a pawn reaches its farthest rank; a kind
    /// supplied for any other move is ignored.
    ///
    /// On acceptance: applies the move, resets the half-move clock on a
    /// capture or pawn move (otherwise increments it), records the new
    /// en-passant target, flips the side to move, counts the new position
    /// for repetition, re-derives the draw-claimable flag, and classifies
    /// the new side to move as in-progress / checkmated / stalemated.
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver {
                status: self.status,
            });
        }

        let Some((color, _)) = self.piece_at(from) else {
            return Err(MoveError::EmptySquare { from });
        };
        if color != self.current_color() {
            return Err(MoveError::WrongSide { from });
        }

        let Some(m) = self.moves_from(from).towards(to) else {
            #[cfg(feature = "logging")]
            log::trace!("rejected {from}{to}: not a legal move");
            return Err(MoveError::Illegal { from, to });
        };

        let promotion = if self.would_promote(from, to) {
            match promotion {
                Some(kind) if PROMOTION_PIECES.contains(&kind) => Some(kind),
                Some(kind) => return Err(MoveError::InvalidPromotion { piece: kind }),
                None => return Err(MoveError::PromotionRequired { from, to }),
            }
        } else {
            None
        };

        self.apply(&m, promotion);
        if m.is_capture() || m.is_pawn_move() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        self.en_passant_target = m.ep_target;
        self.white_to_move = !self.white_to_move;

        self.hash = self.compute_hash();
        let repetitions = self.repetition_counts.increment(self.hash);
        self.draw_claimable = self.halfmove_clock >= 100 || repetitions >= 3;
        self.last_move = Some(m);

        let defender = self.current_color();
        let in_check = self.is_in_check(defender);
        let mobile = self.has_any_legal_moves(defender);
        self.status = match (in_check, mobile) {
            (true, false) => GameStatus::Checkmate(defender),
            (false, false) => GameStatus::Stalemate,
            _ => GameStatus::InProgress,
        };

        #[cfg(feature = "logging")]
        log::debug!(
            "accepted {m}; status {}, halfmove clock {}, draw claimable {}",
            self.status,
            self.halfmove_clock,
            self.draw_claimable
        );

        Ok(self.status)
    }

    /// True if `from` -> `to` would be accepted for the piece on `from`.
    #[must_use]
    pub fn is_legal(&mut self, from: Square, to: Square) -> bool {
        self.moves_from(from).towards(to).is_some()
    }

    /// True if moving `from` -> `to` would require a promotion kind:
    /// a pawn of the side to move reaching its farthest rank.
    #[must_use]
    pub fn would_promote(&self, from: Square, to: Square) -> bool {
        match self.piece_at(from) {
            Some((color, Piece::Pawn)) => to.rank() == color.pawn_promotion_rank(),
            _ => false,
        }
    }

    /// Revert the single most recently accepted move. Returns false when
    /// there is nothing to undo.
    ///
    /// Restores the squares, side to move, hash, repetition count and
    /// game status. The previous en-passant target and half-move clock
    /// are NOT restored - this exists to roll back an in-flight move
    /// attempt (e.g. a time forfeit), not to navigate history. After an
    /// undo the en-passant target is cleared.
    pub fn undo_last(&mut self) -> bool {
        let Some(m) = self.last_move.take() else {
            return false;
        };

        self.repetition_counts.decrement(self.hash);
        self.unapply(&m);
        self.white_to_move = !self.white_to_move;
        self.en_passant_target = None;
        self.hash = self.compute_hash();
        self.status = GameStatus::InProgress;
        self.draw_claimable =
            self.halfmove_clock >= 100 || self.repetition_counts.get(self.hash) >= 3;

        #[cfg(feature = "logging")]
        log::debug!("undid {m}");

        true
    }
}
