//! Legal move generation.
//!
//! Pseudo-legal candidates are produced per piece kind from fixed offset
//! tables, then filtered by the one legality mechanism used for every
//! kind: tentatively apply the move, test the mover's own king for
//! attack, unapply. No pin detection exists or is needed.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, MoveList, Piece, Square, SquareValue};

impl Board {
    /// All legal moves for the piece on `from`; empty for an empty square.
    ///
    /// Recomputed fresh on every call - results are not cached across
    /// board mutations.
    pub fn moves_from(&mut self, from: Square) -> MoveList {
        let mut legal = MoveList::new();
        let Some((color, piece)) = self.piece_at(from) else {
            return legal;
        };

        let candidates = self.pseudo_moves(from, color, piece);
        for m in candidates.iter() {
            if m.is_castling() && !self.castle_path_is_safe(&m, color) {
                continue;
            }

            self.apply(&m, None);
            if !self.is_in_check(color) {
                legal.push(m);
            }
            self.unapply(&m);
        }
        legal
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&mut self) -> MoveList {
        let color = self.current_color();
        let mut moves = MoveList::new();
        for from in Square::all() {
            if self.color_on(from) != Some(color) {
                continue;
            }
            for m in self.moves_from(from).iter() {
                moves.push(m);
            }
        }
        moves
    }

    /// True if `color` has at least one legal move. Short-circuits on the
    /// first one found; used to tell checkmate from stalemate.
    pub fn has_any_legal_moves(&mut self, color: Color) -> bool {
        for from in Square::all() {
            let Some((occupant, piece)) = self.piece_at(from) else {
                continue;
            };
            if occupant != color {
                continue;
            }
            let candidates = self.pseudo_moves(from, color, piece);
            for m in candidates.iter() {
                if m.is_castling() && !self.castle_path_is_safe(&m, color) {
                    continue;
                }
                self.apply(&m, None);
                let safe = !self.is_in_check(color);
                self.unapply(&m);
                if safe {
                    return true;
                }
            }
        }
        false
    }

    fn pseudo_moves(&self, from: Square, color: Color, piece: Piece) -> MoveList {
        match piece {
            Piece::Pawn => self.pawn_moves(from, color),
            Piece::Knight => self.knight_moves(from, color),
            Piece::Bishop => self.slider_moves(from, color, &super::BISHOP_OFFSETS),
            Piece::Rook => self.slider_moves(from, color, &super::ROOK_OFFSETS),
            Piece::Queen => self.slider_moves(from, color, &super::KING_OFFSETS),
            Piece::King => self.king_moves(from, color),
        }
    }

    /// Castling additionally requires the king's start square, crossed
    /// square and destination to be unattacked. Failing this excludes the
    /// whole wing, not just the final target.
    fn castle_path_is_safe(&self, m: &Move, color: Color) -> bool {
        let crossed = Square::new(m.from.rank(), (m.from.file() + m.to.file()) / 2)
            .expect("castle crossing square");
        let enemy = color.opponent();
        !self.is_square_attacked(m.from, enemy)
            && !self.is_square_attacked(crossed, enemy)
            && !self.is_square_attacked(m.to, enemy)
    }

    /// Build a move record capturing whatever sits on `captured_at`.
    pub(crate) fn create_move(
        &self,
        from: Square,
        to: Square,
        captured_at: Square,
        ep_target: Option<Square>,
    ) -> Move {
        Move {
            from,
            to,
            moved: self.value_at(from),
            captured: self.value_at(captured_at),
            captured_at,
            ep_target,
        }
    }

    /// Quiet or plain-capture move: the captured square is the target.
    pub(crate) fn create_simple_move(&self, from: Square, to: Square) -> Move {
        self.create_move(from, to, to, None)
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    ///
    /// Promotions count once per destination square here, since the
    /// promotion kind is chosen at apply time rather than generated.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves.iter() {
            let mut child = self.clone();
            child.advance(&m);
            nodes += child.perft(depth - 1);
        }

        nodes
    }

    /// Commit `m` without hash, repetition or game-state bookkeeping:
    /// squares, clocks, en-passant target and side to move only. Promotes
    /// to a queen when the move promotes. Used by perft.
    pub(crate) fn advance(&mut self, m: &Move) {
        let color = m.moved.color();
        let promoting =
            m.moved.kind() == Some(Piece::Pawn) && m.to.rank() == color.pawn_promotion_rank();
        self.apply(m, promoting.then_some(Piece::Queen));

        if m.is_capture() || m.is_pawn_move() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        self.en_passant_target = m.ep_target;
        self.white_to_move = !self.white_to_move;
    }

    /// Push a step move onto `moves` unless `to` holds an own piece.
    /// Returns the stepped-on value for the caller's ray logic.
    pub(crate) fn push_step(
        &self,
        moves: &mut MoveList,
        from: Square,
        to: Square,
        color: Color,
    ) -> SquareValue {
        let value = self.value_at(to);
        match value.decode() {
            Some((occupant, _)) if occupant == color => {}
            _ => moves.push(self.create_simple_move(from, to)),
        }
        value
    }
}
