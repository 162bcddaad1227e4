use super::super::{Board, Color, MoveList, Piece, Square};

impl Board {
    pub(crate) fn pawn_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        let dir = color.pawn_direction();

        // Forward steps never capture.
        if let Some(forward) = from.offset(dir) {
            if self.is_empty(forward) {
                moves.push(self.create_simple_move(from, forward));

                if from.rank() == color.pawn_start_rank() {
                    let double = forward.offset(dir).expect("double step from home rank");
                    if self.is_empty(double) {
                        // The landing square becomes the en-passant
                        // target for the opponent's next move only.
                        moves.push(self.create_move(from, double, double, Some(double)));
                    }
                }
            }
        }

        // Diagonal steps only capture: an enemy on the target, or the
        // pawn beside us that just double-stepped (its landing square is
        // the current en-passant target).
        for side in [-1, 1] {
            let Some(diagonal) = from.offset(dir + side) else {
                continue;
            };
            match self.color_on(diagonal) {
                Some(occupant) if occupant != color => {
                    moves.push(self.create_simple_move(from, diagonal));
                }
                Some(_) => {}
                None => {
                    let beside = from.offset(side).expect("file beside a legal diagonal");
                    if self.en_passant_target == Some(beside)
                        && self.value_at(beside).is(color.opponent(), Piece::Pawn)
                    {
                        moves.push(self.create_move(from, diagonal, beside, None));
                    }
                }
            }
        }

        moves
    }
}
