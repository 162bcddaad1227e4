use super::super::{Board, Color, MoveList, Piece, Square, KING_OFFSETS};

impl Board {
    pub(crate) fn king_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for delta in KING_OFFSETS {
            if let Some(to) = from.offset(delta) {
                self.push_step(&mut moves, from, to, color);
            }
        }

        // Castling candidates: a virgin king on its home file with a
        // matching virgin rook in the corner and nothing strictly between
        // them. The attacked-square conditions are checked by the legality
        // filter before the simulation step.
        if self.value_at(from).is_virgin() && from.file() == 4 {
            let rank = from.rank();
            if self.castle_wing_open(color, rank, 7, &[5, 6]) {
                let to = Square::new(rank, 6).expect("kingside castle target");
                moves.push(self.create_simple_move(from, to));
            }
            if self.castle_wing_open(color, rank, 0, &[1, 2, 3]) {
                let to = Square::new(rank, 2).expect("queenside castle target");
                moves.push(self.create_simple_move(from, to));
            }
        }

        moves
    }

    fn castle_wing_open(&self, color: Color, rank: u8, corner_file: u8, between: &[u8]) -> bool {
        let corner = Square::new(rank, corner_file).expect("castle corner");
        let rook = self.value_at(corner);
        if !rook.is(color, Piece::Rook) || !rook.is_virgin() {
            return false;
        }
        between.iter().all(|&file| {
            let sq = Square::new(rank, file).expect("castle between square");
            self.is_empty(sq)
        })
    }
}
