use super::super::{Board, Color, MoveList, Square, KNIGHT_OFFSETS};

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for delta in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(delta) {
                self.push_step(&mut moves, from, to, color);
            }
        }
        moves
    }
}
