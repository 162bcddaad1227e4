use super::super::{Board, Color, MoveList, Square};

impl Board {
    /// Sliding moves along each direction in `rays`: up to seven steps,
    /// stopping at the board edge or the first occupied square, which is
    /// included when it holds an enemy piece.
    pub(crate) fn slider_moves(&self, from: Square, color: Color, rays: &[i16]) -> MoveList {
        let mut moves = MoveList::new();
        for &delta in rays {
            let mut cursor = from;
            while let Some(to) = cursor.offset(delta) {
                let value = self.push_step(&mut moves, from, to, color);
                if !value.is_empty() {
                    break;
                }
                cursor = to;
            }
        }
        moves
    }
}
