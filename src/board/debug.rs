use super::{Board, Color, Square};

#[cfg(debug_assertions)]
impl Board {
    /// Debug helper to print the board grid and rule state
    pub fn debug_board(&self) {
        println!("Side to move: {}", self.current_color());
        if let Some(ep_target) = self.en_passant_target {
            println!("EP Target: {ep_target}");
        }
        println!("Halfmove clock: {}", self.halfmove_clock);
        println!("Hash: {:#018x}", self.hash);

        println!("  +---+---+---+---+---+---+---+---+");
        for rank in (0..8).rev() {
            print!("{} |", rank + 1);
            for file in 0..8 {
                let sq = Square::new(rank, file).expect("grid square");
                let ch = match self.piece_at(sq) {
                    Some((Color::White, piece)) => piece.to_char().to_ascii_uppercase(),
                    Some((Color::Black, piece)) => piece.to_char(),
                    None => '.',
                };
                let virgin = if self.is_virgin(sq) { '*' } else { ' ' };
                print!(" {ch}{virgin}|");
            }
            println!("\n  +---+---+---+---+---+---+---+---+");
        }
        println!("    a   b   c   d   e   f   g   h");
        println!("------------------------------------");
    }
}
