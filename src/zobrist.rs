//! Zobrist hashing for positions.
//!
//! Composition-sensitive 64-bit digests of board + side to move, used
//! only as repetition-table keys; collisions are treated as impossible
//! for practical purposes.

use std::sync::LazyLock;

use rand::prelude::*;

use crate::board::{Board, Color, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][color][0x88 square index]
    pub(crate) piece_keys: [[[u64; Square::COUNT]; 2]; 6],
    pub(crate) black_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed so hashes are reproducible across runs.
        let mut rng = StdRng::seed_from_u64(0x88C4_E55E_u64);
        let mut piece_keys = [[[0; Square::COUNT]; 2]; 6];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key: rng.gen(),
        }
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: LazyLock<ZobristKeys> = LazyLock::new(ZobristKeys::new);

impl Board {
    /// Hash of every occupied square's (index, kind, color) plus the side
    /// to move. Recomputed per accepted move; the legality filter's
    /// tentative applications never hash.
    pub(crate) fn compute_hash(&self) -> u64 {
        let mut hash: u64 = 0;

        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                hash ^= ZOBRIST.piece_keys[piece.index()][color.index()][sq.index()];
            }
        }

        if self.side_to_move() == Color::Black {
            hash ^= ZOBRIST.black_to_move_key;
        }

        hash
    }
}
