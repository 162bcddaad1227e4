//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::board::{Board, Piece};

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Commit one pseudo-random legal move, supplying a queen when the move
/// promotes. Returns false when the game is over or no move exists.
fn play_random_move(board: &mut Board, rng: &mut StdRng) -> bool {
    if board.status().is_terminal() {
        return false;
    }
    let moves = board.legal_moves();
    if moves.is_empty() {
        return false;
    }
    let m = moves[rng.gen_range(0..moves.len())];
    let promotion = board
        .would_promote(m.from(), m.to())
        .then_some(Piece::Queen);
    board
        .try_move(m.from(), m.to(), promotion)
        .expect("generated move must be accepted");
    true
}

proptest! {
    /// Property: for every legal move, apply followed by unapply restores
    /// the square array byte-for-byte, at every position of a playout.
    #[test]
    fn prop_apply_unapply_restores_squares(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let before = board.squares;
            for m in board.legal_moves().iter() {
                board.apply(&m, None);
                board.unapply(&m);
                prop_assert_eq!(board.squares, before);
            }
            if !play_random_move(&mut board, &mut rng) {
                break;
            }
        }
    }

    /// Property: no legal move leaves the mover's own king attacked
    /// immediately after application.
    #[test]
    fn prop_legal_moves_keep_own_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let mover = board.side_to_move();
            for m in board.legal_moves().iter() {
                board.apply(&m, None);
                prop_assert!(!board.is_in_check(mover), "move {} exposes the king", m);
                board.unapply(&m);
            }
            if !play_random_move(&mut board, &mut rng) {
                break;
            }
        }
    }

    /// Property: the committed hash always matches a recompute, and the
    /// half-move clock is zero exactly after a capture or pawn move.
    #[test]
    fn prop_commit_bookkeeping(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let side_before = board.side_to_move();
            if !play_random_move(&mut board, &mut rng) {
                break;
            }
            let m = board.last_move().expect("a move was just made");
            prop_assert_eq!(board.hash(), board.compute_hash());
            prop_assert_ne!(board.side_to_move(), side_before);
            if m.is_capture() || m.is_pawn_move() {
                prop_assert_eq!(board.halfmove_clock(), 0);
            } else {
                prop_assert!(board.halfmove_clock() > 0);
            }
        }
    }

    /// Property: undoing the most recent move restores squares, side to
    /// move, hash and status.
    #[test]
    fn prop_undo_restores_position(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            if board.status().is_terminal() {
                break;
            }
            let squares_before = board.squares;
            let side_before = board.side_to_move();
            let hash_before = board.hash();

            if !play_random_move(&mut board, &mut rng) {
                break;
            }
            let mut rewound = board.clone();
            prop_assert!(rewound.undo_last());
            prop_assert_eq!(rewound.squares, squares_before);
            prop_assert_eq!(rewound.side_to_move(), side_before);
            prop_assert_eq!(rewound.hash(), hash_before);
        }
    }
}
