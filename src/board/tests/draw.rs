//! Draw detection and undo tests.

use super::sq;
use crate::board::{Board, BoardBuilder, Color, GameStatus, Piece};

#[test]
fn test_threefold_repetition_sets_draw_claimable() {
    let mut board = Board::new();
    for _ in 0..2 {
        board.try_move(sq("g1"), sq("f3"), None).unwrap();
        board.try_move(sq("g8"), sq("f6"), None).unwrap();
        board.try_move(sq("f3"), sq("g1"), None).unwrap();
        board.try_move(sq("f6"), sq("g8"), None).unwrap();
    }
    // Start position seen for the third time
    assert!(board.draw_claimable());
}

#[test]
fn test_two_occurrences_are_not_claimable() {
    let mut board = Board::new();
    board.try_move(sq("g1"), sq("f3"), None).unwrap();
    board.try_move(sq("g8"), sq("f6"), None).unwrap();
    board.try_move(sq("f3"), sq("g1"), None).unwrap();
    board.try_move(sq("f6"), sq("g8"), None).unwrap();
    assert!(!board.draw_claimable());
}

#[test]
fn test_repetition_counts_side_to_move() {
    let mut board = Board::new();
    board.try_move(sq("g1"), sq("f3"), None).unwrap();
    let after_first = board.hash();
    board.try_move(sq("g8"), sq("f6"), None).unwrap();
    assert_ne!(board.hash(), after_first);
}

#[test]
fn test_hundred_halfmoves_set_draw_claimable() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .moved_piece(sq("a1"), Color::White, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::King)
        .halfmove_clock(99)
        .build();
    board.try_move(sq("a1"), sq("a2"), None).unwrap();
    assert_eq!(board.halfmove_clock(), 100);
    assert!(board.draw_claimable());
}

#[test]
fn test_pawn_move_resets_clock_before_hundred() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("d4"), Color::White, Piece::Pawn)
        .piece(sq("e8"), Color::Black, Piece::King)
        .halfmove_clock(99)
        .build();
    board.try_move(sq("d4"), sq("d5"), None).unwrap();
    assert_eq!(board.halfmove_clock(), 0);
    assert!(!board.draw_claimable());
}

#[test]
fn test_capture_resets_clock() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .moved_piece(sq("a1"), Color::White, Piece::Rook)
        .moved_piece(sq("a8"), Color::Black, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::King)
        .halfmove_clock(42)
        .build();
    board.try_move(sq("a1"), sq("a8"), None).unwrap();
    assert_eq!(board.halfmove_clock(), 0);
}

#[test]
fn test_undo_restores_squares_side_and_status() {
    let mut board = Board::new();
    let before = board.squares;
    let initial_hash = board.hash();

    board.try_move(sq("e2"), sq("e4"), None).unwrap();
    assert!(board.undo_last());

    assert_eq!(board.squares, before);
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.hash(), initial_hash);
    assert_eq!(board.status(), GameStatus::InProgress);
    // Documented limitation: the en-passant target is cleared, not restored
    assert_eq!(board.en_passant_target(), None);
}

#[test]
fn test_undo_decrements_repetition_count() {
    let mut board = Board::new();
    board.try_move(sq("g1"), sq("f3"), None).unwrap();
    let made_hash = board.hash();
    assert_eq!(board.repetition_counts.get(made_hash), 1);

    board.undo_last();
    assert_eq!(board.repetition_counts.get(made_hash), 0);
    assert_eq!(board.repetition_counts.get(board.hash()), 1);
}

#[test]
fn test_undo_without_history_returns_false() {
    let mut board = Board::new();
    assert!(!board.undo_last());
}

#[test]
fn test_undo_is_single_step() {
    let mut board = Board::new();
    board.try_move(sq("e2"), sq("e4"), None).unwrap();
    board.try_move(sq("e7"), sq("e5"), None).unwrap();
    assert!(board.undo_last());
    // Only the Black reply can be undone; the history is one move deep
    assert!(!board.undo_last());
    assert_eq!(board.piece_on(sq("e4")), Some(Piece::Pawn));
}

#[test]
fn test_undo_reopens_finished_game() {
    let mut board = Board::new();
    board.try_move(sq("f2"), sq("f3"), None).unwrap();
    board.try_move(sq("e7"), sq("e5"), None).unwrap();
    board.try_move(sq("g2"), sq("g4"), None).unwrap();
    board.try_move(sq("d8"), sq("h4"), None).unwrap();
    assert!(board.status().is_terminal());

    assert!(board.undo_last());
    assert_eq!(board.status(), GameStatus::InProgress);
    assert!(board.try_move(sq("d8"), sq("h4"), None).is_ok());
}
