//! Apply/unapply round-trip tests.

use super::sq;
use crate::board::{Board, BoardBuilder, Color, Piece};

#[test]
fn test_apply_unapply_round_trips_every_opening_move() {
    let mut board = Board::new();
    let before = board.squares;
    for m in board.legal_moves().iter() {
        board.apply(&m, None);
        board.unapply(&m);
        assert_eq!(board.squares, before, "move {m} did not round-trip");
    }
}

#[test]
fn test_apply_unapply_round_trips_captures() {
    let mut board = Board::new();
    board.try_move(sq("e2"), sq("e4"), None).unwrap();
    board.try_move(sq("d7"), sq("d5"), None).unwrap();
    let before = board.squares;
    let capture = board.moves_from(sq("e4")).towards(sq("d5")).unwrap();
    board.apply(&capture, None);
    assert!(board.is_empty(sq("e4")));
    board.unapply(&capture);
    assert_eq!(board.squares, before);
}

#[test]
fn test_en_passant_apply_unapply() {
    let mut board = Board::new();
    board.try_move(sq("e2"), sq("e4"), None).unwrap();
    board.try_move(sq("a7"), sq("a6"), None).unwrap();
    board.try_move(sq("e4"), sq("e5"), None).unwrap();
    board.try_move(sq("d7"), sq("d5"), None).unwrap();

    let before = board.squares;
    let capture = board.moves_from(sq("e5")).towards(sq("d6")).unwrap();
    board.apply(&capture, None);
    assert!(board.is_empty(sq("d5")), "victim removed from beside");
    assert_eq!(board.piece_on(sq("d6")), Some(Piece::Pawn));
    board.unapply(&capture);
    assert_eq!(board.squares, before);
}

#[test]
fn test_castle_apply_unapply_restores_rook_virgin() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("h1"), Color::White, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::King)
        .build();
    let before = board.squares;
    let castle = board.moves_from(sq("e1")).towards(sq("g1")).unwrap();

    board.apply(&castle, None);
    assert_eq!(board.piece_on(sq("f1")), Some(Piece::Rook));
    assert!(!board.is_virgin(sq("f1")));
    assert!(!board.is_virgin(sq("g1")));

    board.unapply(&castle);
    assert_eq!(board.squares, before);
    assert!(board.is_virgin(sq("e1")));
    assert!(board.is_virgin(sq("h1")));
}

#[test]
fn test_promotion_apply_places_piece_unapply_restores_pawn() {
    let mut board = BoardBuilder::new()
        .piece(sq("g7"), Color::White, Piece::Pawn)
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e8"), Color::Black, Piece::King)
        .build();
    let before = board.squares;
    let push = board.moves_from(sq("g7")).towards(sq("g8")).unwrap();

    board.apply(&push, Some(Piece::Queen));
    assert_eq!(board.piece_at(sq("g8")), Some((Color::White, Piece::Queen)));

    board.unapply(&push);
    assert_eq!(board.squares, before);
    assert_eq!(board.piece_on(sq("g7")), Some(Piece::Pawn));
}

#[test]
fn test_apply_clears_virgin_of_moved_rook() {
    let mut board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::Rook)
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("e8"), Color::Black, Piece::King)
        .build();
    let lift = board.moves_from(sq("a1")).towards(sq("a4")).unwrap();
    board.apply(&lift, None);
    assert!(!board.is_virgin(sq("a4")));
    board.unapply(&lift);
    assert!(board.is_virgin(sq("a1")));
}
