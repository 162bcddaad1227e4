use std::collections::HashMap;

use super::game::GameStatus;
use super::{Color, Move, Piece, Square, SquareValue};

/// Occurrence counts for positions seen during the game, keyed by the
/// Zobrist hash of board composition + side to move. Grows for the
/// lifetime of a game and is never pruned; a single game has bounded
/// length.
#[derive(Clone, Debug)]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    pub(crate) fn set(&mut self, hash: u64, count: u32) {
        if count == 0 {
            self.counts.remove(&hash);
        } else {
            self.counts.insert(hash, count);
        }
    }

    pub(crate) fn increment(&mut self, hash: u64) -> u32 {
        let next = self.get(hash).saturating_add(1);
        self.set(hash, next);
        next
    }

    pub(crate) fn decrement(&mut self, hash: u64) {
        let count = self.get(hash);
        self.set(hash, count.saturating_sub(1));
    }
}

/// A chess position with full rule state.
///
/// One instance per game; all operations run to completion before
/// returning, so callers only ever observe a settled board. Concurrent
/// mutation of a single instance is not supported - serialize access or
/// clone per game.
#[derive(Clone, Debug)]
pub struct Board {
    /// 0x88 mailbox; slots with `index & 0x88 != 0` stay empty forever.
    pub(crate) squares: [SquareValue; Square::COUNT],
    pub(crate) white_to_move: bool,
    /// Landing square of the pawn that just double-stepped, capturable
    /// en passant on the immediately following move only.
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) hash: u64,
    pub(crate) repetition_counts: RepetitionTable,
    pub(crate) status: GameStatus,
    pub(crate) last_move: Option<Move>,
    pub(crate) draw_claimable: bool,
}

impl Board {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.set_rank(0, "RNBQKBNR");
        board.set_rank(1, "PPPPPPPP");
        board.set_rank(6, "pppppppp");
        board.set_rank(7, "rnbqkbnr");
        board.hash = board.compute_hash();
        board.repetition_counts.set(board.hash, 1);
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [SquareValue::EMPTY; Square::COUNT],
            white_to_move: true,
            en_passant_target: None,
            halfmove_clock: 0,
            hash: 0,
            repetition_counts: RepetitionTable::new(),
            status: GameStatus::InProgress,
            last_move: None,
            draw_claimable: false,
        }
    }

    /// Seed one rank from an 8-character layout string.
    ///
    /// Uppercase letters place white pieces, lowercase black; `p n b r q k`
    /// are the piece codes and any other character leaves the square empty.
    /// Kings and rooks are placed with their virgin flag set.
    pub(crate) fn set_rank(&mut self, rank: u8, layout: &str) {
        for (file, ch) in layout.chars().take(8).enumerate() {
            let sq = Square::new(rank, file as u8).expect("rank initializer square");
            self.squares[sq.index()] = match Piece::from_char(ch) {
                Some(piece) => {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let virgin = matches!(piece, Piece::King | Piece::Rook);
                    SquareValue::piece(piece, color, virgin)
                }
                None => SquareValue::EMPTY,
            };
        }
    }

    pub(crate) fn value_at(&self, sq: Square) -> SquareValue {
        self.squares[sq.index()]
    }

    /// Get the piece and color on a square, `None` for an empty square.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.value_at(sq).decode()
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.value_at(sq).is_empty()
    }

    /// True if the king or rook on `sq` has never moved. False for any
    /// other occupant and for empty squares.
    #[must_use]
    pub fn is_virgin(&self, sq: Square) -> bool {
        self.value_at(sq).is_virgin()
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece, virgin: bool) {
        self.squares[sq.index()] = SquareValue::piece(piece, color, virgin);
    }

    pub(crate) fn current_color(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// The color whose turn it is.
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.current_color()
    }

    /// Position hash of board composition + side to move.
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Half-moves since the last capture or pawn move.
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// The square a pawn just double-stepped onto, if any.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// The most recently accepted move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Game state as of the last accepted move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True when the fifty-move rule or threefold repetition lets either
    /// player claim a draw in the current position.
    #[must_use]
    pub fn draw_claimable(&self) -> bool {
        self.draw_claimable
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
