use std::collections::hash_map::Entry;
use std::fmt;
use std::str::FromStr;

use ahash::AHashMap;
use chess::{Board, BoardStatus, ChessMove, Color, File, MoveGen, Piece, Rank, Square};

use crate::board::has_insufficient_material;
use crate::rules::{ColoredPiece, GameEnd, GameResult, MoveInputError, Placement, Rules};

const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;
const FIVEFOLD_REPETITION: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("invalid FEN: {0:?}")]
    InvalidFen(String),
}

/// State needed to take back one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UndoEntry {
    board: Board,
    halfmove_clock: u32,
    mv: ChessMove,
}

/// A chess game position with an explicit undo log.
///
/// `chess::Board` is copy-make, so every `apply` pushes the previous board
/// onto the log and `undo` pops it back. Repetition counts are kept per
/// Zobrist hash so fivefold repetition can be detected without replaying
/// the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessPosition {
    board: Board,
    halfmove_clock: u32,
    undo_log: Vec<UndoEntry>,
    repetitions: AHashMap<u64, u32>,
}

impl Default for ChessPosition {
    fn default() -> Self {
        Self::from_board(Board::default(), 0)
    }
}

impl ChessPosition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let board =
            Board::from_str(fen).map_err(|_| PositionError::InvalidFen(fen.to_string()))?;

        // chess::Board drops the clocks, so read the half-move clock ourselves
        let halfmove_clock = fen
            .split_whitespace()
            .nth(4)
            .and_then(|field| field.parse().ok())
            .unwrap_or(0);

        Ok(Self::from_board(board, halfmove_clock))
    }

    fn from_board(board: Board, halfmove_clock: u32) -> Self {
        let mut repetitions = AHashMap::new();
        repetitions.insert(board.get_hash(), 1);

        Self {
            board,
            halfmove_clock,
            undo_log: Vec::new(),
            repetitions,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves applied since the starting position.
    #[inline]
    pub fn ply(&self) -> usize {
        self.undo_log.len()
    }

    pub fn last_move(&self) -> Option<ChessMove> {
        self.undo_log.last().map(|entry| entry.mv)
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// How many times the current position has occurred in this game.
    pub fn repetition_count(&self) -> u32 {
        self.repetitions
            .get(&self.board.get_hash())
            .copied()
            .unwrap_or(0)
    }

    fn resets_clock(&self, mv: ChessMove) -> bool {
        self.board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            || self.board.piece_on(mv.get_dest()).is_some()
    }
}

impl Rules for ChessPosition {
    type Move = ChessMove;

    fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    fn apply(&mut self, mv: ChessMove) {
        let halfmove_clock = if self.resets_clock(mv) {
            0
        } else {
            self.halfmove_clock + 1
        };

        self.undo_log.push(UndoEntry {
            board: self.board,
            halfmove_clock: self.halfmove_clock,
            mv,
        });

        self.board = self.board.make_move_new(mv);
        self.halfmove_clock = halfmove_clock;
        *self.repetitions.entry(self.board.get_hash()).or_insert(0) += 1;
    }

    fn undo(&mut self) {
        let Some(entry) = self.undo_log.pop() else {
            debug_assert!(false, "undo without a matching apply");
            return;
        };

        if let Entry::Occupied(mut count) = self.repetitions.entry(self.board.get_hash()) {
            if *count.get() <= 1 {
                count.remove();
            } else {
                *count.get_mut() -= 1;
            }
        }

        self.board = entry.board;
        self.halfmove_clock = entry.halfmove_clock;
    }

    fn end_reason(&self) -> Option<GameEnd> {
        match self.board.status() {
            BoardStatus::Checkmate => return Some(GameEnd::Checkmate),
            BoardStatus::Stalemate => return Some(GameEnd::Stalemate),
            BoardStatus::Ongoing => {}
        }

        if has_insufficient_material(&self.board) {
            return Some(GameEnd::InsufficientMaterial);
        }
        if self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES {
            return Some(GameEnd::SeventyFiveMoves);
        }
        if self.repetition_count() >= FIVEFOLD_REPETITION {
            return Some(GameEnd::FivefoldRepetition);
        }

        None
    }

    fn is_game_over(&self) -> bool {
        self.end_reason().is_some()
    }

    fn result(&self) -> Option<GameResult> {
        match self.end_reason()? {
            GameEnd::Checkmate => match self.board.side_to_move() {
                Color::White => Some(GameResult::BlackWins),
                Color::Black => Some(GameResult::WhiteWins),
            },
            _ => Some(GameResult::Draw),
        }
    }

    #[inline]
    fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        let kind = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some(ColoredPiece { kind, color })
    }

    fn pieces(&self) -> Vec<Placement> {
        (*self.board.combined())
            .filter_map(|square| {
                self.piece_at(square)
                    .map(|piece| Placement { square, piece })
            })
            .collect()
    }

    fn parse_move(&self, text: &str) -> Result<ChessMove, MoveInputError> {
        let text = text.trim();
        let mv = parse_coordinate_move(text)
            .ok_or_else(|| MoveInputError::InvalidFormat(text.to_string()))?;

        if MoveGen::new_legal(&self.board).any(|legal| legal == mv) {
            Ok(mv)
        } else {
            Err(MoveInputError::Illegal(text.to_string()))
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parses coordinate notation such as `e2e4` or `e7e8q`.
fn parse_coordinate_move(text: &str) -> Option<ChessMove> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return None;
    }

    let source = Square::from_str(&text[0..2]).ok()?;
    let dest = Square::from_str(&text[2..4]).ok()?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some('n') => Some(Piece::Knight),
        Some('b') => Some(Piece::Bishop),
        Some('r') => Some(Piece::Rook),
        Some('q') => Some(Piece::Queen),
        Some(_) => return None,
    };

    Some(ChessMove::new(source, dest, promotion))
}

fn piece_char(piece: ColoredPiece) -> char {
    let c = match piece.kind {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    match piece.color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            let row: Vec<String> = (0..8)
                .map(|file| {
                    let square = Square::make_square(Rank::from_index(rank), File::from_index(file));
                    self.piece_at(square)
                        .map_or('.', piece_char)
                        .to_string()
                })
                .collect();
            write!(f, "{}", row.join(" "))?;
            if rank > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
