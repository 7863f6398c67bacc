//! The capability the search and learning code consume from a rules engine.
//!
//! Everything that knows the laws of the game (move generation, terminal
//! detection, applying and taking back moves, notation) sits behind [`Rules`].
//! Search only ever mutates a position through `apply`/`undo`, strictly nested.

use std::fmt;
use std::str::FromStr;

use chess::{Color, Piece, Square};

pub trait Rules {
    type Move: Copy + Eq + fmt::Display + fmt::Debug;

    /// Legal moves for the side to move, in generation order.
    fn legal_moves(&self) -> Vec<Self::Move>;
    fn apply(&mut self, mv: Self::Move);
    /// Takes back the most recently applied move.
    fn undo(&mut self);
    fn is_game_over(&self) -> bool;
    /// Why the game ended, `None` while it is in progress.
    fn end_reason(&self) -> Option<GameEnd>;
    /// `None` while the game is still in progress.
    fn result(&self) -> Option<GameResult>;
    fn side_to_move(&self) -> Color;
    fn piece_at(&self, square: Square) -> Option<ColoredPiece>;
    fn pieces(&self) -> Vec<Placement>;
    fn parse_move(&self, text: &str) -> Result<Self::Move, MoveInputError>;
    /// Back to the initial position with an empty move history.
    fn reset(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoredPiece {
    pub kind: Piece,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub square: Square,
    pub piece: ColoredPiece,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game result: {0:?}")]
pub struct ParseResultError(pub String);

impl FromStr for GameResult {
    type Err = ParseResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1-0" => Ok(GameResult::WhiteWins),
            "0-1" => Ok(GameResult::BlackWins),
            "1/2-1/2" => Ok(GameResult::Draw),
            other => Err(ParseResultError(other.to_string())),
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEnd {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    /// 150 half-moves without a pawn move or capture.
    SeventyFiveMoves,
    FivefoldRepetition,
}

impl fmt::Display for GameEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameEnd::Checkmate => "checkmate",
            GameEnd::Stalemate => "stalemate",
            GameEnd::InsufficientMaterial => "insufficient material",
            GameEnd::SeventyFiveMoves => "seventy-five move rule",
            GameEnd::FivefoldRepetition => "fivefold repetition",
        };
        f.write_str(text)
    }
}

/// Rejected move text from an external actor. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveInputError {
    #[error("invalid move format: {0:?}")]
    InvalidFormat(String),
    #[error("illegal move: {0}")]
    Illegal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_notation() {
        assert_eq!(GameResult::WhiteWins.to_string(), "1-0");
        assert_eq!(GameResult::BlackWins.to_string(), "0-1");
        assert_eq!(GameResult::Draw.to_string(), "1/2-1/2");
    }

    #[test]
    fn test_result_parse() {
        assert_eq!("1-0".parse::<GameResult>(), Ok(GameResult::WhiteWins));
        assert_eq!("0-1".parse::<GameResult>(), Ok(GameResult::BlackWins));
        assert_eq!(" 1/2-1/2 ".parse::<GameResult>(), Ok(GameResult::Draw));
        assert!("*".parse::<GameResult>().is_err());
    }
}
