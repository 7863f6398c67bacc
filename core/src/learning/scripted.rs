use std::fmt;

use chess::{Color, Square};
use utils::{ColoredPiece, GameEnd, GameResult, MoveInputError, Placement, Rules};

/// Games of a fixed length whose results are read from a script, one per
/// `reset`. Moves are the numbers `0` and `1`.
pub struct ScriptedGames {
    results: Vec<GameResult>,
    length: usize,
    games_started: usize,
    line: Vec<u8>,
}

impl ScriptedGames {
    pub fn new(results: &[&str], length: usize) -> Self {
        Self {
            results: results.iter().map(|r| r.parse().unwrap()).collect(),
            length,
            games_started: 0,
            line: Vec::new(),
        }
    }

    pub fn games_started(&self) -> usize {
        self.games_started
    }

    pub fn ply(&self) -> usize {
        self.line.len()
    }
}

impl Rules for ScriptedGames {
    type Move = u8;

    fn legal_moves(&self) -> Vec<u8> {
        if self.is_game_over() {
            Vec::new()
        } else {
            vec![0, 1]
        }
    }

    fn apply(&mut self, mv: u8) {
        self.line.push(mv);
    }

    fn undo(&mut self) {
        self.line.pop();
    }

    fn is_game_over(&self) -> bool {
        self.line.len() >= self.length
    }

    fn end_reason(&self) -> Option<GameEnd> {
        match self.result()? {
            GameResult::Draw => Some(GameEnd::Stalemate),
            _ => Some(GameEnd::Checkmate),
        }
    }

    fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }
        let game = self.games_started.saturating_sub(1);
        Some(self.results.get(game).copied().unwrap_or(GameResult::Draw))
    }

    fn side_to_move(&self) -> Color {
        if self.line.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    fn piece_at(&self, _square: Square) -> Option<ColoredPiece> {
        None
    }

    fn pieces(&self) -> Vec<Placement> {
        Vec::new()
    }

    fn parse_move(&self, text: &str) -> Result<u8, MoveInputError> {
        let mv: u8 = text
            .parse()
            .map_err(|_| MoveInputError::InvalidFormat(text.to_string()))?;
        if self.legal_moves().contains(&mv) {
            Ok(mv)
        } else {
            Err(MoveInputError::Illegal(text.to_string()))
        }
    }

    fn reset(&mut self) {
        self.games_started += 1;
        self.line.clear();
    }
}

impl fmt::Display for ScriptedGames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game {} ply {}", self.games_started, self.line.len())
    }
}
