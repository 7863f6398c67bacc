#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// Move text as typed, validated later against the position.
    Move(String),
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleOutput {
    /// Pre-rendered board.
    Board(String),
    Prompt,
    EngineMove(String),
    InvalidFormat,
    IllegalMove,
    GameOver {
        result: String,
        reason: Option<String>,
    },
    GamesCompleted(usize),
}
