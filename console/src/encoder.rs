use super::commands::ConsoleOutput;

pub struct Encoder;

impl Encoder {
    pub fn encode(&self, output: &ConsoleOutput) -> String {
        match output {
            ConsoleOutput::Board(board) => board.clone(),
            ConsoleOutput::Prompt => "Enter your move (e.g. e2e4): ".to_string(),
            ConsoleOutput::EngineMove(mv) => format!("Engine plays: {}", mv),
            ConsoleOutput::InvalidFormat => "Invalid move format, try again.".to_string(),
            ConsoleOutput::IllegalMove => "Illegal move, try again.".to_string(),
            ConsoleOutput::GameOver { result, reason } => match reason {
                Some(reason) => format!("Game over: {} ({})", result, reason),
                None => format!("Game over: {}", result),
            },
            ConsoleOutput::GamesCompleted(games) => {
                format!("Completed {} game(s), weights saved.", games)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_move() {
        let text = Encoder.encode(&ConsoleOutput::EngineMove("e7e5".to_string()));
        assert_eq!(text, "Engine plays: e7e5");
    }

    #[test]
    fn test_game_over() {
        let with_reason = Encoder.encode(&ConsoleOutput::GameOver {
            result: "0-1".to_string(),
            reason: Some("checkmate".to_string()),
        });
        assert_eq!(with_reason, "Game over: 0-1 (checkmate)");

        let without = Encoder.encode(&ConsoleOutput::GameOver {
            result: "1/2-1/2".to_string(),
            reason: None,
        });
        assert_eq!(without, "Game over: 1/2-1/2");
    }

    #[test]
    fn test_games_completed() {
        assert_eq!(
            Encoder.encode(&ConsoleOutput::GamesCompleted(2)),
            "Completed 2 game(s), weights saved."
        );
    }
}
