use std::fmt::Display;
use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use console::{Console, ConsoleOutput, PlayerInput};
use log::{debug, info};
use utils::{GameResult, MoveInputError, Rules};

use super::{LearnError, Learner, UpdatePolicy};

impl<P: UpdatePolicy> Learner<P> {
    /// Plays up to `max_games` games against a human who has White, learning
    /// from each finished game. Returns the number of games completed.
    ///
    /// The session ends early, without touching the weights, when the input
    /// is exhausted or the player quits mid-game.
    pub fn run_interactive<R, I, O>(
        &mut self,
        position: &mut R,
        console: &mut Console<I, O>,
        max_games: usize,
        depth: u8,
    ) -> Result<usize, LearnError>
    where
        R: Rules + Display,
        I: BufRead,
        O: Write,
    {
        let mut completed = 0;
        self.prepare_engine(depth, "interactive play");

        for game in 1..=max_games {
            if self.stop_requested() {
                break;
            }

            position.reset();
            let Some(result) = self.play_interactive_game(position, console)? else {
                info!("Session ended during game {}", game);
                break;
            };

            console.send(&ConsoleOutput::GameOver {
                result: result.to_string(),
                reason: position.end_reason().map(|reason| reason.to_string()),
            })?;
            info!("Interactive game {}/{}: {}", game, max_games, result);

            self.finish_game(result)?;
            completed += 1;
        }

        console.send(&ConsoleOutput::GamesCompleted(completed))?;
        Ok(completed)
    }

    /// `None` when the player left before the game was decided.
    fn play_interactive_game<R, I, O>(
        &mut self,
        position: &mut R,
        console: &mut Console<I, O>,
    ) -> Result<Option<GameResult>, LearnError>
    where
        R: Rules + Display,
        I: BufRead,
        O: Write,
    {
        while !position.is_game_over() {
            console.send(&ConsoleOutput::Board(position.to_string()))?;

            let Some(mv) = read_player_move(position, console, &self.stop)? else {
                return Ok(None);
            };
            position.apply(mv);

            if position.is_game_over() {
                break;
            }

            let Some(reply) = self.engine_move(position) else {
                break;
            };
            console.send(&ConsoleOutput::EngineMove(reply.to_string()))?;
            position.apply(reply);
        }

        console.send(&ConsoleOutput::Board(position.to_string()))?;
        Ok(position.result())
    }
}

/// Prompts until the player enters a legal move. `None` on quit, end of
/// input, or a stop request noticed after the line was read.
fn read_player_move<R, I, O>(
    position: &R,
    console: &mut Console<I, O>,
    stop: &AtomicBool,
) -> Result<Option<R::Move>, LearnError>
where
    R: Rules,
    I: BufRead,
    O: Write,
{
    loop {
        console.send(&ConsoleOutput::Prompt)?;

        let input = console.read_input()?;
        if stop.load(Ordering::Relaxed) {
            return Ok(None);
        }

        let text = match input {
            None | Some(PlayerInput::Quit) => return Ok(None),
            Some(PlayerInput::Empty) => continue,
            Some(PlayerInput::Move(text)) => text,
        };

        match position.parse_move(&text) {
            Ok(mv) => return Ok(Some(mv)),
            Err(e) => {
                debug!("Rejected input: {}", e);
                let output = match e {
                    MoveInputError::InvalidFormat(_) => ConsoleOutput::InvalidFormat,
                    MoveInputError::Illegal(_) => ConsoleOutput::IllegalMove,
                };
                console.send(&output)?;
            }
        }
    }
}
