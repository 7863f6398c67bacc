use log::{debug, info};
use utils::{GameResult, Rules};

use super::progress::GameProgress;
use super::{LearnError, Learner, UpdatePolicy};

impl<P: UpdatePolicy> Learner<P> {
    /// Plays `games` games of the engine against itself, both sides searching
    /// `depth` plies with the same evolving weights. Returns the result of
    /// every game that was played; a stop request ends the run between games.
    pub fn run_self_play<R: Rules>(
        &mut self,
        position: &mut R,
        games: usize,
        depth: u8,
    ) -> Result<Vec<GameResult>, LearnError> {
        let mut results = Vec::with_capacity(games);
        self.prepare_engine(depth, "self-play");
        let mut progress = GameProgress::new(games, self.show_progress);

        for game in 1..=games {
            if self.stop_requested() {
                progress.suspend(|| {
                    info!("Self-play stopped after {} of {} games", results.len(), games)
                });
                break;
            }

            position.reset();
            let plies = self.play_self_game(position);
            let Some(result) = position.result() else {
                break;
            };

            let reason = position.end_reason();
            progress.suspend(|| match reason {
                Some(reason) => info!(
                    "Self-play game {}/{}: {} ({}) after {} plies",
                    game, games, result, reason, plies
                ),
                None => info!(
                    "Self-play game {}/{}: {} after {} plies",
                    game, games, result, plies
                ),
            });

            progress.suspend(|| self.finish_game(result))?;
            progress.update(result);
            results.push(result);
        }

        progress.finish();
        info!("Self-play finished, {}", progress.tally());

        Ok(results)
    }

    /// Plays until the game is over, returning the number of plies.
    fn play_self_game<R: Rules>(&mut self, position: &mut R) -> usize {
        let mut plies = 0;

        while !position.is_game_over() {
            let Some(mv) = self.engine_move(position) else {
                break;
            };
            debug!("{:?} plays {}", position.side_to_move(), mv);
            position.apply(mv);
            plies += 1;
        }

        plies
    }
}
