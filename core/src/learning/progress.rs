use indicatif::{ProgressBar, ProgressStyle};
use utils::GameResult;

const TEMPLATE: &str = "{spinner:.cyan} {pos}/{len} [{wide_bar:.cyan/blue}] {elapsed_precise} | {msg}";

pub struct GameProgress {
    bar: ProgressBar,
    white_wins: usize,
    black_wins: usize,
    draws: usize,
}

impl GameProgress {
    pub fn new(games: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(games as u64)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
            bar.set_style(style);
        }

        Self {
            bar,
            white_wins: 0,
            black_wins: 0,
            draws: 0,
        }
    }

    pub fn update(&mut self, result: GameResult) {
        match result {
            GameResult::WhiteWins => self.white_wins += 1,
            GameResult::BlackWins => self.black_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.bar.set_message(self.tally());
        self.bar.inc(1);
    }

    /// Runs `f` with the bar cleared so terminal output does not tear it.
    pub fn suspend<F: FnOnce() -> T, T>(&self, f: F) -> T {
        self.bar.suspend(f)
    }

    pub fn finish(&self) {
        self.bar.finish_with_message(self.tally());
    }

    pub fn tally(&self) -> String {
        format!(
            "white: {}, black: {}, draws: {}",
            self.white_wins, self.black_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        let mut progress = GameProgress::new(3, false);
        progress.update(GameResult::WhiteWins);
        progress.update(GameResult::Draw);
        progress.update(GameResult::Draw);
        progress.finish();

        assert_eq!(progress.tally(), "white: 1, black: 0, draws: 2");
    }

    #[test]
    fn test_suspend_returns_value() {
        let progress = GameProgress::new(1, false);
        assert_eq!(progress.suspend(|| 42), 42);
    }
}
