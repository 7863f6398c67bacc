use chess::Piece;
use evaluation::PieceWeights;
use log::debug;
use utils::GameResult;

/// Decides how a finished game changes the weights.
pub trait UpdatePolicy {
    fn update(&self, weights: &mut PieceWeights, result: GameResult);
}

pub const DEFAULT_STEP: i32 = 1;

/// Bumps one piece weight per result: pawn when White wins, queen when
/// Black wins, knight on a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementPolicy {
    step: i32,
    /// Weights at or above the cap are left alone.
    cap: Option<i32>,
}

impl Default for IncrementPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_STEP, None)
    }
}

impl IncrementPolicy {
    pub fn new(step: i32, cap: Option<i32>) -> Self {
        Self { step, cap }
    }

    pub fn rewarded_piece(result: GameResult) -> Piece {
        match result {
            GameResult::WhiteWins => Piece::Pawn,
            GameResult::BlackWins => Piece::Queen,
            GameResult::Draw => Piece::Knight,
        }
    }
}

impl UpdatePolicy for IncrementPolicy {
    fn update(&self, weights: &mut PieceWeights, result: GameResult) {
        let piece = Self::rewarded_piece(result);
        let current = weights.value(piece);

        let delta = match self.cap {
            Some(cap) => self.step.min(cap.saturating_sub(current)).max(0),
            None => self.step,
        };
        if delta == 0 {
            debug!("{:?} weight {} is capped, unchanged", piece, current);
            return;
        }

        weights.adjust(piece, delta);
        debug!(
            "Result {}: {:?} weight {} -> {}",
            result,
            piece,
            current,
            weights.value(piece)
        );
    }
}
