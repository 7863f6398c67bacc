//! Material, center control and mobility, summed without any side-to-move
//! normalization.
//!
//! Two quirks are kept on purpose because learned weights were tuned against
//! them: a piece on a center square is counted once more on top of its
//! material, and mobility is always added with a positive sign, whichever
//! side is to move.

mod eval_center;
mod eval_material;
mod eval_mobility;

pub use eval_center::CENTER_SQUARES;

use utils::Rules;

use crate::{Evaluator, PieceWeights, Score};

pub struct HeuristicEvaluator<'a> {
    weights: &'a PieceWeights,
}

impl<'a> HeuristicEvaluator<'a> {
    pub fn new(weights: &'a PieceWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &PieceWeights {
        self.weights
    }
}

impl Evaluator for HeuristicEvaluator<'_> {
    fn name(&self) -> String {
        "Heuristic".to_string()
    }

    fn evaluate<R: Rules>(&self, position: &R) -> Score {
        let mut score = 0i64;

        score += eval_material::evaluate(position, self.weights);
        score += eval_center::evaluate(position, self.weights);
        score += eval_mobility::evaluate(position);

        score as Score
    }
}
