use evaluation::{Evaluator, Score};
use utils::Rules;

use super::Engine;

impl Engine {
    /// Minimax with alpha-beta pruning. Returns a white-positive score.
    ///
    /// Terminal positions and depth 0 are scored by the evaluator directly.
    /// A node with no legal moves that the rules provider still considers
    /// ongoing is scored the same way.
    pub fn minimax<R: Rules, E: Evaluator>(
        &mut self,
        position: &mut R,
        evaluator: &E,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.nodes += 1;

        if depth == 0 || position.is_game_over() {
            return evaluator.evaluate(position);
        }

        let moves = position.legal_moves();
        if moves.is_empty() {
            return evaluator.evaluate(position);
        }

        if maximizing {
            let mut best_value = Score::NEG_INFINITY;
            for mv in moves {
                position.apply(mv);
                let value = self.minimax(position, evaluator, depth - 1, alpha, beta, false);
                position.undo();

                best_value = best_value.max(value);
                alpha = alpha.max(value);

                if beta <= alpha {
                    break;
                }
            }
            best_value
        } else {
            let mut best_value = Score::INFINITY;
            for mv in moves {
                position.apply(mv);
                let value = self.minimax(position, evaluator, depth - 1, alpha, beta, true);
                position.undo();

                best_value = best_value.min(value);
                beta = beta.min(value);

                if beta <= alpha {
                    break;
                }
            }
            best_value
        }
    }
}
