use std::time::Instant;

use evaluation::{Evaluator, Score};
use utils::Rules;

use crate::EngineConfig;

mod search;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult<M> {
    pub best_move: M,
    /// White-positive score of the chosen move.
    pub score: Score,
    /// Nodes visited below the root.
    pub nodes: u64,
}

/// Fixed-depth minimax with alpha-beta pruning.
///
/// Moves are searched in the order the rules provider generates them; there
/// is no move ordering, transposition table or quiescence. The position is
/// mutated through `apply`/`undo` only and is restored before any call returns.
pub struct Engine {
    config: EngineConfig,

    /// Number of nodes searched
    nodes: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            config: config.clone(),
            nodes: 0,
        }
    }

    pub fn configure(&mut self, config: &EngineConfig) {
        self.config = config.clone();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn name(&self) -> String {
        format!("Minimax (depth {})", self.config.depth)
    }

    /// Best move at the configured depth, `None` when there is no legal move.
    pub fn best_move<R: Rules, E: Evaluator>(
        &mut self,
        position: &mut R,
        evaluator: &E,
    ) -> Option<R::Move> {
        let depth = self.config.depth;
        self.best_move_at(position, evaluator, depth)
    }

    pub fn best_move_at<R: Rules, E: Evaluator>(
        &mut self,
        position: &mut R,
        evaluator: &E,
        depth: u8,
    ) -> Option<R::Move> {
        self.search(position, evaluator, depth)
            .map(|result| result.best_move)
    }

    /// Searches every root move to `depth` plies and keeps the one with the
    /// strictly greatest score; ties keep the first move generated.
    ///
    /// The root always maximizes and the reply always minimizes, whichever
    /// color is to move: for Black this still prefers white-positive scores.
    pub fn search<R: Rules, E: Evaluator>(
        &mut self,
        position: &mut R,
        evaluator: &E,
        depth: u8,
    ) -> Option<SearchResult<R::Move>> {
        self.nodes = 0;
        let start_time = Instant::now();
        let child_depth = depth.max(1) - 1;

        let mut best_move = None;
        let mut best_score = Score::NEG_INFINITY;

        for mv in position.legal_moves() {
            position.apply(mv);
            let score = self.minimax(
                position,
                evaluator,
                child_depth,
                Score::NEG_INFINITY,
                Score::INFINITY,
                false,
            );
            position.undo();

            log::debug!("Move: {}, Score: {}", mv, score);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        let best_move = best_move?;

        log::debug!(
            "depth {} nodes {} time {}ms bestmove {} score {}",
            depth,
            self.nodes,
            start_time.elapsed().as_millis(),
            best_move,
            best_score
        );

        Some(SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation::{HeuristicEvaluator, PieceWeights};
    use utils::ChessPosition;

    fn position(fen: &str) -> ChessPosition {
        ChessPosition::from_fen(fen).unwrap()
    }

    #[test]
    fn test_opening_move_at_depth_one() {
        let weights = PieceWeights::default();
        let evaluator = HeuristicEvaluator::new(&weights);
        let mut engine = Engine::default();
        let mut start = ChessPosition::new();

        let best = engine.best_move_at(&mut start, &evaluator, 1);
        assert!(best.is_some());
        assert!(start.legal_moves().contains(&best.unwrap()));
    }

    #[test]
    fn test_best_move_is_legal() {
        let weights = PieceWeights::default();
        let evaluator = HeuristicEvaluator::new(&weights);
        let mut engine = Engine::default();

        for fen in [
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ] {
            let mut pos = position(fen);
            for depth in 1..=2 {
                let best = engine.best_move_at(&mut pos, &evaluator, depth).unwrap();
                assert!(pos.legal_moves().contains(&best), "{} at depth {}", fen, depth);
            }
        }
    }

    #[test]
    fn test_no_move_when_checkmated() {
        let weights = PieceWeights::default();
        let evaluator = HeuristicEvaluator::new(&weights);
        let mut engine = Engine::default();

        // Fool's mate, White to move
        let mut mated =
            position("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(engine.search(&mut mated, &evaluator, 3).is_none());
        assert!(engine.best_move(&mut mated, &evaluator).is_none());
    }

    #[test]
    fn test_search_restores_position() {
        let weights = PieceWeights::default();
        let evaluator = HeuristicEvaluator::new(&weights);
        let mut engine = Engine::default();

        let mut pos = position("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
        let before = pos.clone();
        engine.search(&mut pos, &evaluator, 3);
        assert_eq!(pos, before);
    }

    #[test]
    fn test_deterministic() {
        let weights = PieceWeights::default();
        let evaluator = HeuristicEvaluator::new(&weights);

        let mut first = Engine::default();
        let mut second = Engine::default();
        let mut a = ChessPosition::new();
        let mut b = ChessPosition::new();

        let left = first.search(&mut a, &evaluator, 2).unwrap();
        let right = second.search(&mut b, &evaluator, 2).unwrap();
        assert_eq!(left, right);
    }

    #[test]
    fn test_captures_hanging_queen() {
        let weights = PieceWeights::default();
        let evaluator = HeuristicEvaluator::new(&weights);
        let mut engine = Engine::default();

        let mut pos = position("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
        let best = engine.best_move_at(&mut pos, &evaluator, 1).unwrap();
        assert_eq!(best.to_string(), "d2d5");
    }

    #[test]
    fn test_root_maximizes_for_black_too() {
        // Black could win the queen, but the root keeps the white-positive
        // convention and so avoids the capture.
        let weights = PieceWeights::default();
        let evaluator = HeuristicEvaluator::new(&weights);
        let mut engine = Engine::default();

        let mut pos = position("4k3/8/8/3Q4/8/8/3r4/4K3 b - - 0 1");
        let best = engine.best_move_at(&mut pos, &evaluator, 1).unwrap();
        assert_ne!(best.to_string(), "d2d5");
    }

    #[test]
    fn test_depth_zero_acts_as_depth_one() {
        let weights = PieceWeights::default();
        let evaluator = HeuristicEvaluator::new(&weights);
        let mut engine = Engine::default();
        let mut pos = ChessPosition::new();

        let shallow = engine.search(&mut pos, &evaluator, 0).unwrap();
        let one = engine.search(&mut pos, &evaluator, 1).unwrap();
        assert_eq!(shallow, one);
    }

    #[test]
    fn test_nodes_counted() {
        let weights = PieceWeights::default();
        let evaluator = HeuristicEvaluator::new(&weights);
        let mut engine = Engine::default();
        let mut pos = ChessPosition::new();

        let result = engine.search(&mut pos, &evaluator, 1).unwrap();
        // one leaf per root move
        assert_eq!(result.nodes, 20);
        assert_eq!(engine.nodes(), 20);
    }
}
