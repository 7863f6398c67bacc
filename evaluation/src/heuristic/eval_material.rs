use utils::Rules;

use crate::PieceWeights;

/// Sum of signed piece weights over the whole board.
#[inline(always)]
pub(super) fn evaluate<R: Rules>(position: &R, weights: &PieceWeights) -> i64 {
    position
        .pieces()
        .into_iter()
        .map(|placement| weights.signed_value(placement.piece) as i64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use utils::ChessPosition;

    #[test]
    fn test_balanced_start() {
        let weights = PieceWeights::default();
        assert_eq!(evaluate(&ChessPosition::new(), &weights), 0);
    }

    #[test]
    fn test_missing_queen() {
        let weights = PieceWeights::default();
        let position = ChessPosition::from_fen(
            "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        )
        .unwrap();
        assert_eq!(evaluate(&position, &weights), 900);
    }
}
