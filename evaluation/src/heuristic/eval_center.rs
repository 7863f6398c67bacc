use chess::Square;
use utils::Rules;

use crate::PieceWeights;

pub const CENTER_SQUARES: [Square; 4] = [Square::E4, Square::D4, Square::E5, Square::D5];

/// Signed weight of every piece standing on a center square.
#[inline(always)]
pub(super) fn evaluate<R: Rules>(position: &R, weights: &PieceWeights) -> i64 {
    CENTER_SQUARES
        .iter()
        .filter_map(|&square| position.piece_at(square))
        .map(|piece| weights.signed_value(piece) as i64)
        .sum()
}
