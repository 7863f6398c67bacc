use utils::Rules;

/// Legal move count for the side to move, never negated.
#[inline(always)]
pub(super) fn evaluate<R: Rules>(position: &R) -> i64 {
    position.legal_moves().len() as i64
}
