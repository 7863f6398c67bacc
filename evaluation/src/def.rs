use utils::Rules;

use crate::Score;

pub trait Evaluator {
    fn name(&self) -> String;
    /// Evaluate position from White's perspective. Positive = White advantage.
    /// Must leave the position untouched.
    fn evaluate<R: Rules>(&self, position: &R) -> Score;
}
