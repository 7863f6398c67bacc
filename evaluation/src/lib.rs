pub mod def;
pub mod heuristic;
pub mod scores;
pub mod weights;

pub use def::Evaluator;
pub use heuristic::HeuristicEvaluator;
pub use scores::Score;
pub use weights::{PieceWeights, WeightStore, WeightStoreError, DEFAULT_WEIGHTS_FILE};
