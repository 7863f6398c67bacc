mod board;
mod position;
mod rules;

pub use board::has_insufficient_material;
pub use position::{ChessPosition, PositionError};
pub use rules::{ColoredPiece, GameEnd, GameResult, MoveInputError, ParseResultError, Placement, Rules};
