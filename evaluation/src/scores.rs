/// Evaluation units (centipawns for the default weights). Search bounds use
/// `f32::INFINITY` and `f32::NEG_INFINITY`.
pub type Score = f32;
