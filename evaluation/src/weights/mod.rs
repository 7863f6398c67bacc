mod store;

pub use store::{WeightStore, WeightStoreError, DEFAULT_WEIGHTS_FILE};

use chess::{Color, Piece};
use serde::{Deserialize, Serialize};
use utils::ColoredPiece;

/// Learned material value per piece kind.
///
/// The king has no entry: it is never captured, so it is worth 0.
/// Serialized as a flat object keyed by lowercase piece name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceWeights {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
}

impl Default for PieceWeights {
    fn default() -> Self {
        Self {
            pawn: 100,
            knight: 320,
            bishop: 330,
            rook: 500,
            queen: 900,
        }
    }
}

impl PieceWeights {
    #[inline(always)]
    pub fn value(&self, piece: Piece) -> i32 {
        match piece {
            Piece::Pawn => self.pawn,
            Piece::Knight => self.knight,
            Piece::Bishop => self.bishop,
            Piece::Rook => self.rook,
            Piece::Queen => self.queen,
            Piece::King => 0,
        }
    }

    /// Value of a piece signed by its color: positive for White, negative for Black.
    #[inline(always)]
    pub fn signed_value(&self, piece: ColoredPiece) -> i32 {
        let value = self.value(piece.kind);
        match piece.color {
            Color::White => value,
            Color::Black => -value,
        }
    }

    /// Adds `delta` to the weight of `piece`. Returns false for the king,
    /// which has no weight.
    pub fn adjust(&mut self, piece: Piece, delta: i32) -> bool {
        let slot = match piece {
            Piece::Pawn => &mut self.pawn,
            Piece::Knight => &mut self.knight,
            Piece::Bishop => &mut self.bishop,
            Piece::Rook => &mut self.rook,
            Piece::Queen => &mut self.queen,
            Piece::King => return false,
        };
        *slot = slot.saturating_add(delta);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = PieceWeights::default();
        assert_eq!(weights.value(Piece::Pawn), 100);
        assert_eq!(weights.value(Piece::Knight), 320);
        assert_eq!(weights.value(Piece::Bishop), 330);
        assert_eq!(weights.value(Piece::Rook), 500);
        assert_eq!(weights.value(Piece::Queen), 900);
        assert_eq!(weights.value(Piece::King), 0);
    }

    #[test]
    fn test_signed_value() {
        let weights = PieceWeights::default();
        let white_rook = ColoredPiece { kind: Piece::Rook, color: Color::White };
        let black_rook = ColoredPiece { kind: Piece::Rook, color: Color::Black };
        assert_eq!(weights.signed_value(white_rook), 500);
        assert_eq!(weights.signed_value(black_rook), -500);
    }

    #[test]
    fn test_adjust() {
        let mut weights = PieceWeights::default();
        assert!(weights.adjust(Piece::Knight, 1));
        assert_eq!(weights.knight, 321);
        assert!(!weights.adjust(Piece::King, 1));
        assert_eq!(weights, PieceWeights { knight: 321, ..Default::default() });
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(PieceWeights::default()).unwrap();
        assert_eq!(json["pawn"], 100);
        assert_eq!(json["queen"], 900);
        assert_eq!(json.as_object().map(|o| o.len()), Some(5));
    }
}
