use chess::{BitBoard, Board, Piece, EMPTY};

const LIGHT_SQUARES_MASK: u64 = 0x55AA55AA55AA55AA;

/// Checks if the position has insufficient material for either side to force checkmate.
/// Returns true for dead drawn positions like:
/// - K vs K
/// - K+N vs K (either side)
/// - K+B vs K (either side)
/// - any number of bishops, all on squares of one color
pub fn has_insufficient_material(board: &Board) -> bool {
    let pawns = *board.pieces(Piece::Pawn);
    let rooks = *board.pieces(Piece::Rook);
    let queens = *board.pieces(Piece::Queen);

    if (pawns | rooks | queens) != EMPTY {
        return false;
    }

    let knights = *board.pieces(Piece::Knight);
    let bishops = *board.pieces(Piece::Bishop);

    // K vs K, K+minor vs K
    if (knights | bishops).popcnt() <= 1 {
        return true;
    }

    // Bishops all on one square color cannot deliver mate
    if knights == EMPTY {
        let on_light = (bishops & BitBoard(LIGHT_SQUARES_MASK)).popcnt();
        return on_light == 0 || on_light == bishops.popcnt();
    }

    false
}
