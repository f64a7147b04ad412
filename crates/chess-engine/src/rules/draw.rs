use crate::{Board, GameState};
use chess_core::PieceKind;

/// Half-moves without a pawn move or capture that end the game.
pub const FIFTY_MOVE_HALFMOVES: u32 = 100;

/// Occurrences of one position that end the game.
pub const REPETITION_LIMIT: u32 = 3;

pub fn is_fifty_move_draw(state: &GameState) -> bool {
    state.halfmove_clock() >= FIFTY_MOVE_HALFMOVES
}

/// True once the current position has been reached three times.
pub fn is_threefold_repetition(state: &GameState) -> bool {
    state.repetition_count() >= REPETITION_LIMIT
}

/// True when neither side can possibly deliver mate: bare kings, a single
/// minor piece, or only bishops that all stand on one square color.
pub fn is_insufficient_material(board: &Board) -> bool {
    let mut minors = Vec::new();
    for (sq, piece) in board.pieces() {
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            PieceKind::Knight | PieceKind::Bishop => minors.push((sq, piece.kind)),
        }
    }
    if minors.len() <= 1 {
        return true;
    }
    let all_bishops = minors.iter().all(|&(_, kind)| kind == PieceKind::Bishop);
    let light = minors.iter().filter(|(sq, _)| sq.is_light()).count();
    all_bishops && (light == 0 || light == minors.len())
}
