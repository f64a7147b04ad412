//! En passant capture.
//!
//! The target square is the one a pawn skipped over on its double push. It
//! lives exactly one ply: the executor sets it after a double push and clears
//! it on the next real move, reading the old value first so the capture that
//! consumes it is still recognised.

use crate::{Board, GameState};
use chess_core::{Move, Piece, PieceKind, Square};

/// True if `mv` is a pawn capturing onto the current target square.
pub fn is_en_passant_capture(board: &Board, mv: &Move, target: Option<Square>) -> bool {
    target == Some(mv.to)
        && mv.from.file() != mv.to.file()
        && board
            .piece_at(mv.from)
            .is_some_and(|p| p.kind == PieceKind::Pawn)
}

/// The square of the pawn removed by an en passant capture: the capturer's
/// rank, the target's file.
pub fn captured_pawn_square(mv: &Move) -> Square {
    Square::new(mv.to.file(), mv.from.rank())
}

/// The square skipped by a pawn double push, if `mv` is one.
pub fn double_push_target(mover: Piece, mv: &Move) -> Option<Square> {
    if mover.kind != PieceKind::Pawn {
        return None;
    }
    let dir = mover.color.pawn_direction();
    if mv.from.file() == mv.to.file() && mv.from.offset(0, 2 * dir) == Some(mv.to) {
        mv.from.offset(0, dir)
    } else {
        None
    }
}

/// Removes the passed pawn and moves the capturer. Returns the captured pawn.
pub fn execute_en_passant(board: &mut Board, mv: &Move) -> Option<Piece> {
    let captured = board.set_piece_at(captured_pawn_square(mv), None);
    board.move_piece(mv);
    captured
}

/// En passant captures available to the side to move, lower file first.
///
/// These are pseudo-legal; the validator still checks the mover's king.
pub fn en_passant_moves(state: &GameState) -> Vec<Move> {
    let Some(target) = state.en_passant_target() else {
        return Vec::new();
    };
    let board = state.board();
    let color = state.current_player();
    let own_pawn = Piece::new(PieceKind::Pawn, color);
    let victim = Piece::new(PieceKind::Pawn, color.opposite());

    [-1, 1]
        .into_iter()
        .filter_map(|df| target.offset(df, -color.pawn_direction()))
        .map(|from| Move::new(from, target))
        .filter(|mv| board.piece_at(mv.from) == Some(own_pawn))
        .filter(|mv| board.piece_at(captured_pawn_square(mv)) == Some(victim))
        .collect()
}
