//! Pawn promotion.

use crate::Board;
use chess_core::{Move, Piece, PieceKind, Promotion};

/// True if `mv` takes a pawn onto its promotion rank.
pub fn is_promotion_move(board: &Board, mv: &Move) -> bool {
    board
        .piece_at(mv.from)
        .is_some_and(|p| p.kind == PieceKind::Pawn && mv.to.rank() == p.color.promotion_rank())
}

/// Replaces the pawn with `promotion` on the target square, returning any
/// captured piece.
pub fn execute_promotion(board: &mut Board, mv: &Move, promotion: Promotion) -> Option<Piece> {
    let pawn = board.set_piece_at(mv.from, None)?;
    board.set_piece_at(mv.to, Some(Piece::new(promotion.kind(), pawn.color)))
}

/// One move per promotion choice, queen first.
pub fn promotion_choices(mv: Move) -> impl Iterator<Item = Move> {
    Promotion::ALL.into_iter().map(move |p| mv.with_promotion(p))
}
