//! Position identity for repetition counting.

use crate::special::CastlingRights;
use crate::Board;
use chess_core::{Color, Square};

/// Everything that makes two positions the same for the repetition rule:
/// piece placement, side to move, castling rights and en passant target.
///
/// Stored whole rather than hashed down, so distinct positions never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSignature {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}
