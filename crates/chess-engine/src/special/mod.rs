//! Castling, en passant and promotion.
//!
//! These moves need more than the board to decide legality or carry side
//! effects beyond relocating one piece, so each gets its own handler.

pub mod castling;
pub mod en_passant;
pub mod promotion;

pub use castling::{castle_move, is_castling_legal, CastleSide, CastlingRights};
pub use en_passant::{captured_pawn_square, en_passant_moves, is_en_passant_capture};
pub use promotion::{is_promotion_move, promotion_choices};
