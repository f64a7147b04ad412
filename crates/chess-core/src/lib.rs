//! Core types for chess.
//!
//! This crate provides the value types shared by the rules engine and the AI:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`], [`Promotion`] and [`CastleRook`] for move descriptions
//! - FEN parsing and serialization

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{format_placement, parse_placement, Fen, FenError};
pub use mov::{CastleRook, Move, MoveParseError};
pub use piece::{Piece, PieceKind, Promotion};
pub use square::{File, Rank, Square};
