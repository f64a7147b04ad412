//! Error types for move validation and execution.

use chess_core::{Color, Move, MoveParseError, Square};
use thiserror::Error;

/// Why a castling request was refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CastlingError {
    #[error("move is not a castling move")]
    NotACastlingMove,

    #[error("king or rook has already moved")]
    RightForfeited,

    #[error("{0} lies between king and rook and is occupied")]
    PathBlocked(Square),

    #[error("cannot castle out of check")]
    KingInCheck,

    #[error("king would cross or land on attacked square {0}")]
    PassesThroughCheck(Square),
}

/// A move request the engine refused. The game state is unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("game has already ended")]
    GameOver,

    #[error("no piece on {0}")]
    NoPieceAtSource(Square),

    #[error("it is {0}'s turn")]
    WrongTurn(Color),

    #[error("{0} promotes a pawn and needs a promotion piece")]
    PromotionRequired(Move),

    #[error("{0} is not a promotion move")]
    UnexpectedPromotion(Move),

    #[error("castling rejected: {0}")]
    Castling(#[from] CastlingError),

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("invalid move text: {0}")]
    Parse(#[from] MoveParseError),
}
