//! Legal move generation and move validation.
//!
//! A pseudo-legal move is legal when executing it on a throwaway copy of the
//! game leaves the mover's king out of check. Every probe copies the
//! position, simulates one move and is dropped.

use crate::error::MoveError;
use crate::movegen::{all_pseudo_legal_moves, pseudo_legal_moves};
use crate::special::castling::{castle_side, castling_candidates, is_castling_legal};
use crate::special::{castle_move, en_passant_moves, is_promotion_move};
use crate::{Board, GameState};
use chess_core::{Color, Move, Square};

/// Pseudo-legal moves of the piece on `from`, ignoring king safety.
pub fn generate_basic_moves(state: &GameState, from: Square) -> Vec<Move> {
    pseudo_legal_moves(state.board(), from)
}

/// True if any opposing piece has a pseudo-legal move onto `color`'s king.
///
/// A board without that king is never in check.
pub fn is_king_in_check_on(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        return false;
    };
    all_pseudo_legal_moves(board, color.opposite())
        .iter()
        .any(|mv| mv.to == king)
}

pub fn is_king_in_check(state: &GameState, color: Color) -> bool {
    is_king_in_check_on(state.board(), color)
}

/// Simulates `mv` on a copy and reports whether its mover's king is safe.
fn leaves_king_safe(state: &GameState, mv: &Move) -> bool {
    let Some(mover) = state.board().piece_at(mv.from) else {
        return false;
    };
    let mut probe = state.position_copy();
    match probe.simulate(*mv) {
        Ok(()) => !is_king_in_check_on(probe.board(), mover.color),
        Err(_) => false,
    }
}

/// Every legal move for the side to move.
///
/// Ordered as ordinary moves by source square (a1..h8), then en passant
/// captures, then castling. Promotion moves carry no promotion piece.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let color = state.current_player();
    let mut moves: Vec<Move> = all_pseudo_legal_moves(state.board(), color)
        .into_iter()
        .chain(en_passant_moves(state))
        .filter(|mv| leaves_king_safe(state, mv))
        .collect();
    moves.extend(castling_candidates(color).filter(|mv| is_castling_legal(state, mv).is_ok()));
    moves
}

/// Legal moves starting on `from`. Empty unless a piece of the side to move
/// stands there.
pub fn legal_moves_from(state: &GameState, from: Square) -> Vec<Move> {
    legal_moves(state)
        .into_iter()
        .filter(|mv| mv.from == from)
        .collect()
}

/// True if `color` has at least one legal move.
///
/// Castling is not tried: whenever castling is legal, the single king step
/// towards the rook is legal too.
pub fn has_legal_moves(state: &GameState, color: Color) -> bool {
    let board = state.board();
    let en_passant = if color == state.current_player() {
        en_passant_moves(state)
    } else {
        Vec::new()
    };
    board
        .pieces_of(color)
        .flat_map(|(from, _)| pseudo_legal_moves(board, from))
        .chain(en_passant)
        .any(|mv| leaves_king_safe(state, &mv))
}

/// True if `mv` would be accepted by [`GameState::make_move`].
pub fn is_legal(state: &GameState, mv: &Move) -> bool {
    validate(state, mv).is_ok()
}

/// Checks a player's move against the current state and returns it in the
/// form the executor runs: castling moves gain their rook leg.
///
/// Nothing is mutated, so a rejected move leaves the game untouched.
pub fn validate(state: &GameState, mv: &Move) -> Result<Move, MoveError> {
    if state.is_game_over() {
        return Err(MoveError::GameOver);
    }
    let board = state.board();
    let piece = board
        .piece_at(mv.from)
        .ok_or(MoveError::NoPieceAtSource(mv.from))?;
    if piece.color != state.current_player() {
        return Err(MoveError::WrongTurn(state.current_player()));
    }

    let promoting = is_promotion_move(board, mv);
    if !promoting && mv.promotion.is_some() {
        return Err(MoveError::UnexpectedPromotion(*mv));
    }

    if let Some((color, side)) = castle_side(board, mv) {
        is_castling_legal(state, mv)?;
        return Ok(castle_move(color, side));
    }

    let candidate = legal_moves_from(state, mv.from)
        .into_iter()
        .find(|c| c.to == mv.to && !c.is_castling())
        .ok_or(MoveError::IllegalMove(*mv))?;

    match (promoting, mv.promotion) {
        (true, None) => Err(MoveError::PromotionRequired(*mv)),
        (_, Some(p)) => Ok(candidate.with_promotion(p)),
        (false, None) => Ok(candidate),
    }
}
