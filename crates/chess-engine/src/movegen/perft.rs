//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Promotions count once per promotion piece.

use crate::special::{is_promotion_move, promotion_choices};
use crate::GameState;
use chess_core::Move;

/// Legal moves with each promotion expanded into its four choices.
fn expanded_moves(state: &GameState) -> Vec<Move> {
    let mut moves = Vec::new();
    for mv in state.legal_moves() {
        if is_promotion_move(state.board(), &mv) {
            moves.extend(promotion_choices(mv));
        } else {
            moves.push(mv);
        }
    }
    moves
}

/// Counts the number of leaf nodes at the given depth.
pub fn perft(state: &GameState, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = expanded_moves(state);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        let mut next = state.clone();
        if next.apply(*m).is_ok() {
            nodes += perft(&next, depth - 1);
        }
    }
    nodes
}

/// Perft with divide - node count below each root move, sorted by move text.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(state: &GameState, depth: u32) -> Vec<(String, u64)> {
    let moves = expanded_moves(state);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let mut next = state.clone();
        if next.apply(*m).is_err() {
            continue;
        }
        let nodes = if depth > 1 {
            perft(&next, depth - 1)
        } else {
            1
        };
        results.push((m.to_uci(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
