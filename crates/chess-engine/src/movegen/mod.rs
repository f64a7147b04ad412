//! Pseudo-legal move generation.
//!
//! Each piece kind produces the moves its geometry allows on the current
//! board, without asking whether the mover's own king ends up in check.
//! Legality is established afterwards by trial execution (see
//! [`crate::validator`]). En passant and castling come from
//! [`crate::special`], not from here.

mod attacks;
pub mod perft;

use crate::Board;
use chess_core::{Color, Move, PieceKind, Square};

pub use attacks::attacked_squares;

/// Knight jumps as (file, rank) offsets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// King steps as (file, rank) offsets.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Sliding directions for a piece kind, empty for non-sliders.
pub const fn slide_directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    }
}

/// Pseudo-legal moves of the piece standing on `from`.
///
/// Returns nothing for an empty square. Pawn moves onto the promotion rank
/// carry no promotion choice; the caller supplies one before execution.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, &mut moves),
        PieceKind::Knight => step_moves(board, from, piece.color, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => slide_moves(
            board,
            from,
            piece.color,
            slide_directions(piece.kind),
            &mut moves,
        ),
        PieceKind::King => step_moves(board, from, piece.color, &KING_OFFSETS, &mut moves),
    }
    moves
}

/// Pseudo-legal moves of every piece of `color`, squares in rank-major order.
pub fn all_pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(from, _)| pseudo_legal_moves(board, from))
        .collect()
}

fn pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Move>) {
    let dir = color.pawn_direction();

    if let Some(one) = from.offset(0, dir) {
        if board.is_empty_at(one) {
            moves.push(Move::new(from, one));
            if from.rank() == color.pawn_start_rank() {
                if let Some(two) = one.offset(0, dir) {
                    if board.is_empty_at(two) {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir) {
            if board.piece_at(to).is_some_and(|p| p.color != color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

fn step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(df, dr) in offsets {
        if let Some(to) = from.offset(df, dr) {
            if board.piece_at(to).map_or(true, |p| p.color != color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

fn slide_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(df, dr) in directions {
        let mut current = from;
        while let Some(to) = current.offset(df, dr) {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(p) => {
                    if p.color != color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
