//! Square control.
//!
//! Unlike move generation, control includes squares held by friendly pieces
//! (the piece defends them) and pawn diagonals whether or not anything stands
//! there. The evaluators build their attack/defense maps from this.

use super::{slide_directions, KING_OFFSETS, KNIGHT_OFFSETS};
use crate::Board;
use chess_core::{PieceKind, Square};

/// Squares controlled by the piece on `from`.
pub fn attacked_squares(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    match piece.kind {
        PieceKind::Pawn => [-1, 1]
            .into_iter()
            .filter_map(|df| from.offset(df, piece.color.pawn_direction()))
            .collect(),
        PieceKind::Knight => steps(from, &KNIGHT_OFFSETS),
        PieceKind::King => steps(from, &KING_OFFSETS),
        kind => {
            let mut out = Vec::new();
            for &(df, dr) in slide_directions(kind) {
                let mut current = from;
                while let Some(to) = current.offset(df, dr) {
                    out.push(to);
                    if !board.is_empty_at(to) {
                        break;
                    }
                    current = to;
                }
            }
            out
        }
    }
}

fn steps(from: Square, offsets: &[(i8, i8)]) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn pawn_controls_empty_diagonals() {
        let board = Board::starting();
        let mut control = attacked_squares(&board, sq("e2"));
        control.sort();
        assert_eq!(control, vec![sq("d3"), sq("f3")]);
        assert_eq!(attacked_squares(&board, sq("a7")), vec![sq("b6")]);
    }

    #[test]
    fn slider_control_includes_defended_piece() {
        let board = Board::starting();
        // The a1 rook defends a2 and b1 but sees nothing past them.
        let mut control = attacked_squares(&board, Square::A1);
        control.sort();
        assert_eq!(control, vec![Square::B1, sq("a2")]);
    }
}
