//! Piece-square tables, a1 first, from white's side of the board.
//!
//! Black looks its squares up through the vertical mirror.

use chess_core::{Color, PieceKind, Square};

#[rustfmt::skip]
const PAWN_MG: [i32; 64] = [
    //  a    b    c    d    e    f    g    h
        0,   0,   0,   0,   0,   0,   0,   0,  // rank 1
        5,  10,  10, -20, -20,  10,  10,   5,  // rank 2
        5,  -5, -10,   0,   0, -10,  -5,   5,  // rank 3
        0,   0,   0,  20,  20,   0,   0,   0,  // rank 4
        5,   5,  10,  25,  25,  10,   5,   5,  // rank 5
       10,  10,  20,  30,  30,  20,  10,  10,  // rank 6
       50,  50,  50,  50,  50,  50,  50,  50,  // rank 7
        0,   0,   0,   0,   0,   0,   0,   0,  // rank 8
];

#[rustfmt::skip]
const PAWN_EG: [i32; 64] = [
        0,   0,   0,   0,   0,   0,   0,   0,
       10,  10,  10,  10,  10,  10,  10,  10,
       10,  10,  10,  10,  10,  10,  10,  10,
       20,  20,  20,  20,  20,  20,  20,  20,
       30,  30,  30,  30,  30,  30,  30,  30,
       50,  50,  50,  50,  50,  50,  50,  50,
       80,  80,  80,  80,  80,  80,  80,  80,
        0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
      -50, -40, -30, -30, -30, -30, -40, -50,
      -40, -20,   0,   5,   5,   0, -20, -40,
      -30,   5,  10,  15,  15,  10,   5, -30,
      -30,   0,  15,  20,  20,  15,   0, -30,
      -30,   5,  15,  20,  20,  15,   5, -30,
      -30,   0,  10,  15,  15,  10,   0, -30,
      -40, -20,   0,   0,   0,   0, -20, -40,
      -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
      -20, -10, -10, -10, -10, -10, -10, -20,
      -10,   5,   0,   0,   0,   0,   5, -10,
      -10,  10,  10,  10,  10,  10,  10, -10,
      -10,   0,  10,  10,  10,  10,   0, -10,
      -10,   5,   5,  10,  10,   5,   5, -10,
      -10,   0,   5,  10,  10,   5,   0, -10,
      -10,   0,   0,   0,   0,   0,   0, -10,
      -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
        0,   0,   0,   5,   5,   0,   0,   0,
       -5,   0,   0,   0,   0,   0,   0,  -5,
       -5,   0,   0,   0,   0,   0,   0,  -5,
       -5,   0,   0,   0,   0,   0,   0,  -5,
       -5,   0,   0,   0,   0,   0,   0,  -5,
       -5,   0,   0,   0,   0,   0,   0,  -5,
        5,  10,  10,  10,  10,  10,  10,   5,
        0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN: [i32; 64] = [
      -20, -10, -10,  -5,  -5, -10, -10, -20,
      -10,   0,   5,   0,   0,   0,   0, -10,
      -10,   5,   5,   5,   5,   5,   0, -10,
        0,   0,   5,   5,   5,   5,   0,  -5,
       -5,   0,   5,   5,   5,   5,   0,  -5,
      -10,   0,   5,   5,   5,   5,   0, -10,
      -10,   0,   0,   0,   0,   0,   0, -10,
      -20, -10, -10,  -5,  -5, -10, -10, -20,
];

#[rustfmt::skip]
const KING_MG: [i32; 64] = [
       20,  30,  10,   0,   0,  10,  30,  20,
       20,  20,   0,   0,   0,   0,  20,  20,
      -10, -20, -20, -20, -20, -20, -20, -10,
      -20, -30, -30, -40, -40, -30, -30, -20,
      -30, -40, -40, -50, -50, -40, -40, -30,
      -30, -40, -40, -50, -50, -40, -40, -30,
      -30, -40, -40, -50, -50, -40, -40, -30,
      -30, -40, -40, -50, -50, -40, -40, -30,
];

#[rustfmt::skip]
const KING_EG: [i32; 64] = [
      -50, -30, -30, -30, -30, -30, -30, -50,
      -30, -30,   0,   0,   0,   0, -30, -30,
      -30, -10,  20,  30,  30,  20, -10, -30,
      -30, -10,  30,  40,  40,  30, -10, -30,
      -30, -10,  30,  40,  40,  30, -10, -30,
      -30, -10,  20,  30,  30,  20, -10, -30,
      -30, -20, -10,   0,   0, -10, -20, -30,
      -50, -40, -30, -20, -20, -30, -40, -50,
];

fn index(sq: Square, color: Color) -> usize {
    match color {
        Color::White => sq.index() as usize,
        Color::Black => (sq.index() ^ 56) as usize,
    }
}

/// Opening and endgame table values for a piece on `sq`.
pub fn square_values(kind: PieceKind, color: Color, sq: Square) -> (i32, i32) {
    let i = index(sq, color);
    match kind {
        PieceKind::Pawn => (PAWN_MG[i], PAWN_EG[i]),
        PieceKind::Knight => (KNIGHT[i], KNIGHT[i]),
        PieceKind::Bishop => (BISHOP[i], BISHOP[i]),
        PieceKind::Rook => (ROOK[i], ROOK[i]),
        PieceKind::Queen => (QUEEN[i], QUEEN[i]),
        PieceKind::King => (KING_MG[i], KING_EG[i]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn black_reads_mirrored_squares() {
        for kind in PieceKind::ALL {
            assert_eq!(
                square_values(kind, Color::White, sq("c2")),
                square_values(kind, Color::Black, sq("c7"))
            );
        }
    }

    #[test]
    fn king_prefers_shelter_early_and_center_late() {
        let (mg_g1, eg_g1) = square_values(PieceKind::King, Color::White, sq("g1"));
        let (mg_e4, eg_e4) = square_values(PieceKind::King, Color::White, sq("e4"));
        assert!(mg_g1 > mg_e4);
        assert!(eg_e4 > eg_g1);
    }

    #[test]
    fn advanced_pawns_score_higher() {
        let (_, eg2) = square_values(PieceKind::Pawn, Color::White, sq("d2"));
        let (_, eg7) = square_values(PieceKind::Pawn, Color::White, sq("d7"));
        assert!(eg7 > eg2);
    }
}
