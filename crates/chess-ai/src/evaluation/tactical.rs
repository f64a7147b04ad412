//! Short-range tactical motifs read straight off the board.
//!
//! Nothing here searches: each term looks at who controls which squares
//! right now and along which lines sliders see.

use super::Evaluator;
use chess_core::{Color, Piece, PieceKind, Square};
use chess_engine::movegen::{attacked_squares, slide_directions};
use chess_engine::Board;

const FORK_BONUS: i32 = 40;
const ABSOLUTE_PIN_BONUS: i32 = 40;
const RELATIVE_PIN_BONUS: i32 = 20;
const DISCOVERED_ATTACK_BONUS: i32 = 25;
const CHECK_BONUS: i32 = 30;

/// Attacking a piece with the king is never "cheap".
const KING_ATTACKER_VALUE: i32 = 10_000;

/// Fork targets must be worth at least a knight; the king always counts.
fn is_fork_target(piece: Piece) -> bool {
    piece.kind == PieceKind::King || piece.value() >= PieceKind::Knight.value()
}

/// Discovered attacks only matter against rooks, queens and the king.
fn is_valuable(piece: Piece) -> bool {
    piece.kind == PieceKind::King || piece.value() >= PieceKind::Rook.value()
}

fn attacker_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::King => KING_ATTACKER_VALUE,
        other => other.value(),
    }
}

/// Per-square control counts and the cheapest controlling piece, per color.
struct Control {
    count: [[u8; 64]; 2],
    cheapest: [[i32; 64]; 2],
}

impl Control {
    fn of(board: &Board) -> Self {
        let mut control = Control {
            count: [[0; 64]; 2],
            cheapest: [[i32::MAX; 64]; 2],
        };
        for (from, piece) in board.pieces() {
            let side = piece.color.index();
            for sq in attacked_squares(board, from) {
                let idx = sq.index() as usize;
                control.count[side][idx] += 1;
                control.cheapest[side][idx] =
                    control.cheapest[side][idx].min(attacker_value(piece.kind));
            }
        }
        control
    }

    fn attacked_by(&self, sq: Square, color: Color) -> bool {
        self.count[color.index()][sq.index() as usize] > 0
    }

    fn cheapest(&self, sq: Square, color: Color) -> i32 {
        self.cheapest[color.index()][sq.index() as usize]
    }
}

/// Occupied squares along one direction from `from`, nearest first.
fn ray(board: &Board, from: Square, (df, dr): (i8, i8)) -> impl Iterator<Item = (Square, Piece)> + '_ {
    std::iter::successors(from.offset(df, dr), move |sq| sq.offset(df, dr))
        .filter_map(move |sq| board.piece_at(sq).map(|p| (sq, p)))
}

/// Material at risk for `color`: half the value of each piece attacked and
/// undefended, a quarter of the difference for one attacked by something
/// cheaper.
fn vulnerability(board: &Board, color: Color, control: &Control) -> i32 {
    let enemy = color.opposite();
    board
        .pieces_of(color)
        .filter(|(_, piece)| piece.kind != PieceKind::King)
        .filter(|&(sq, _)| control.attacked_by(sq, enemy))
        .map(|(sq, piece)| {
            if !control.attacked_by(sq, color) {
                piece.value() / 2
            } else {
                let cheapest = control.cheapest(sq, enemy);
                if cheapest < piece.value() {
                    (piece.value() - cheapest) / 4
                } else {
                    0
                }
            }
        })
        .sum()
}

/// Pieces of `color` hitting two or more fork targets at once.
fn fork_count(board: &Board, color: Color) -> i32 {
    board
        .pieces_of(color)
        .filter(|&(from, _)| {
            attacked_squares(board, from)
                .into_iter()
                .filter_map(|sq| board.piece_at(sq))
                .filter(|target| target.color != color && is_fork_target(*target))
                .count()
                >= 2
        })
        .count() as i32
}

/// Bonus for `color`'s sliders pinning an enemy piece to its king or queen.
fn pin_bonus(board: &Board, color: Color) -> i32 {
    let mut bonus = 0;
    for (from, piece) in board.pieces_of(color) {
        for &dir in slide_directions(piece.kind) {
            let mut line = ray(board, from, dir);
            let (Some((_, front)), Some((_, back))) = (line.next(), line.next()) else {
                continue;
            };
            if front.color == color || back.color == color || front.kind == PieceKind::King {
                continue;
            }
            match back.kind {
                PieceKind::King => bonus += ABSOLUTE_PIN_BONUS,
                PieceKind::Queen if front.value() < back.value() => bonus += RELATIVE_PIN_BONUS,
                _ => {}
            }
        }
    }
    bonus
}

/// `color`'s sliders lined up behind one of their own non-sliders, with a
/// valuable enemy piece beyond.
fn discovered_attack_count(board: &Board, color: Color) -> i32 {
    let mut count = 0;
    for (from, piece) in board.pieces_of(color) {
        for &dir in slide_directions(piece.kind) {
            let mut line = ray(board, from, dir);
            let (Some((_, front)), Some((_, back))) = (line.next(), line.next()) else {
                continue;
            };
            if front.color == color
                && !front.kind.is_slider()
                && front.kind != PieceKind::King
                && back.color != color
                && is_valuable(back)
            {
                count += 1;
            }
        }
    }
    count
}

/// True if `color` attacks the enemy king.
fn gives_check(board: &Board, color: Color, control: &Control) -> bool {
    board
        .king_square(color.opposite())
        .is_some_and(|king| control.attacked_by(king, color))
}

/// Hanging and under-defended pieces, forks, pins, discovered attacks and
/// checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TacticalEvaluator;

impl TacticalEvaluator {
    fn side_score(board: &Board, color: Color, control: &Control) -> i32 {
        let mut score = -vulnerability(board, color, control);
        score += fork_count(board, color) * FORK_BONUS;
        score += pin_bonus(board, color);
        score += discovered_attack_count(board, color) * DISCOVERED_ATTACK_BONUS;
        if gives_check(board, color, control) {
            score += CHECK_BONUS;
        }
        score
    }
}

impl Evaluator for TacticalEvaluator {
    fn evaluate_white(&self, board: &Board) -> i32 {
        let control = Control::of(board);
        Self::side_score(board, Color::White, &control) - Self::side_score(board, Color::Black, &control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    #[test]
    fn start_is_level() {
        assert_eq!(TacticalEvaluator.evaluate_white(&Board::starting()), 0);
    }

    #[test]
    fn hanging_queen() {
        // Rook d1 hits the undefended queen on d5; the rook is guarded by the king.
        let b = board("4k3/8/8/3q4/8/8/8/3RK3");
        let control = Control::of(&b);
        assert_eq!(vulnerability(&b, Color::Black, &control), 450);
        assert_eq!(vulnerability(&b, Color::White, &control), 0);
        assert_eq!(TacticalEvaluator.evaluate_white(&b), 450);
    }

    #[test]
    fn defended_piece_attacked_by_pawn() {
        // Black pawn d6 attacks the knight on e5, which the d4 pawn defends.
        let b = board("4k3/8/3p4/4N3/3P4/8/8/4K3");
        let control = Control::of(&b);
        assert_eq!(vulnerability(&b, Color::White, &control), (320 - 100) / 4);
    }

    #[test]
    fn knight_fork_on_king_and_rook() {
        let b = board("r3k3/2N5/8/8/8/8/8/4K3");
        assert_eq!(fork_count(&b, Color::White), 1);
        assert_eq!(fork_count(&b, Color::Black), 0);
        assert!(gives_check(&b, Color::White, &Control::of(&b)));
    }

    #[test]
    fn pins() {
        // Bishop b5 pins the d7 knight to the e8 king.
        let b = board("4k3/3n4/8/1B6/8/8/8/4K3");
        assert_eq!(pin_bonus(&b, Color::White), ABSOLUTE_PIN_BONUS);
        // Rook a4 pins the d4 knight to the queen on h4.
        let b = board("4k3/8/8/8/R2n3q/8/8/4K3");
        assert_eq!(pin_bonus(&b, Color::White), RELATIVE_PIN_BONUS);
    }

    #[test]
    fn discovered_attack_behind_own_knight() {
        // The e1 rook sits behind its own knight, with the black queen beyond.
        let b = board("k7/4q3/8/8/4N3/8/8/K3R3");
        assert_eq!(discovered_attack_count(&b, Color::White), 1);
        assert_eq!(discovered_attack_count(&b, Color::Black), 0);
    }
}
