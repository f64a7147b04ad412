//! Piece placement and pawn structure.

use super::pst::square_values;
use super::Evaluator;
use crate::phase::game_phase;
use chess_core::{Color, Piece, PieceKind, Square};
use chess_engine::Board;

const DOUBLED_PAWN_PENALTY: i32 = 15;
const ISOLATED_PAWN_PENALTY: i32 = 20;
const BACKWARD_PAWN_PENALTY: i32 = 10;
/// By rank counted from the pawn's own side.
const PASSED_PAWN_BONUS: [i32; 8] = [0, 5, 10, 20, 35, 60, 100, 200];

const ROOK_OPEN_FILE_BONUS: i32 = 20;
const ROOK_SEMI_OPEN_BONUS: i32 = 10;
const ROOK_7TH_RANK_BONUS: i32 = 20;
const KNIGHT_OUTPOST_BONUS: i32 = 20;

/// Per pawn directly in front of the king, and one square further.
const SHIELD_NEAR_BONUS: i32 = 10;
const SHIELD_FAR_BONUS: i32 = 5;

/// Rank index as seen from `color`'s side: 0 is its back rank.
fn relative_rank(sq: Square, color: Color) -> usize {
    match color {
        Color::White => sq.rank().index() as usize,
        Color::Black => 7 - sq.rank().index() as usize,
    }
}

fn pawns(board: &Board, color: Color) -> Vec<Square> {
    board.squares_of(PieceKind::Pawn, color).collect()
}

fn file_distance(a: Square, b: Square) -> u8 {
    a.file().index().abs_diff(b.file().index())
}

/// No enemy pawn ahead of it on its own or an adjacent file.
fn is_passed(sq: Square, color: Color, enemy_pawns: &[Square]) -> bool {
    let rank = relative_rank(sq, color);
    !enemy_pawns
        .iter()
        .any(|&e| file_distance(sq, e) <= 1 && relative_rank(e, color) > rank)
}

fn is_isolated(sq: Square, own_pawns: &[Square]) -> bool {
    !sq.file()
        .neighbors()
        .any(|file| own_pawns.iter().any(|p| p.file() == file))
}

/// Every friendly pawn on a neighbouring file is already further up, and an
/// enemy pawn guards the square in front.
fn is_backward(board: &Board, sq: Square, color: Color, own_pawns: &[Square]) -> bool {
    let rank = relative_rank(sq, color);
    let neighbours: Vec<Square> = own_pawns
        .iter()
        .copied()
        .filter(|p| sq.file().neighbors().any(|file| file == p.file()))
        .collect();
    if neighbours.is_empty() || neighbours.iter().any(|&p| relative_rank(p, color) <= rank) {
        return false;
    }
    let dir = color.pawn_direction();
    let enemy_pawn = Piece::new(PieceKind::Pawn, color.opposite());
    sq.offset(0, dir).is_some_and(|stop| {
        [-1, 1]
            .into_iter()
            .filter_map(|df| stop.offset(df, dir))
            .any(|guard| board.piece_at(guard) == Some(enemy_pawn))
    })
}

fn pawn_structure(board: &Board, color: Color) -> i32 {
    let own = pawns(board, color);
    let enemy = pawns(board, color.opposite());
    let mut score = 0;

    let mut per_file = [0i32; 8];
    for p in &own {
        per_file[p.file().index() as usize] += 1;
    }
    score -= per_file
        .iter()
        .map(|&n| (n - 1).max(0) * DOUBLED_PAWN_PENALTY)
        .sum::<i32>();

    for &p in &own {
        if is_isolated(p, &own) {
            score -= ISOLATED_PAWN_PENALTY;
        } else if is_backward(board, p, color, &own) {
            score -= BACKWARD_PAWN_PENALTY;
        }
        if is_passed(p, color, &enemy) {
            score += PASSED_PAWN_BONUS[relative_rank(p, color)];
        }
    }
    score
}

fn rook_placement(board: &Board, color: Color) -> i32 {
    let own = pawns(board, color);
    let enemy = pawns(board, color.opposite());
    board
        .squares_of(PieceKind::Rook, color)
        .map(|sq| {
            let own_on_file = own.iter().any(|p| p.file() == sq.file());
            let enemy_on_file = enemy.iter().any(|p| p.file() == sq.file());
            let file_bonus = match (own_on_file, enemy_on_file) {
                (false, false) => ROOK_OPEN_FILE_BONUS,
                (false, true) => ROOK_SEMI_OPEN_BONUS,
                _ => 0,
            };
            let seventh = if relative_rank(sq, color) == 6 {
                ROOK_7TH_RANK_BONUS
            } else {
                0
            };
            file_bonus + seventh
        })
        .sum()
}

/// Knights on ranks four to six, backed by a pawn and out of reach of
/// enemy pawns.
fn knight_outposts(board: &Board, color: Color) -> i32 {
    let enemy = pawns(board, color.opposite());
    let own_pawn = Piece::new(PieceKind::Pawn, color);
    let back = -color.pawn_direction();
    board
        .squares_of(PieceKind::Knight, color)
        .filter(|&sq| (3..=5).contains(&relative_rank(sq, color)))
        .filter(|&sq| {
            [-1, 1]
                .into_iter()
                .filter_map(|df| sq.offset(df, back))
                .any(|s| board.piece_at(s) == Some(own_pawn))
        })
        .filter(|&sq| {
            let rank = relative_rank(sq, color);
            !enemy
                .iter()
                .any(|&e| file_distance(sq, e) == 1 && relative_rank(e, color) > rank)
        })
        .count() as i32
        * KNIGHT_OUTPOST_BONUS
}

/// Own pawns on the three files around the king, one and two squares ahead.
fn pawn_shield(board: &Board, color: Color) -> i32 {
    let Some(king) = board.king_square(color) else {
        return 0;
    };
    let own_pawn = Some(Piece::new(PieceKind::Pawn, color));
    let dir = color.pawn_direction();
    let mut score = 0;
    for df in -1..=1 {
        for (steps, bonus) in [(1, SHIELD_NEAR_BONUS), (2, SHIELD_FAR_BONUS)] {
            if king
                .offset(df, steps * dir)
                .is_some_and(|sq| board.piece_at(sq) == own_pawn)
            {
                score += bonus;
            }
        }
    }
    score
}

/// Phase-blended piece-square tables, pawn structure, rook files, knight
/// outposts and a king pawn shield that fades towards the endgame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionalEvaluator;

impl PositionalEvaluator {
    fn side_score(board: &Board, color: Color, phase: f32) -> f32 {
        let (mut opening, mut endgame) = (0, 0);
        for (sq, piece) in board.pieces_of(color) {
            let (mg, eg) = square_values(piece.kind, color, sq);
            opening += mg;
            endgame += eg;
        }
        let tables = opening as f32 * (1.0 - phase) + endgame as f32 * phase;
        let shield = pawn_shield(board, color) as f32 * (1.0 - phase);
        let structure = pawn_structure(board, color)
            + rook_placement(board, color)
            + knight_outposts(board, color);
        tables + shield + structure as f32
    }
}

impl Evaluator for PositionalEvaluator {
    fn evaluate_white(&self, board: &Board) -> i32 {
        let phase = game_phase(board);
        let score = Self::side_score(board, Color::White, phase)
            - Self::side_score(board, Color::Black, phase);
        score.round() as i32
    }
}
