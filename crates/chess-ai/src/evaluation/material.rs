use super::Evaluator;
use chess_core::{Color, PieceKind};
use chess_engine::Board;

/// Default bonus for owning two bishops on opposite square colors.
pub const BISHOP_PAIR_BONUS: i32 = 50;

/// Piece values plus a bishop-pair bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialEvaluator {
    /// Full bonus for bishops on both square colors; half of it when all of
    /// a side's bishops share one color.
    pub bishop_pair_bonus: i32,
}

impl Default for MaterialEvaluator {
    fn default() -> Self {
        Self {
            bishop_pair_bonus: BISHOP_PAIR_BONUS,
        }
    }
}

impl MaterialEvaluator {
    pub fn new(bishop_pair_bonus: i32) -> Self {
        Self { bishop_pair_bonus }
    }

    fn bishop_pair(&self, board: &Board, color: Color) -> i32 {
        let (mut light, mut dark) = (0, 0);
        for sq in board.squares_of(PieceKind::Bishop, color) {
            if sq.is_light() {
                light += 1;
            } else {
                dark += 1;
            }
        }
        match (light, dark) {
            (l, d) if l + d < 2 => 0,
            (0, _) | (_, 0) => self.bishop_pair_bonus / 2,
            _ => self.bishop_pair_bonus,
        }
    }
}

impl Evaluator for MaterialEvaluator {
    fn evaluate_white(&self, board: &Board) -> i32 {
        let material: i32 = board
            .pieces()
            .map(|(_, piece)| piece.color.sign() * piece.value())
            .sum();
        material + self.bishop_pair(board, Color::White) - self.bishop_pair(board, Color::Black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(placement: &str) -> i32 {
        MaterialEvaluator::default().evaluate_white(&Board::from_placement(placement).unwrap())
    }

    #[test]
    fn start_is_level() {
        assert_eq!(score("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"), 0);
    }

    #[test]
    fn piece_values() {
        assert_eq!(score("4k3/8/8/8/8/8/8/R3K3"), 500);
        assert_eq!(score("4k3/8/8/8/8/8/8/1N2K3"), 320);
        assert_eq!(score("3qk3/8/8/8/8/8/PPP5/4K3"), -600);
    }

    #[test]
    fn bishop_pair_on_both_colors() {
        // c1 dark, f1 light.
        assert_eq!(score("4k3/8/8/8/8/8/8/2B1KB2"), 2 * 330 + 50);
    }

    #[test]
    fn same_colored_bishops_get_half() {
        // c1 and e3 are both dark.
        assert_eq!(score("4k3/8/8/8/8/4B3/8/2B1K3"), 2 * 330 + 25);
    }

    #[test]
    fn custom_bonus() {
        let eval = MaterialEvaluator::new(0);
        let board = Board::from_placement("2b1kb2/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(eval.evaluate_white(&board), -660);
    }
}
