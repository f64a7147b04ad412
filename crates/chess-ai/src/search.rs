//! One-ply move selection.

use crate::evaluation::Evaluator;
use chess_core::Move;
use chess_engine::special::{is_promotion_move, promotion_choices};
use chess_engine::GameState;
use tracing::{trace, warn};

/// Picks the move whose resulting board scores best for the side to move.
pub struct MoveSearcher {
    evaluator: Box<dyn Evaluator>,
}

impl MoveSearcher {
    pub fn new(evaluator: Box<dyn Evaluator>) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &dyn Evaluator {
        self.evaluator.as_ref()
    }

    /// Legal moves of the side to move, with every promotion expanded into
    /// its four choices so each candidate can be played as-is.
    pub fn candidates(state: &GameState) -> Vec<Move> {
        let board = state.board();
        state
            .legal_moves()
            .into_iter()
            .flat_map(|mv| {
                if is_promotion_move(board, &mv) {
                    promotion_choices(mv).collect::<Vec<_>>()
                } else {
                    vec![mv]
                }
            })
            .collect()
    }

    /// Simulates every candidate on a copy of `state` and scores the result.
    ///
    /// The first candidate wins ties. Returns `None` when the side to move
    /// has no legal move.
    pub fn find_best_move(&self, state: &GameState) -> Option<Move> {
        let side = state.current_player();
        let mut best: Option<(Move, i32)> = None;
        for mv in Self::candidates(state) {
            let mut probe = state.position_copy();
            if let Err(err) = probe.simulate(mv) {
                warn!(%mv, %err, "skipping candidate that failed to simulate");
                continue;
            }
            let score = self.evaluator.evaluate(probe.board(), side);
            trace!(%mv, score, "candidate scored");
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
        }
        best.map(|(mv, _)| mv)
    }
}

impl std::fmt::Debug for MoveSearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveSearcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::MaterialEvaluator;
    use chess_core::{Color, Promotion};

    fn searcher() -> MoveSearcher {
        MoveSearcher::new(Box::new(MaterialEvaluator::default()))
    }

    #[test]
    fn takes_the_free_rook() {
        // Knight on c3 can take the undefended rook on d5.
        let state = GameState::from_fen("4k3/8/8/3r4/8/2N5/8/4K3 w - - 0 1").unwrap();
        assert_eq!(
            searcher().find_best_move(&state).map(|m| m.to_uci()),
            Some("c3d5".to_string())
        );
    }

    #[test]
    fn black_maximises_its_own_score() {
        let state = GameState::from_fen("4k3/8/8/3q4/8/8/8/3RK3 b - - 0 1").unwrap();
        assert_eq!(
            searcher().find_best_move(&state).map(|m| m.to_uci()),
            Some("d5d1".to_string())
        );
    }

    #[test]
    fn promotions_are_expanded_and_queen_wins() {
        let state = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let candidates = MoveSearcher::candidates(&state);
        assert_eq!(
            candidates.iter().filter(|m| m.promotion.is_some()).count(),
            4
        );
        let best = searcher().find_best_move(&state).unwrap();
        assert_eq!(best.promotion, Some(Promotion::Queen));
    }

    /// Three hundred per piece, white minus black.
    struct PieceCount;

    impl Evaluator for PieceCount {
        fn evaluate_white(&self, board: &chess_engine::Board) -> i32 {
            board
                .pieces()
                .map(|(_, piece)| piece.color.sign() * 300)
                .sum()
        }
    }

    #[test]
    fn capture_worth_300_beats_quiet_moves() {
        let state = GameState::from_fen("4k3/8/8/3n4/8/8/8/3RK3 w - - 0 1").unwrap();
        let eval = PieceCount;
        let base = eval.evaluate(state.board(), Color::White);
        for mv in MoveSearcher::candidates(&state) {
            let mut probe = state.position_copy();
            probe.simulate(mv).unwrap();
            let gain = eval.evaluate(probe.board(), Color::White) - base;
            let expected = if mv.to_uci() == "d1d5" { 300 } else { 0 };
            assert_eq!(gain, expected, "{mv}");
        }
        let searcher = MoveSearcher::new(Box::new(PieceCount));
        assert_eq!(
            searcher.find_best_move(&state).map(|m| m.to_uci()),
            Some("d1d5".to_string())
        );
    }

    #[test]
    fn first_move_wins_ties() {
        let state = GameState::new();
        let first = MoveSearcher::candidates(&state)[0];
        assert_eq!(searcher().find_best_move(&state), Some(first));
    }

    #[test]
    fn no_move_when_mated() {
        let mut state = GameState::new();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            state.make_move_uci(mv).unwrap();
        }
        assert_eq!(searcher().find_best_move(&state), None);
    }

    #[test]
    fn search_leaves_the_game_untouched() {
        let state = GameState::new();
        let before = state.clone();
        searcher().find_best_move(&state);
        assert_eq!(state, before);
    }
}
