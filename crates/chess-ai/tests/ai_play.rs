//! Move selection and controller flow through the public API.

use chess_ai::{
    AiConfig, Evaluator, EvaluatorKind, GameController, MaterialEvaluator, MoveSearcher,
};
use chess_core::{Color, PieceKind};
use chess_engine::{GameState, GameStatus};
use proptest::prelude::*;

fn material_searcher() -> MoveSearcher {
    MoveSearcher::new(Box::new(MaterialEvaluator::default()))
}

#[test]
fn test_prefers_the_richer_capture() {
    // d4 pawn can take the c5 pawn or the e5 knight.
    let state = GameState::from_fen("4k3/8/8/2p1n3/3P4/8/8/4K3 w - - 0 1").unwrap();
    let before = MaterialEvaluator::default().evaluate(state.board(), Color::White);
    let best = material_searcher().find_best_move(&state).unwrap();
    assert_eq!(best.to_uci(), "d4e5");

    let mut after = state.clone();
    after.make_move(best).unwrap();
    let gain = MaterialEvaluator::default().evaluate(after.board(), Color::White) - before;
    assert_eq!(gain, PieceKind::Knight.value());
}

#[test]
fn test_every_evaluator_grabs_a_hanging_queen() {
    let state = GameState::from_fen("7k/8/8/q7/8/8/8/R3K3 w - - 0 1").unwrap();
    for evaluator in [
        EvaluatorKind::Material,
        EvaluatorKind::Tactical,
        EvaluatorKind::Positional,
        EvaluatorKind::Adaptive,
    ] {
        let config = AiConfig {
            evaluator,
            ..AiConfig::default()
        };
        let searcher = MoveSearcher::new(config.build_evaluator());
        assert_eq!(
            searcher.find_best_move(&state).map(|m| m.to_uci()),
            Some("a1a5".to_string()),
            "{:?}",
            evaluator
        );
    }
}

#[test]
fn test_ai_promotes_when_it_can() {
    let mut controller = GameController::new(AiConfig {
        enabled: true,
        color: Color::Black,
        ..AiConfig::default()
    });
    controller
        .start_from_fen("4k3/8/8/8/8/8/p7/4K2R w K - 0 1")
        .unwrap();
    controller.make_move_uci("h1h2").unwrap();
    let last = *controller.move_history().last().unwrap();
    assert_eq!(last.to_uci(), "a2a1q");
}

#[test]
fn test_ai_versus_ai_runs_to_a_legal_end() {
    // Two material-only AIs shuffling pieces: the game must stay legal and
    // eventually hit a draw rule or a result.
    let mut controller = GameController::new(AiConfig {
        enabled: true,
        color: Color::White,
        evaluator: EvaluatorKind::Material,
        ..AiConfig::default()
    });
    controller
        .start_from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1")
        .unwrap();
    for _ in 0..200 {
        if controller.state().is_game_over() {
            break;
        }
        let mv = controller.best_move().unwrap();
        controller.make_move(mv).unwrap();
    }
    assert!(controller.state().is_game_over());
    assert!(matches!(
        controller.status(),
        GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::Draw(_)
    ));
}

#[test]
fn test_config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("chess-ai-config-{}.toml", std::process::id()));
    std::fs::write(&path, "enabled = true\ncolor = \"white\"\nevaluator = \"positional\"\n")
        .unwrap();
    let config = AiConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(config.enabled);
    assert_eq!(config.color, Color::White);
    assert_eq!(config.evaluator, EvaluatorKind::Positional);

    let text = toml::to_string(&config).unwrap();
    assert_eq!(AiConfig::from_toml_str(&text).unwrap(), config);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn ai_moves_are_always_playable(seed in proptest::collection::vec(0usize..64, 0..16)) {
        let mut state = GameState::new();
        for pick in seed {
            let candidates = MoveSearcher::candidates(&state);
            if candidates.is_empty() || state.is_game_over() {
                break;
            }
            state.make_move(candidates[pick % candidates.len()]).unwrap();
        }
        if let Some(mv) = material_searcher().find_best_move(&state) {
            let mut next = state.clone();
            prop_assert!(next.make_move(mv).is_ok());
        } else {
            prop_assert!(state.legal_moves().is_empty());
        }
    }
}
