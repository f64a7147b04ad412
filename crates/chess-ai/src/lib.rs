//! Move selection and game control on top of `chess-engine`.
//!
//! - [`Evaluator`] and its implementations score boards in centipawns
//! - [`MoveSearcher`] plays the legal move whose resulting board scores best
//! - [`GameController`] runs a game for a UI, with an optional AI opponent
//!   and [`GameObserver`] callbacks
//! - [`AiConfig`] selects the evaluator and AI side, loaded from TOML
//!
//! # Example
//!
//! ```
//! use chess_ai::{AiConfig, GameController};
//! use chess_core::Color;
//!
//! let mut controller = GameController::new(AiConfig::default());
//! controller.set_ai_enabled(true);
//! controller.set_ai_color(Color::Black);
//! controller.make_move_uci("e2e4").unwrap();
//! assert_eq!(controller.move_history().len(), 2);
//! ```

pub mod config;
pub mod controller;
pub mod evaluation;
pub mod phase;
pub mod search;

pub use config::{AiConfig, ConfigError, EvaluatorKind};
pub use controller::{GameController, GameObserver};
pub use evaluation::{
    AdaptiveEvaluator, CombinedEvaluator, Evaluator, MaterialEvaluator, PositionalEvaluator,
    Strategy, StrategyEvaluator, TacticalEvaluator,
};
pub use phase::{game_phase, GameStage, StateClassifier};
pub use search::MoveSearcher;
