//! Static position evaluation.
//!
//! Every evaluator scores a board as white minus black in centipawns.
//! [`Evaluator::evaluate`] turns that into "higher is better for `side`",
//! which is the only form move selection uses.

mod material;
mod positional;
mod pst;
mod tactical;

pub use material::{MaterialEvaluator, BISHOP_PAIR_BONUS};
pub use positional::PositionalEvaluator;
pub use tactical::TacticalEvaluator;

use crate::phase::{GameStage, StateClassifier};
use chess_core::Color;
use chess_engine::Board;
use tracing::trace;

/// A static evaluation function.
pub trait Evaluator {
    /// Score from white's point of view.
    fn evaluate_white(&self, board: &Board) -> i32;

    /// Score from `side`'s point of view: higher is better for `side`.
    fn evaluate(&self, board: &Board, side: Color) -> i32 {
        side.sign() * self.evaluate_white(board)
    }
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn evaluate_white(&self, board: &Board) -> i32 {
        (**self).evaluate_white(board)
    }
}

/// Which family of terms to add on top of material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Material plus tactical motifs.
    Tactical,
    /// Material plus piece placement and structure.
    Positional,
}

impl Strategy {
    /// The strategy used for each stage of the game.
    pub const fn for_stage(stage: GameStage) -> Strategy {
        match stage {
            GameStage::Opening => Strategy::Positional,
            GameStage::Middlegame => Strategy::Tactical,
            GameStage::Endgame => Strategy::Positional,
        }
    }
}

/// Material combined with either tactical or positional terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombinedEvaluator {
    pub material: MaterialEvaluator,
    pub tactical: TacticalEvaluator,
    pub positional: PositionalEvaluator,
}

impl CombinedEvaluator {
    pub fn with_material(material: MaterialEvaluator) -> Self {
        Self {
            material,
            ..Self::default()
        }
    }

    pub fn evaluate_with(&self, strategy: Strategy, board: &Board) -> i32 {
        let material = self.material.evaluate_white(board);
        match strategy {
            Strategy::Tactical => material + self.tactical.evaluate_white(board),
            Strategy::Positional => material + self.positional.evaluate_white(board),
        }
    }
}

/// Fixed-strategy evaluator.
#[derive(Debug, Clone, Copy)]
pub struct StrategyEvaluator {
    strategy: Strategy,
    inner: CombinedEvaluator,
}

impl StrategyEvaluator {
    pub fn new(strategy: Strategy, inner: CombinedEvaluator) -> Self {
        Self { strategy, inner }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Evaluator for StrategyEvaluator {
    fn evaluate_white(&self, board: &Board) -> i32 {
        self.inner.evaluate_with(self.strategy, board)
    }
}

/// Picks its strategy from the game stage of each board it scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveEvaluator {
    classifier: StateClassifier,
    inner: CombinedEvaluator,
}

impl AdaptiveEvaluator {
    pub fn new(inner: CombinedEvaluator) -> Self {
        Self {
            classifier: StateClassifier::default(),
            inner,
        }
    }
}

impl Evaluator for AdaptiveEvaluator {
    fn evaluate_white(&self, board: &Board) -> i32 {
        let stage = self.classifier.classify(board);
        let strategy = Strategy::for_stage(stage);
        let score = self.inner.evaluate_with(strategy, board);
        trace!(?stage, ?strategy, score, "adaptive evaluation");
        score
    }
}
