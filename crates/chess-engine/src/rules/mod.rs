//! Game outcome reporting and draw detection.

mod draw;

pub use draw::{is_fifty_move_draw, is_insufficient_material, is_threefold_repetition};

use chess_core::Color;
use std::fmt;

/// Where the game stands after the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Play continues and the side to move is not in check.
    Ongoing,
    /// Play continues with the side to move in check.
    Check,
    Checkmate {
        winner: Color,
    },
    /// No legal moves, not in check.
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    /// True for checkmate, stalemate and every draw.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing | GameStatus::Check)
    }

    /// The winning side, if the game ended decisively.
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw(reason) => write!(f, "draw by {}", reason),
        }
    }
}

/// Reason for a draw other than stalemate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// 100 half-moves without a pawn move or capture.
    FiftyMoveRule,
    /// The same position for the third time.
    ThreefoldRepetition,
    /// Neither side can force mate.
    InsufficientMaterial,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::FiftyMoveRule => write!(f, "fifty-move rule"),
            DrawReason::ThreefoldRepetition => write!(f, "threefold repetition"),
            DrawReason::InsufficientMaterial => write!(f, "insufficient material"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses() {
        assert!(!GameStatus::Ongoing.is_terminal());
        assert!(!GameStatus::Check.is_terminal());
        assert!(GameStatus::Stalemate.is_terminal());
        assert!(GameStatus::Draw(DrawReason::FiftyMoveRule).is_terminal());
        let mate = GameStatus::Checkmate {
            winner: Color::Black,
        };
        assert!(mate.is_terminal());
        assert_eq!(mate.winner(), Some(Color::Black));
        assert_eq!(GameStatus::Stalemate.winner(), None);
    }

    #[test]
    fn display() {
        assert_eq!(
            GameStatus::Draw(DrawReason::ThreefoldRepetition).to_string(),
            "draw by threefold repetition"
        );
        assert_eq!(
            GameStatus::Checkmate {
                winner: Color::White
            }
            .to_string(),
            "checkmate, White wins"
        );
    }
}
