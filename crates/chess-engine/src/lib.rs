//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 64 squares as a copyable value
//! - [`GameState`] - a game in progress with history, clocks, repetition
//!   counts, check/mate/stalemate flags and exact undo
//! - Pseudo-legal move generation ([`movegen`]) and legality by trial
//!   execution ([`validator`])
//! - Castling, en passant and promotion handlers ([`special`])
//! - Draw detection and game status ([`rules`])
//!
//! # Architecture
//!
//! A move request flows through [`GameState::make_move`], which validates it
//! against the legal move list and hands it to the [`MoveExecutor`]. The
//! legal move list itself is built by executing each pseudo-legal move on a
//! clone in [`ExecutionMode::Simulation`] and keeping those that leave the
//! mover's king safe.
//!
//! # Example
//!
//! ```
//! use chess_engine::GameState;
//!
//! let mut game = GameState::new();
//! assert_eq!(game.legal_moves().len(), 20);
//! game.make_move_uci("e2e4").unwrap();
//! game.make_move_uci("e7e5").unwrap();
//! assert_eq!(
//!     game.to_fen(),
//!     "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
//! );
//! assert!(game.undo_move());
//! ```

mod board;
mod error;
mod executor;
mod game;
pub mod movegen;
pub mod rules;
mod signature;
pub mod special;
pub mod validator;

pub use board::Board;
pub use error::{CastlingError, MoveError};
pub use executor::{ExecutedMove, ExecutionMode, MoveExecutor, MoveKind};
pub use game::{GameState, MoveOutcome};
pub use movegen::perft::{perft, perft_divide};
pub use rules::{DrawReason, GameStatus};
pub use signature::PositionSignature;
pub use special::{CastleSide, CastlingRights};
