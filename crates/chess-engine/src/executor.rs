//! Applies moves to a [`GameState`].
//!
//! The executor trusts its input: legality is settled beforehand by
//! [`crate::validator::validate`] for player moves, and probes only feed it
//! pseudo-legal candidates. The one check it keeps is the promotion choice,
//! because that is where play and simulation differ.

use crate::error::MoveError;
use crate::game::UndoRecord;
use crate::special::castling::{castle_side, execute_castling};
use crate::special::en_passant::{double_push_target, execute_en_passant};
use crate::special::promotion::execute_promotion;
use crate::special::{castle_move, is_en_passant_capture, is_promotion_move};
use crate::{Board, GameState};
use chess_core::{Color, Move, Piece, PieceKind, Promotion, Square};
use tracing::debug;

/// Whether a move is real or a throwaway probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Full bookkeeping: clocks, history, castling rights, repetition
    /// counts, turn and status.
    Play,
    /// Touches only the board and a newly created en passant target.
    /// Unspecified promotions become queens.
    Simulation,
}

/// How a move changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture,
    /// A pawn advancing two squares.
    DoublePush,
    EnPassant,
    Castling,
    Promotion {
        piece: Promotion,
        capture: bool,
    },
}

/// What [`MoveExecutor::execute`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutedMove {
    /// The move as executed, with castling and promotion details filled in.
    pub mv: Move,
    pub mover: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

#[derive(Debug, Clone, Copy)]
pub struct MoveExecutor {
    mode: ExecutionMode,
}

impl MoveExecutor {
    pub const fn new(mode: ExecutionMode) -> Self {
        Self { mode }
    }

    pub const fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Runs `mv` against `state`.
    ///
    /// Fails without touching the state when the source square is empty or,
    /// in play, when a promotion move has no promotion piece.
    pub fn execute(&self, state: &mut GameState, mv: Move) -> Result<ExecutedMove, MoveError> {
        let mover = state
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::NoPieceAtSource(mv.from))?;

        let promotion = if is_promotion_move(&state.board, &mv) {
            match (mv.promotion, self.mode) {
                (Some(p), _) => Some(p),
                (None, ExecutionMode::Simulation) => Some(Promotion::Queen),
                (None, ExecutionMode::Play) => return Err(MoveError::PromotionRequired(mv)),
            }
        } else {
            None
        };

        let mv = match castle_side(&state.board, &mv) {
            Some((color, side)) if mv.castle.is_none() => castle_move(color, side),
            _ => mv,
        };
        let mv = match promotion {
            Some(p) => mv.with_promotion(p),
            None => mv,
        };

        // Read before anything moves: the capture that consumes the target
        // must still see it.
        let previous_en_passant = state.en_passant;
        let previous_board = state.board;

        let (captured, kind) = if mv.is_castling() {
            execute_castling(&mut state.board, &mv);
            (None, MoveKind::Castling)
        } else if is_en_passant_capture(&state.board, &mv, previous_en_passant) {
            (execute_en_passant(&mut state.board, &mv), MoveKind::EnPassant)
        } else if let Some(piece) = promotion {
            let captured = execute_promotion(&mut state.board, &mv, piece);
            let kind = MoveKind::Promotion {
                piece,
                capture: captured.is_some(),
            };
            (captured, kind)
        } else {
            let captured = state.board.move_piece(&mv);
            let kind = if captured.is_some() {
                MoveKind::Capture
            } else if double_push_target(mover, &mv).is_some() {
                MoveKind::DoublePush
            } else {
                MoveKind::Quiet
            };
            (captured, kind)
        };

        let new_en_passant = double_push_target(mover, &mv);
        let executed = ExecutedMove {
            mv,
            mover,
            captured,
            kind,
        };

        match self.mode {
            ExecutionMode::Simulation => {
                if new_en_passant.is_some() {
                    state.en_passant = new_en_passant;
                }
            }
            ExecutionMode::Play => {
                state.en_passant = new_en_passant;
                record_move(state, &executed, previous_board, previous_en_passant);
            }
        }
        Ok(executed)
    }
}

/// Bookkeeping after a real move: clocks, rights, history, turn, repetition
/// count and status. Pushes the undo record that reverses all of it.
fn record_move(
    state: &mut GameState,
    executed: &ExecutedMove,
    previous_board: Board,
    previous_en_passant: Option<Square>,
) {
    let castling = state.castling;
    let halfmove_clock = state.halfmove_clock;
    let fullmove_number = state.fullmove_number;
    let (check, checkmate, stalemate) = (state.check, state.checkmate, state.stalemate);

    state
        .castling
        .update_for_move(executed.mover, executed.mv.from, executed.mv.to);

    if executed.mover.kind == PieceKind::Pawn || executed.captured.is_some() {
        state.halfmove_clock = 0;
    } else {
        state.halfmove_clock = state.halfmove_clock.saturating_add(1);
    }
    if executed.mover.color == Color::Black {
        state.fullmove_number = state.fullmove_number.saturating_add(1);
    }

    if let Some(victim) = executed.captured {
        state.captured[victim.color.index()].push(victim);
    }
    state.move_history.push(executed.mv);
    state.current_player = state.current_player.opposite();

    let signature = state.record_position();
    state.undo_stack.push(UndoRecord {
        mv: executed.mv,
        board: previous_board,
        castling,
        en_passant: previous_en_passant,
        halfmove_clock,
        fullmove_number,
        check,
        checkmate,
        stalemate,
        captured: executed.captured,
        signature,
    });
    state.refresh_status();

    debug!(
        mv = %executed.mv,
        kind = ?executed.kind,
        halfmove_clock = state.halfmove_clock,
        "move executed"
    );
}
