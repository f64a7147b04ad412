//! Full game state with history, clocks and undo.
//!
//! [`GameState`] is the single owner of a game in progress. Player moves go
//! through [`GameState::make_move`], which validates before touching
//! anything; legality probes go through [`GameState::simulate`] on a
//! [`GameState::position_copy`].

use crate::error::MoveError;
use crate::executor::{ExecutionMode, MoveExecutor, MoveKind};
use crate::rules::{self, DrawReason, GameStatus};
use crate::signature::PositionSignature;
use crate::special::CastlingRights;
use crate::{validator, Board};
use chess_core::{Color, Fen, FenError, Move, Piece, Square};
use std::collections::HashMap;
use tracing::debug;

/// The result of a successful [`GameState::make_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The move as played, including castling and promotion details.
    pub mv: Move,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    /// Status of the game after the move.
    pub status: GameStatus,
}

/// Everything needed to take back one move exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UndoRecord {
    pub(crate) mv: Move,
    pub(crate) board: Board,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
    pub(crate) captured: Option<Piece>,
    /// The position counted after the move.
    pub(crate) signature: PositionSignature,
}

/// A chess game: the position plus everything the rules need to remember.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Color,
    pub(crate) move_history: Vec<Move>,
    /// Captured pieces, indexed by the captured piece's color.
    pub(crate) captured: [Vec<Piece>; 2],
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) castling: CastlingRights,
    pub(crate) position_count: HashMap<PositionSignature, u32>,
    pub(crate) check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
    pub(crate) undo_stack: Vec<UndoRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A new game from the standard starting position.
    pub fn new() -> Self {
        Self::from_parts(
            Board::starting(),
            Color::White,
            CastlingRights::ALL,
            None,
            0,
            1,
        )
    }

    /// Loads a position from FEN. The starting position is counted once for
    /// repetition purposes, and no earlier history exists.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fen = Fen::parse(fen)?;
        Ok(Self::from_parts(
            Board::from_squares(fen.squares),
            fen.side_to_move,
            CastlingRights::from_fen(&fen.castling),
            fen.en_passant,
            fen.halfmove_clock,
            fen.fullmove_number,
        ))
    }

    fn from_parts(
        board: Board,
        current_player: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        let mut state = GameState {
            board,
            current_player,
            move_history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            en_passant,
            halfmove_clock,
            fullmove_number,
            castling,
            position_count: HashMap::new(),
            check: false,
            checkmate: false,
            stalemate: false,
            undo_stack: Vec::new(),
        };
        state.record_position();
        state.refresh_status();
        state
    }

    /// A copy of the position alone: board, turn, castling rights, en passant
    /// target, clocks and status flags. History, captured pieces, repetition
    /// counts and undo records start empty.
    ///
    /// Enough for [`simulate`](Self::simulate), which reads none of the
    /// omitted fields, and independent of how long the game has run.
    pub fn position_copy(&self) -> Self {
        GameState {
            board: self.board,
            current_player: self.current_player,
            move_history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            castling: self.castling,
            position_count: HashMap::new(),
            check: self.check,
            checkmate: self.checkmate,
            stalemate: self.stalemate,
            undo_stack: Vec::new(),
        }
    }

    /// The position as a FEN string.
    pub fn to_fen(&self) -> String {
        Fen {
            squares: *self.board.squares(),
            side_to_move: self.current_player,
            castling: self.castling.to_fen(),
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
        .to_fen()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Moves played so far, oldest first.
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// Pieces of `color` that have been captured, in capture order.
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Half-moves since the last pawn move or capture.
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// The repetition key of the current position.
    pub fn signature(&self) -> PositionSignature {
        PositionSignature {
            board: self.board,
            side_to_move: self.current_player,
            castling: self.castling,
            en_passant: self.en_passant,
        }
    }

    /// How many times the current position has occurred.
    pub fn repetition_count(&self) -> u32 {
        self.position_count
            .get(&self.signature())
            .copied()
            .unwrap_or(0)
    }

    pub fn is_check(&self) -> bool {
        self.check
    }

    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        rules::is_fifty_move_draw(self)
    }

    pub fn is_threefold_repetition(&self) -> bool {
        rules::is_threefold_repetition(self)
    }

    pub fn is_insufficient_material(&self) -> bool {
        rules::is_insufficient_material(&self.board)
    }

    /// Stalemate or any other drawing condition.
    pub fn is_draw(&self) -> bool {
        self.stalemate
            || self.is_fifty_move_draw()
            || self.is_threefold_repetition()
            || self.is_insufficient_material()
    }

    /// True once no further moves are accepted.
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.is_draw()
    }

    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate {
                winner: self.current_player.opposite(),
            }
        } else if self.stalemate {
            GameStatus::Stalemate
        } else if self.is_fifty_move_draw() {
            GameStatus::Draw(DrawReason::FiftyMoveRule)
        } else if self.is_threefold_repetition() {
            GameStatus::Draw(DrawReason::ThreefoldRepetition)
        } else if self.is_insufficient_material() {
            GameStatus::Draw(DrawReason::InsufficientMaterial)
        } else if self.check {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    /// Legal moves for the side to move. See [`validator::legal_moves`].
    pub fn legal_moves(&self) -> Vec<Move> {
        validator::legal_moves(self)
    }

    /// Legal moves of the piece on `from`.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        validator::legal_moves_from(self, from)
    }

    /// Validates and plays a move. On error the state is unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let mv = validator::validate(self, &mv)?;
        self.apply(mv)
    }

    /// Plays a move given in UCI notation (`e2e4`, `e7e8q`, `e1g1`).
    pub fn make_move_uci(&mut self, uci: &str) -> Result<MoveOutcome, MoveError> {
        let mv = Move::from_uci(uci)?;
        self.make_move(mv)
    }

    /// Plays an already validated move.
    pub(crate) fn apply(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let executed = MoveExecutor::new(ExecutionMode::Play).execute(self, mv)?;
        Ok(MoveOutcome {
            mv: executed.mv,
            captured: executed.captured,
            kind: executed.kind,
            status: self.status(),
        })
    }

    /// Executes `mv` as a probe: only the board and a new en passant target
    /// change. Meant for disposable clones.
    pub fn simulate(&mut self, mv: Move) -> Result<(), MoveError> {
        MoveExecutor::new(ExecutionMode::Simulation)
            .execute(self, mv)
            .map(|_| ())
    }

    /// Takes back the last move, restoring the exact previous state.
    /// Returns `false` if there is nothing to undo.
    pub fn undo_move(&mut self) -> bool {
        let Some(record) = self.undo_stack.pop() else {
            return false;
        };

        if let Some(count) = self.position_count.get_mut(&record.signature) {
            *count -= 1;
            if *count == 0 {
                self.position_count.remove(&record.signature);
            }
        }
        if let Some(victim) = record.captured {
            self.captured[victim.color.index()].pop();
        }
        self.move_history.pop();

        self.board = record.board;
        self.castling = record.castling;
        self.en_passant = record.en_passant;
        self.halfmove_clock = record.halfmove_clock;
        self.fullmove_number = record.fullmove_number;
        self.check = record.check;
        self.checkmate = record.checkmate;
        self.stalemate = record.stalemate;
        self.current_player = self.current_player.opposite();

        debug!(mv = %record.mv, "move undone");
        true
    }

    /// Number of moves that can be taken back.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Counts the current position and returns its signature.
    pub(crate) fn record_position(&mut self) -> PositionSignature {
        let signature = self.signature();
        *self.position_count.entry(signature).or_insert(0) += 1;
        signature
    }

    /// Recomputes check, checkmate and stalemate for the side to move.
    pub(crate) fn refresh_status(&mut self) {
        let color = self.current_player;
        debug_assert!(
            self.board.king_square(color).is_some(),
            "{color} has no king"
        );
        self.check = validator::is_king_in_check(self, color);
        let can_move = validator::has_legal_moves(self, color);
        self.checkmate = self.check && !can_move;
        self.stalemate = !self.check && !can_move;
    }
}
