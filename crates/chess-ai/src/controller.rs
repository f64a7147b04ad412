//! The facade a UI drives: one game, an optional AI opponent and observers
//! notified after every change.

use crate::config::AiConfig;
use crate::search::MoveSearcher;
use chess_core::{Color, FenError, Move, Piece, Square};
use chess_engine::{Board, GameState, GameStatus, MoveError, MoveOutcome};
use tracing::{info, warn};

/// Receives notifications from a [`GameController`].
///
/// Both callbacks run synchronously once the state change is complete.
pub trait GameObserver {
    /// The board changed: a move, an undo or a new game.
    fn board_updated(&mut self, state: &GameState);

    /// The game reached a terminal status. Fires once per transition into
    /// a finished game.
    fn game_over(&mut self, status: GameStatus);
}

pub struct GameController {
    state: GameState,
    config: AiConfig,
    searcher: MoveSearcher,
    observers: Vec<Box<dyn GameObserver>>,
    over_reported: bool,
}

impl GameController {
    pub fn new(config: AiConfig) -> Self {
        let searcher = MoveSearcher::new(config.build_evaluator());
        Self {
            state: GameState::new(),
            config,
            searcher,
            observers: Vec::new(),
            over_reported: false,
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Replaces the game with a fresh one at the starting position.
    pub fn initialize(&mut self) {
        self.reset(GameState::new());
    }

    /// Starts a new game and, if the AI plays white, lets it open.
    pub fn start_new_game(&mut self) {
        self.initialize();
        info!(ai_enabled = self.config.enabled, ai_color = %self.config.color, "new game");
        self.play_ai_move();
    }

    /// Starts a game from a FEN position.
    ///
    /// # Errors
    ///
    /// Returns the [`FenError`] if `fen` is not a valid position; the current
    /// game is kept.
    pub fn start_from_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let state = GameState::from_fen(fen)?;
        self.reset(state);
        info!(%fen, "new game from position");
        self.play_ai_move();
        Ok(())
    }

    fn reset(&mut self, state: GameState) {
        self.state = state;
        self.over_reported = false;
        self.notify();
    }

    /// Plays a move for the side to move, then lets the AI answer.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] rejecting `mv`. The game is unchanged and no
    /// observer is called.
    pub fn make_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let outcome = self.state.make_move(mv)?;
        self.notify();
        self.play_ai_move();
        Ok(outcome)
    }

    /// [`make_move`](Self::make_move) with the move as UCI text.
    pub fn make_move_uci(&mut self, uci: &str) -> Result<MoveOutcome, MoveError> {
        let mv = Move::from_uci(uci)?;
        self.make_move(mv)
    }

    /// Takes back the last move. Returns `false` if there is none.
    pub fn undo_move(&mut self) -> bool {
        if !self.state.undo_move() {
            return false;
        }
        if !self.state.is_game_over() {
            self.over_reported = false;
        }
        self.notify();
        true
    }

    pub fn set_ai_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn set_ai_color(&mut self, color: Color) {
        self.config.color = color;
    }

    pub fn ai_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn ai_color(&self) -> Color {
        self.config.color
    }

    /// The AI's choice for the side to move, whoever that is.
    pub fn best_move(&self) -> Option<Move> {
        self.searcher.find_best_move(&self.state)
    }

    /// Plays the AI's move if the AI is enabled, it is its turn and the game
    /// is still on.
    pub fn play_ai_move(&mut self) -> Option<MoveOutcome> {
        if !self.config.enabled
            || self.state.current_player() != self.config.color
            || self.state.is_game_over()
        {
            return None;
        }
        let mv = self.best_move()?;
        match self.state.make_move(mv) {
            Ok(outcome) => {
                info!(%mv, color = %self.config.color, "ai move");
                self.notify();
                Some(outcome)
            }
            Err(err) => {
                warn!(%mv, %err, "ai move rejected");
                None
            }
        }
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.board_updated(&self.state);
        }
        let status = self.state.status();
        if status.is_terminal() && !self.over_reported {
            self.over_reported = true;
            info!(%status, "game over");
            for observer in &mut self.observers {
                observer.game_over(status);
            }
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn current_player(&self) -> Color {
        self.state.current_player()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn is_check(&self) -> bool {
        self.state.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.state.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.state.is_stalemate()
    }

    pub fn is_draw(&self) -> bool {
        self.state.is_draw()
    }

    pub fn move_history(&self) -> &[Move] {
        self.state.move_history()
    }

    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        self.state.captured_pieces(color)
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.state.en_passant_target()
    }

    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        self.state.legal_moves_from(from)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
