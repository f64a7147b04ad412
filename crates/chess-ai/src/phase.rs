//! Game phase and stage classification.

use chess_core::{Color, File, Piece, PieceKind, Square};
use chess_engine::Board;

/// Phase weight of all non-pawn material at the start of a game.
const TOTAL_PHASE: u32 = 24;

const fn phase_weight(kind: PieceKind) -> u32 {
    match kind {
        PieceKind::Knight | PieceKind::Bishop => 1,
        PieceKind::Rook => 2,
        PieceKind::Queen => 4,
        PieceKind::Pawn | PieceKind::King => 0,
    }
}

/// How far the game has moved towards an endgame, from remaining non-pawn
/// material: 0.0 with everything on the board, 1.0 with none of it left.
pub fn game_phase(board: &Board) -> f32 {
    let remaining: u32 = board
        .pieces()
        .map(|(_, piece)| phase_weight(piece.kind))
        .sum();
    1.0 - remaining.min(TOTAL_PHASE) as f32 / TOTAL_PHASE as f32
}

/// Broad stage of the game, used to pick an evaluation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStage {
    Opening,
    Middlegame,
    Endgame,
}

/// Knights and bishops still on their original squares.
fn undeveloped_minors(board: &Board) -> usize {
    const HOMES: [(File, PieceKind); 4] = [
        (File::B, PieceKind::Knight),
        (File::C, PieceKind::Bishop),
        (File::F, PieceKind::Bishop),
        (File::G, PieceKind::Knight),
    ];
    Color::BOTH
        .into_iter()
        .flat_map(|color| HOMES.into_iter().map(move |home| (color, home)))
        .filter(|&(color, (file, kind))| {
            board.piece_at(Square::new(file, color.back_rank())) == Some(Piece::new(kind, color))
        })
        .count()
}

/// Classifies a board as opening, middlegame or endgame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateClassifier {
    /// Phase below which a position with undeveloped minors is an opening.
    pub opening_phase: f32,
    /// Undeveloped minor pieces (of eight) needed to still be in the opening.
    pub opening_min_undeveloped: usize,
    /// Phase from which a position is an endgame.
    pub endgame_phase: f32,
}

impl Default for StateClassifier {
    fn default() -> Self {
        Self {
            opening_phase: 0.25,
            opening_min_undeveloped: 4,
            endgame_phase: 0.7,
        }
    }
}

impl StateClassifier {
    pub fn classify(&self, board: &Board) -> GameStage {
        let phase = game_phase(board);
        if phase >= self.endgame_phase {
            GameStage::Endgame
        } else if phase < self.opening_phase
            && undeveloped_minors(board) >= self.opening_min_undeveloped
        {
            GameStage::Opening
        } else {
            GameStage::Middlegame
        }
    }
}
