//! Castling rights, legality and execution.

use crate::error::CastlingError;
use crate::validator::is_king_in_check_on;
use crate::{Board, GameState};
use chess_core::{CastleRook, Color, File, Move, Piece, PieceKind, Square};

/// Which rook the king castles with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    const fn king_target_file(self) -> File {
        match self {
            CastleSide::Kingside => File::G,
            CastleSide::Queenside => File::C,
        }
    }

    const fn rook_files(self) -> (File, File) {
        match self {
            CastleSide::Kingside => (File::H, File::F),
            CastleSide::Queenside => (File::A, File::D),
        }
    }
}

/// The castling rights each side still holds.
///
/// A right is lost for good once the king or that rook leaves its home
/// square, or anything lands on the rook's home square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => 0b0001,
            (Color::White, CastleSide::Queenside) => 0b0010,
            (Color::Black, CastleSide::Kingside) => 0b0100,
            (Color::Black, CastleSide::Queenside) => 0b1000,
        }
    }

    /// Parses the FEN castling field (`KQkq` subset or `-`).
    pub fn from_fen(field: &str) -> Self {
        let mut rights = CastlingRights::NONE;
        for c in field.chars() {
            match c {
                'K' => rights.grant(Color::White, CastleSide::Kingside),
                'Q' => rights.grant(Color::White, CastleSide::Queenside),
                'k' => rights.grant(Color::Black, CastleSide::Kingside),
                'q' => rights.grant(Color::Black, CastleSide::Queenside),
                _ => {}
            }
        }
        rights
    }

    pub fn to_fen(self) -> String {
        if self == CastlingRights::NONE {
            return "-".to_string();
        }
        [
            (Color::White, CastleSide::Kingside, 'K'),
            (Color::White, CastleSide::Queenside, 'Q'),
            (Color::Black, CastleSide::Kingside, 'k'),
            (Color::Black, CastleSide::Queenside, 'q'),
        ]
        .into_iter()
        .filter(|&(color, side, _)| self.has(color, side))
        .map(|(_, _, c)| c)
        .collect()
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::flag(color, side) != 0
    }

    #[inline]
    pub fn grant(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::flag(color, side);
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::flag(color, side);
    }

    #[inline]
    pub fn revoke_color(&mut self, color: Color) {
        for side in CastleSide::BOTH {
            self.revoke(color, side);
        }
    }

    /// Drops every right touched by a move between `from` and `to` made by `mover`.
    pub fn update_for_move(&mut self, mover: Piece, from: Square, to: Square) {
        if mover.kind == PieceKind::King {
            self.revoke_color(mover.color);
        }
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                let home = rook_home(color, side);
                if from == home || to == home {
                    self.revoke(color, side);
                }
            }
        }
    }
}

/// The square a castling rook starts on.
pub fn rook_home(color: Color, side: CastleSide) -> Square {
    Square::new(side.rook_files().0, color.back_rank())
}

/// The king's home square.
pub fn king_home(color: Color) -> Square {
    Square::new(File::E, color.back_rank())
}

/// The full castling move for a color and side.
pub fn castle_move(color: Color, side: CastleSide) -> Move {
    let rank = color.back_rank();
    let (rook_from, rook_to) = side.rook_files();
    Move::castling(
        king_home(color),
        Square::new(side.king_target_file(), rank),
        CastleRook {
            from: Square::new(rook_from, rank),
            to: Square::new(rook_to, rank),
        },
    )
}

/// Identifies a castling request: a king on its home square moving two files
/// along the back rank. Accepts moves with or without the rook leg filled in.
pub fn castle_side(board: &Board, mv: &Move) -> Option<(Color, CastleSide)> {
    let king = board.piece_at(mv.from)?;
    if king.kind != PieceKind::King {
        return None;
    }
    CastleSide::BOTH
        .into_iter()
        .find(|&side| {
            let canonical = castle_move(king.color, side);
            canonical.from == mv.from && canonical.to == mv.to
        })
        .map(|side| (king.color, side))
}

/// Checks every castling condition without touching `state`.
///
/// The squares the king crosses and lands on are tested by placing the king
/// on each of them in a copy of the board and re-running check detection.
pub fn is_castling_legal(state: &GameState, mv: &Move) -> Result<(), CastlingError> {
    let board = state.board();
    let (color, side) = castle_side(board, mv).ok_or(CastlingError::NotACastlingMove)?;
    let canonical = castle_move(color, side);
    let Some(rook_leg) = canonical.castle else {
        return Err(CastlingError::NotACastlingMove);
    };
    if mv.castle.is_some_and(|leg| leg != rook_leg) {
        return Err(CastlingError::NotACastlingMove);
    }

    let rook = Piece::new(PieceKind::Rook, color);
    if !state.castling_rights().has(color, side) || board.piece_at(rook_leg.from) != Some(rook) {
        return Err(CastlingError::RightForfeited);
    }

    let (low, high) = if rook_leg.from < mv.from {
        (rook_leg.from, mv.from)
    } else {
        (mv.from, rook_leg.from)
    };
    for idx in low.index() + 1..high.index() {
        if let Some(sq) = Square::from_index(idx) {
            if !board.is_empty_at(sq) {
                return Err(CastlingError::PathBlocked(sq));
            }
        }
    }

    if is_king_in_check_on(board, color) {
        return Err(CastlingError::KingInCheck);
    }

    let step: i8 = if mv.to > mv.from { 1 } else { -1 };
    let mut square = mv.from;
    while square != mv.to {
        let Some(next) = square.offset(step, 0) else {
            break;
        };
        let mut probe = *board;
        let king = probe.set_piece_at(mv.from, None);
        probe.set_piece_at(next, king);
        if is_king_in_check_on(&probe, color) {
            return Err(CastlingError::PassesThroughCheck(next));
        }
        square = next;
    }

    Ok(())
}

/// Castling candidates for `color`, kingside first.
pub fn castling_candidates(color: Color) -> impl Iterator<Item = Move> {
    CastleSide::BOTH
        .into_iter()
        .map(move |side| castle_move(color, side))
}

/// Moves king and rook together. The executor then forfeits both rights
/// through [`CastlingRights::update_for_move`], since the king moved.
pub fn execute_castling(board: &mut Board, mv: &Move) {
    let king = board.set_piece_at(mv.from, None);
    let rook = mv.castle.and_then(|leg| board.set_piece_at(leg.from, None));
    board.set_piece_at(mv.to, king);
    if let Some(leg) = mv.castle {
        board.set_piece_at(leg.to, rook);
    }
}
