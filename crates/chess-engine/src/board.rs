//! 8x8 piece storage.

use chess_core::{format_placement, parse_placement, Color, FenError, Move, Piece, PieceKind, Square};
use std::fmt;

/// The pieces on the 64 squares.
///
/// A `Board` is a plain value: copying it yields a fully independent board,
/// which is how legality probes get a disposable position to mutate.
/// It performs no rule checks of its own.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// The standard starting arrangement.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            for color in Color::BOTH {
                let back = color.back_rank().index() as usize;
                let pawns = color.pawn_start_rank().index() as usize;
                board.squares[back * 8 + file] = Some(Piece::new(kind, color));
                board.squares[pawns * 8 + file] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Wraps an array indexed a1 = 0 .. h8 = 63.
    pub const fn from_squares(squares: [Option<Piece>; 64]) -> Self {
        Board { squares }
    }

    pub const fn squares(&self) -> &[Option<Piece>; 64] {
        &self.squares
    }

    /// Builds a board from a FEN piece-placement field.
    pub fn from_placement(placement: &str) -> Result<Self, FenError> {
        Ok(Board {
            squares: parse_placement(placement)?,
        })
    }

    /// The FEN piece-placement field for this board.
    pub fn to_placement(&self) -> String {
        format_placement(&self.squares)
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Writes a square directly and returns what was there.
    ///
    /// No legality is checked; callers must already have validated the change.
    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[sq.index() as usize], piece)
    }

    /// Relocates the piece on `mv.from` to `mv.to`, returning whatever stood on
    /// the target. Promotion and the rook leg of castling are not handled here.
    pub fn move_piece(&mut self, mv: &Move) -> Option<Piece> {
        let piece = self.set_piece_at(mv.from, None);
        self.set_piece_at(mv.to, piece)
    }

    /// All pieces with their squares, rank-major (a1..h1, a2..h2, ...).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Pieces of one color, rank-major.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// Squares holding the given kind and color.
    pub fn squares_of(&self, kind: PieceKind, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, p)| p.kind == kind && p.color == color)
            .map(|(sq, _)| sq)
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.squares_of(kind, color).count()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.squares_of(PieceKind::King, color).next()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

/// Text diagram, rank 8 at the top.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8i8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8i8 {
                let c = Square::from_coords(file, rank)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::to_fen_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn starting_matches_fen() {
        assert_eq!(
            Board::starting().to_placement(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
        assert_eq!(Board::starting().pieces().count(), 32);
    }

    #[test]
    fn piece_at() {
        let board = Board::starting();
        assert_eq!(
            board.piece_at(Square::E1),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(Square::E8),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(board.piece_at(sq("e4")), None);
    }

    #[test]
    fn move_piece_returns_capture() {
        let mut board = Board::from_placement("4k3/8/8/3p4/4P3/8/8/4K3").unwrap();
        let captured = board.move_piece(&Move::new(sq("e4"), sq("d5")));
        assert_eq!(captured, Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(board.is_empty_at(sq("e4")));
        assert_eq!(
            board.piece_at(sq("d5")),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn copies_are_independent() {
        let original = Board::starting();
        let mut copy = original;
        copy.set_piece_at(Square::D1, None);
        assert!(original.piece_at(Square::D1).is_some());
        assert!(copy.piece_at(Square::D1).is_none());
    }

    #[test]
    fn pieces_iterate_rank_major() {
        let board = Board::starting();
        let first: Vec<Square> = board.pieces().map(|(s, _)| s).take(9).collect();
        assert_eq!(first[0], Square::A1);
        assert_eq!(first[7], Square::H1);
        assert_eq!(first[8], sq("a2"));
    }

    #[test]
    fn king_square_and_counts() {
        let board = Board::starting();
        assert_eq!(board.king_square(Color::White), Some(Square::E1));
        assert_eq!(board.king_square(Color::Black), Some(Square::E8));
        assert_eq!(board.count(PieceKind::Pawn, Color::Black), 8);
        assert_eq!(board.count(PieceKind::Bishop, Color::White), 2);
        assert_eq!(Board::empty().king_square(Color::White), None);
    }

    #[test]
    fn display_diagram() {
        let text = Board::starting().to_string();
        assert!(text.starts_with("8  r n b q k b n r"));
        assert!(text.ends_with("a b c d e f g h"));
    }
}
