//! FEN (Forsyth-Edwards Notation) parsing and serialization.

use crate::{Color, Piece, PieceKind, Square};
use thiserror::Error;

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 4 or 6 fields, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),

    #[error("{0} must have exactly one king, found {1}")]
    KingCount(Color, usize),
}

/// A parsed FEN record with typed fields.
///
/// Castling availability stays textual (a validated subset of `KQkq`) since
/// the engine owns the castling-rights representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Piece on each square, indexed a1 = 0 .. h8 = 63.
    pub squares: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: String,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Fen {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string. The two clock fields may be omitted and default to `0 1`.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 && parts.len() != 4 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let squares = parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = parts[2];
        if castling != "-" {
            if let Some(c) = castling.chars().find(|c| !"KQkq".contains(*c)) {
                return Err(FenError::InvalidCastlingRights(format!(
                    "invalid character '{}'",
                    c
                )));
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            ep => {
                let sq = Square::from_algebraic(ep)
                    .ok_or_else(|| FenError::InvalidEnPassantSquare(ep.to_string()))?;
                if !matches!(sq.rank().to_char(), '3' | '6') {
                    return Err(FenError::InvalidEnPassantSquare(ep.to_string()));
                }
                Some(sq)
            }
        };

        let (halfmove_clock, fullmove_number) = if parts.len() == 6 {
            let half = parts[4]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;
            let full = parts[5]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;
            (half, full)
        } else {
            (0, 1)
        };

        Ok(Fen {
            squares,
            side_to_move,
            castling: castling.to_string(),
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Serializes back to a six-field FEN string.
    pub fn to_fen(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            format_placement(&self.squares),
            match self.side_to_move {
                Color::White => 'w',
                Color::Black => 'b',
            },
            self.castling,
            self.en_passant
                .map_or_else(|| "-".to_string(), Square::to_algebraic),
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

/// Parses the piece-placement field and checks each side has one king.
pub fn parse_placement(placement: &str) -> Result<[Option<Piece>; 64], FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidPiecePlacement(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    let mut squares = [None; 64];
    for (i, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - i;
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                file += digit as usize;
            } else if let Some(piece) = Piece::from_fen_char(c) {
                if file < 8 {
                    squares[rank * 8 + file] = Some(piece);
                }
                file += 1;
            } else {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "invalid character '{}' in rank {}",
                    c,
                    rank + 1
                )));
            }
        }
        if file != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "rank {} has {} squares, expected 8",
                rank + 1,
                file
            )));
        }
    }

    for color in Color::BOTH {
        let kings = squares
            .iter()
            .flatten()
            .filter(|p| p.kind == PieceKind::King && p.color == color)
            .count();
        if kings != 1 {
            return Err(FenError::KingCount(color, kings));
        }
    }

    Ok(squares)
}

/// Formats squares as a FEN piece-placement field (rank 8 first).
pub fn format_placement(squares: &[Option<Piece>; 64]) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            match squares[rank * 8 + file] {
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if rank > 0 {
            out.push('/');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINGS_ONLY: &str = "4k3/8/8/8/8/8/8/4K3";

    #[test]
    fn parse_startpos() {
        let fen = Fen::parse(Fen::STARTPOS).unwrap();
        assert_eq!(fen.side_to_move, Color::White);
        assert_eq!(fen.castling, "KQkq");
        assert_eq!(fen.en_passant, None);
        assert_eq!(fen.halfmove_clock, 0);
        assert_eq!(fen.fullmove_number, 1);
        assert_eq!(
            fen.squares[Square::E1.index() as usize],
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            fen.squares[Square::D8.index() as usize],
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn roundtrip() {
        let original = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        assert_eq!(Fen::parse(original).unwrap().to_fen(), original);

        let custom = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
        assert_eq!(Fen::parse(custom).unwrap().to_fen(), custom);
    }

    #[test]
    fn four_field_fen_defaults_clocks() {
        let fen = Fen::parse(&format!("{} b - -", KINGS_ONLY)).unwrap();
        assert_eq!(fen.halfmove_clock, 0);
        assert_eq!(fen.fullmove_number, 1);
        assert_eq!(fen.side_to_move, Color::Black);
    }

    #[test]
    fn invalid_fen() {
        assert!(matches!(
            Fen::parse("invalid"),
            Err(FenError::InvalidPartCount(1))
        ));
        assert!(matches!(
            Fen::parse(&format!("{} x KQkq - 0 1", KINGS_ONLY)),
            Err(FenError::InvalidActiveColor(_))
        ));
    }

    #[test]
    fn invalid_piece_placement() {
        assert!(matches!(
            Fen::parse("8/8/8/8/8/8/8 w - - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Fen::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            Fen::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn king_count_is_validated() {
        assert_eq!(
            Fen::parse("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(FenError::KingCount(Color::Black, 0))
        );
        assert_eq!(
            Fen::parse("4k3/8/8/8/8/8/8/3KK3 w - - 0 1"),
            Err(FenError::KingCount(Color::White, 2))
        );
    }

    #[test]
    fn invalid_castling_and_en_passant() {
        assert!(matches!(
            Fen::parse(&format!("{} w XYZ - 0 1", KINGS_ONLY)),
            Err(FenError::InvalidCastlingRights(_))
        ));
        assert!(matches!(
            Fen::parse(&format!("{} w - abc 0 1", KINGS_ONLY)),
            Err(FenError::InvalidEnPassantSquare(_))
        ));
        assert!(matches!(
            Fen::parse(&format!("{} w - e4 0 1", KINGS_ONLY)),
            Err(FenError::InvalidEnPassantSquare(_))
        ));
    }

    #[test]
    fn invalid_clocks() {
        assert!(matches!(
            Fen::parse(&format!("{} w - - abc 1", KINGS_ONLY)),
            Err(FenError::InvalidHalfmoveClock(_))
        ));
        assert!(matches!(
            Fen::parse(&format!("{} w - - 0 xyz", KINGS_ONLY)),
            Err(FenError::InvalidFullmoveNumber(_))
        ));
    }

    #[test]
    fn error_messages_name_the_input() {
        assert!(FenError::InvalidPartCount(3).to_string().contains('3'));
        assert!(FenError::InvalidEnPassantSquare("z9".into())
            .to_string()
            .contains("z9"));
        assert!(FenError::KingCount(Color::White, 0)
            .to_string()
            .contains("White"));
    }
}
