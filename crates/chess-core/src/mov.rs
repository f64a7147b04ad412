//! Move representation.

use crate::{Promotion, Square};
use std::fmt;
use thiserror::Error;

/// Errors from parsing UCI move text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("invalid move length: expected 4 or 5 characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid promotion piece: '{0}'")]
    InvalidPromotion(char),
}

/// The rook leg of a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRook {
    pub from: Square,
    pub to: Square,
}

/// A single ply: the moving piece's source and target plus special-move data.
///
/// A `Move` only describes a move; applying it is the engine's job. The
/// king's squares are `from`/`to` for castling and the rook leg lives in
/// `castle`, so a castling move always carries both rook squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Promotion>,
    pub castle: Option<CastleRook>,
}

impl Move {
    /// Creates a plain move with no special data.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            castle: None,
        }
    }

    /// Creates a pawn move that promotes to `promotion`.
    #[inline]
    pub const fn promoting(from: Square, to: Square, promotion: Promotion) -> Self {
        Move {
            from,
            to,
            promotion: Some(promotion),
            castle: None,
        }
    }

    /// Creates a castling move; `from`/`to` are the king's squares.
    #[inline]
    pub const fn castling(from: Square, to: Square, rook: CastleRook) -> Self {
        Move {
            from,
            to,
            promotion: None,
            castle: Some(rook),
        }
    }

    /// Returns a copy of this move with the promotion choice set.
    #[inline]
    pub const fn with_promotion(self, promotion: Promotion) -> Self {
        Move {
            promotion: Some(promotion),
            ..self
        }
    }

    #[inline]
    pub const fn is_castling(&self) -> bool {
        self.castle.is_some()
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(p) => format!("{}{}{}", self.from, self.to, p.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }

    /// Parses a move from UCI notation.
    ///
    /// Castling metadata cannot be recovered from text alone; the engine
    /// resolves it against its legal move list.
    pub fn from_uci(s: &str) -> Result<Self, MoveParseError> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(MoveParseError::InvalidLength(s.chars().count()));
        }
        let from = Square::from_algebraic(&s[0..2])
            .ok_or_else(|| MoveParseError::InvalidSquare(s[0..2].to_string()))?;
        let to = Square::from_algebraic(&s[2..4])
            .ok_or_else(|| MoveParseError::InvalidSquare(s[2..4].to_string()))?;
        match s[4..].chars().next() {
            Some(c) => {
                let promotion =
                    Promotion::from_char(c).ok_or(MoveParseError::InvalidPromotion(c))?;
                Ok(Move::promoting(from, to, promotion))
            }
            None => Ok(Move::new(from, to)),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castling() {
            write!(f, "Move({}, castle)", self.to_uci())
        } else {
            write!(f, "Move({})", self.to_uci())
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{File, Rank};

    #[test]
    fn move_uci() {
        let e2 = Square::new(File::E, Rank::R2);
        let e4 = Square::new(File::E, Rank::R4);
        assert_eq!(Move::new(e2, e4).to_uci(), "e2e4");

        let e7 = Square::new(File::E, Rank::R7);
        let e8 = Square::new(File::E, Rank::R8);
        assert_eq!(
            Move::promoting(e7, e8, Promotion::Queen).to_uci(),
            "e7e8q"
        );
        assert_eq!(
            Move::promoting(e7, e8, Promotion::Knight).to_uci(),
            "e7e8n"
        );
    }

    #[test]
    fn move_from_uci() {
        let m = Move::from_uci("e2e4").unwrap();
        assert_eq!(m.from.to_algebraic(), "e2");
        assert_eq!(m.to.to_algebraic(), "e4");
        assert_eq!(m.promotion, None);

        let promo = Move::from_uci("e7e8Q").unwrap();
        assert_eq!(promo.promotion, Some(Promotion::Queen));
    }

    #[test]
    fn move_from_uci_errors() {
        assert_eq!(
            Move::from_uci("e2"),
            Err(MoveParseError::InvalidLength(2))
        );
        assert_eq!(
            Move::from_uci("e2e4qq"),
            Err(MoveParseError::InvalidLength(6))
        );
        assert_eq!(
            Move::from_uci("e2e9"),
            Err(MoveParseError::InvalidSquare("e9".to_string()))
        );
        assert_eq!(
            Move::from_uci("e7e8k"),
            Err(MoveParseError::InvalidPromotion('k'))
        );
    }

    #[test]
    fn castling_carries_rook_leg() {
        let m = Move::castling(
            Square::E1,
            Square::G1,
            CastleRook {
                from: Square::H1,
                to: Square::F1,
            },
        );
        assert!(m.is_castling());
        assert_eq!(m.castle.unwrap().from, Square::H1);
        assert_eq!(m.to_uci(), "e1g1");
        assert!(!Move::new(Square::E1, Square::G1).is_castling());
    }

    #[test]
    fn with_promotion_keeps_squares() {
        let m = Move::from_uci("a7a8").unwrap().with_promotion(Promotion::Rook);
        assert_eq!(m.to_uci(), "a7a8r");
    }

    #[test]
    fn debug_display() {
        let m = Move::from_uci("g1f3").unwrap();
        assert_eq!(format!("{:?}", m), "Move(g1f3)");
        assert_eq!(format!("{}", m), "g1f3");
    }
}
