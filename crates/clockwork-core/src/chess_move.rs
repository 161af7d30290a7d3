//! Moves as plain `(source, dest, promotion)` values.

use std::fmt;

use crate::piece::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl PromotionPiece {
    /// All promotion pieces in index order.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// The three underpromotions, in index order.
    pub const UNDER: [PromotionPiece; 3] =
        [PromotionPiece::Knight, PromotionPiece::Bishop, PromotionPiece::Rook];

    /// Return the index (0..3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// UCI suffix letter.
    pub const fn uci_char(self) -> char {
        match self {
            PromotionPiece::Knight => 'n',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Queen => 'q',
        }
    }

    /// Parse a UCI suffix letter (lowercase only, as UCI requires).
    pub fn from_uci_char(c: char) -> Option<PromotionPiece> {
        PromotionPiece::ALL.into_iter().find(|p| p.uci_char() == c)
    }
}

/// A move: origin square, destination square, and an optional promotion.
///
/// Castling is written as the king's two-square move (`e1g1`) and en passant
/// as the pawn's diagonal step, as in UCI. A `Move` carries no legality
/// information; [`Board::play`](crate::Board::play) infers the special cases
/// from the position.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    promotion: Option<PromotionPiece>,
}

impl Move {
    /// Create a non-promoting move.
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move { source, dest, promotion: None }
    }

    /// Create a promotion move.
    #[inline]
    pub const fn new_promotion(source: Square, dest: Square, promo: PromotionPiece) -> Move {
        Move { source, dest, promotion: Some(promo) }
    }

    /// Origin square.
    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    /// Destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Promotion piece, if any.
    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        self.promotion
    }

    /// Return the same move with any promotion annotation removed.
    #[inline]
    pub const fn without_promotion(self) -> Move {
        Move::new(self.source, self.dest)
    }

    /// Destination rank minus origin rank.
    #[inline]
    pub const fn rank_delta(self) -> i8 {
        self.dest.rank() as i8 - self.source.rank() as i8
    }

    /// Destination file minus origin file.
    #[inline]
    pub const fn file_delta(self) -> i8 {
        self.dest.file() as i8 - self.source.file() as i8
    }

    /// Parse UCI long algebraic notation (`e2e4`, `e7e8q`).
    ///
    /// Context-free: any two squares parse, whether or not the move is legal.
    pub fn from_uci(s: &str) -> Option<Move> {
        if !s.is_ascii() {
            return None;
        }
        let source = Square::from_algebraic(s.get(0..2)?)?;
        let dest = Square::from_algebraic(s.get(2..4)?)?;
        let mut rest = s[4..].chars();
        match (rest.next(), rest.next()) {
            (None, _) => Some(Move::new(source, dest)),
            (Some(c), None) => Some(Move::new_promotion(source, dest, PromotionPiece::from_uci_char(c)?)),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.uci_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Move, PromotionPiece};
    use crate::piece::PieceKind;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn accessors() {
        let mv = Move::new(sq("e2"), sq("e4"));
        assert_eq!(mv.source(), sq("e2"));
        assert_eq!(mv.dest(), sq("e4"));
        assert_eq!(mv.promotion(), None);
        assert_eq!(mv.rank_delta(), 2);
        assert_eq!(mv.file_delta(), 0);
    }

    #[test]
    fn deltas_are_signed() {
        let mv = Move::new(sq("h8"), sq("a1"));
        assert_eq!(mv.rank_delta(), -7);
        assert_eq!(mv.file_delta(), -7);
    }

    #[test]
    fn uci_roundtrip() {
        for text in ["e2e4", "a7a8q", "h2h1n", "b7c8r", "e1g1", "d7c8b"] {
            let mv = Move::from_uci(text).unwrap();
            assert_eq!(mv.to_string(), text);
        }
    }

    #[test]
    fn uci_promotion_piece() {
        let mv = Move::from_uci("e7e8n").unwrap();
        assert_eq!(mv, Move::new_promotion(sq("e7"), sq("e8"), PromotionPiece::Knight));
        assert_eq!(mv.without_promotion(), Move::new(sq("e7"), sq("e8")));
    }

    #[test]
    fn uci_invalid() {
        for text in ["", "e2", "e2e", "e2e9", "i2e4", "e7e8k", "e7e8Q", "e7e8qq", "é2e4"] {
            assert!(Move::from_uci(text).is_none(), "{text:?} should not parse");
        }
    }

    #[test]
    fn promotion_equality_distinguishes_pieces() {
        let set: HashSet<Move> = PromotionPiece::ALL
            .into_iter()
            .map(|p| Move::new_promotion(sq("a7"), sq("a8"), p))
            .chain(std::iter::once(Move::new(sq("a7"), sq("a8"))))
            .collect();
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn promotion_piece_conversions() {
        assert_eq!(PromotionPiece::Knight.to_piece_kind(), PieceKind::Knight);
        assert_eq!(PromotionPiece::Queen.to_piece_kind(), PieceKind::Queen);
        assert_eq!(PromotionPiece::from_uci_char('r'), Some(PromotionPiece::Rook));
        assert_eq!(PromotionPiece::from_uci_char('k'), None);
        assert_eq!(PromotionPiece::UNDER.len(), 3);
    }
}
