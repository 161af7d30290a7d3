//! Castling rights as a 4-bit set.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which wing to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Castling rights: bit 0 = White king-side, 1 = White queen-side,
/// 2 = Black king-side, 3 = Black queen-side.
///
/// These are rights, not castling legality: a right survives while pieces
/// stand between king and rook.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All four castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Single-right flag for a color and wing.
    #[inline]
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        let shift = color.index() * 2
            + match side {
                CastleSide::KingSide => 0,
                CastleSide::QueenSide => 1,
            };
        CastleRights(1 << shift)
    }

    /// Return `true` if no rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check one color/wing right.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::flag(color, side).0 != 0
    }

    /// Return the rights with `other` added.
    #[inline]
    pub const fn with(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    /// Return the rights with `other` removed.
    #[inline]
    pub const fn without(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Rights lost when a move starts or ends on `sq` (king and rook home squares).
    pub const fn revoked_by(sq: Square) -> CastleRights {
        match sq.index() {
            0 => Self::flag(Color::White, CastleSide::QueenSide),
            7 => Self::flag(Color::White, CastleSide::KingSide),
            4 => CastleRights(0b0011),
            56 => Self::flag(Color::Black, CastleSide::QueenSide),
            63 => Self::flag(Color::Black, CastleSide::KingSide),
            60 => CastleRights(0b1100),
            _ => Self::NONE,
        }
    }

    /// Parse the FEN castling field ("KQkq", "Kq", "-", ...).
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            let flag = match c {
                'K' => Self::flag(Color::White, CastleSide::KingSide),
                'Q' => Self::flag(Color::White, CastleSide::QueenSide),
                'k' => Self::flag(Color::Black, CastleSide::KingSide),
                'q' => Self::flag(Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            Ok(rights.with(flag))
        })
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (bit, c) in ['K', 'Q', 'k', 'q'].into_iter().enumerate() {
            if self.0 & (1 << bit) != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}
