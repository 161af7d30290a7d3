//! Square sets packed into a `u64`, one bit per LERF square.

use std::fmt;
use std::ops::BitOr;

use crate::square::Square;

/// A 64-bit set of squares (bit `i` = square index `i`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// No squares set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Return `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count the set bits.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Return `true` if `sq` is in the set.
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.index()) != 0
    }

    /// Return the set with `sq` added.
    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | (1u64 << sq.index()))
    }

    /// Return the set with `sq` removed.
    #[inline]
    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !(1u64 << sq.index()))
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

/// Yields member squares in ascending index order, consuming the set.
impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let sq = Square::from_index_unchecked(self.0.trailing_zeros() as u8);
        self.0 &= self.0 - 1;
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bitboard {}

// 8x8 grid, rank 8 on top.
impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for rank in (0..8u8).rev() {
            write!(f, "  {} ", rank + 1)?;
            for file in 0..8u8 {
                let bit = (self.0 >> (rank * 8 + file)) & 1;
                write!(f, "{} ", if bit == 1 { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        write!(f, "    a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Bitboard;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn with_contains_without() {
        let bb = Bitboard::EMPTY.with(sq("e4"));
        assert!(bb.contains(sq("e4")));
        assert!(!bb.contains(sq("d4")));
        assert_eq!(bb.count(), 1);
        assert!(bb.without(sq("e4")).is_empty());
    }

    #[test]
    fn iterates_in_index_order() {
        let bb = Bitboard::EMPTY.with(sq("h8")).with(sq("a1")).with(sq("e4"));
        assert_eq!(bb.len(), 3);
        let squares: Vec<Square> = bb.collect();
        assert_eq!(squares, vec![sq("a1"), sq("e4"), sq("h8")]);
    }

    #[test]
    fn union() {
        let a = Bitboard::EMPTY.with(sq("a1")).with(sq("b1"));
        let b = Bitboard::EMPTY.with(sq("b1")).with(sq("c1"));
        let both = a | b;
        assert_eq!(both.count(), 3);
        assert!(both.contains(sq("a1")) && both.contains(sq("c1")));
    }

    #[test]
    fn debug_grid_marks_square() {
        let text = format!("{:?}", Bitboard::EMPTY.with(sq("a1")));
        let last_rank = text.lines().nth(8).unwrap();
        assert!(last_rank.starts_with("  1 1 ."), "unexpected grid row: {last_rank:?}");
    }
}
