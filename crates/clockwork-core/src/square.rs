//! Board squares using Little-Endian Rank-File (LERF) numbering.

use std::fmt;

/// A square on the board, stored as its LERF index.
///
/// Index = rank * 8 + file, so a1 = 0, b1 = 1, ..., h8 = 63. Ranks and files
/// are zero-based: rank 0 is White's back rank, file 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a zero-based rank and file, or `None` if either is off the board.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Square> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from an index known to be below 64.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse algebraic notation (e.g. "e4").
    pub fn from_algebraic(s: &str) -> Option<Square> {
        match s.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Square::new(rank - b'1', file - b'a'),
            _ => None,
        }
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the zero-based rank (0 = rank 1).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Return the zero-based file (0 = a-file).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Step by a rank/file delta, returning `None` when the target leaves the board.
    ///
    /// Files never wrap: stepping east from the h-file is off the board.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        let rank = self.rank() as i8 + d_rank;
        let file = self.file() as i8 + d_file;
        if rank < 0 || rank > 7 || file < 0 || file > 7 {
            None
        } else {
            Some(Square((rank * 8 + file) as u8))
        }
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn new_and_accessors() {
        let e4 = Square::new(3, 4).unwrap();
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.index(), 28);
        assert_eq!(e4, sq("e4"));
    }

    #[test]
    fn new_rejects_off_board() {
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn rank_file_roundtrip() {
        for s in Square::all() {
            assert_eq!(Square::new(s.rank(), s.file()), Some(s));
        }
    }

    #[test]
    fn from_index_bounds() {
        assert!(Square::from_index(63).is_some());
        assert!(Square::from_index(64).is_none());
        assert!(Square::from_index(255).is_none());
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(sq("a1").index(), 0);
        assert_eq!(sq("h1").index(), 7);
        assert_eq!(sq("a8").index(), 56);
        assert_eq!(sq("h8").index(), 63);
        assert_eq!(format!("{}", sq("e4")), "e4");
        assert_eq!(format!("{:?}", sq("e4")), "Square(e4)");
    }

    #[test]
    fn algebraic_invalid() {
        for s in ["i1", "a9", "a0", "", "a", "a1b", "E4"] {
            assert!(Square::from_algebraic(s).is_none(), "{s:?} should not parse");
        }
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(sq("e4").offset(1, 1), Some(sq("f5")));
        assert_eq!(sq("e4").offset(-2, -1), Some(sq("d2")));
        assert_eq!(sq("a1").offset(7, 7), Some(sq("h8")));
    }

    #[test]
    fn offset_does_not_wrap_files() {
        assert_eq!(sq("h4").offset(0, 1), None);
        assert_eq!(sq("a4").offset(0, -1), None);
        assert_eq!(sq("b8").offset(1, 0), None);
        assert_eq!(sq("b1").offset(-1, 0), None);
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Square::all().count(), Square::COUNT);
    }
}
