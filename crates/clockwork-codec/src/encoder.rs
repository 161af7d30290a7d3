//! Position -> 19x8x8 input planes for the policy/value network.
//!
//! Plane layout (each plane is 8x8, rank-major, a1 at `[rank 0][file 0]`):
//!
//! ```text
//!   0..=5   White pawn, knight, bishop, rook, queen, king
//!   6..=11  Black pawn, knight, bishop, rook, queen, king
//!   12      side to move (1.0 = White)
//!   13..=16 castling rights: White K, White Q, Black K, Black Q
//!   17      en passant target square (one-hot)
//!   18      halfmove clock / 100
//! ```
//!
//! The order is fixed by the trained network and must not change.

use clockwork_core::{CastleSide, Color, Piece, PieceKind, Square};

use crate::view::PositionView;

/// Number of feature planes.
pub const NUM_PLANES: usize = 19;

/// Cells per plane.
pub const PLANE_CELLS: usize = Square::COUNT;

/// Plane filled with 1.0 when White is to move.
pub const SIDE_TO_MOVE_PLANE: usize = 12;

/// First castling-right plane; the four rights follow in [`CASTLING_ORDER`].
pub const CASTLING_PLANE: usize = 13;

/// One-hot en passant plane.
pub const EN_PASSANT_PLANE: usize = 17;

/// Uniform halfmove-clock plane.
pub const HALFMOVE_PLANE: usize = 18;

/// Divisor applied to the halfmove clock. Values are not clamped, so a clock
/// above 100 yields cells above 1.0.
pub const HALFMOVE_NORMALIZER: f32 = 100.0;

/// Castling rights in plane order, starting at [`CASTLING_PLANE`].
pub const CASTLING_ORDER: [(Color, CastleSide); 4] = [
    (Color::White, CastleSide::KingSide),
    (Color::White, CastleSide::QueenSide),
    (Color::Black, CastleSide::KingSide),
    (Color::Black, CastleSide::QueenSide),
];

/// Dense `[19][64]` f32 input tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Representation {
    planes: [[f32; PLANE_CELLS]; NUM_PLANES],
}

impl Representation {
    /// Tensor shape as `[planes, ranks, files]`.
    pub const SHAPE: [usize; 3] = [NUM_PLANES, 8, 8];

    /// Total number of cells.
    pub const LEN: usize = NUM_PLANES * PLANE_CELLS;

    /// An all-zero tensor.
    pub const fn zeroed() -> Representation {
        Representation { planes: [[0.0; PLANE_CELLS]; NUM_PLANES] }
    }

    /// Value at `(plane, rank, file)`.
    ///
    /// # Panics
    ///
    /// Panics if `plane >= 19`, `rank >= 8` or `file >= 8`.
    #[inline]
    pub fn cell(&self, plane: usize, rank: usize, file: usize) -> f32 {
        assert!(rank < 8 && file < 8, "cell ({rank}, {file}) is off the board");
        self.planes[plane][rank * 8 + file]
    }

    /// One plane, indexed by square (`rank * 8 + file`).
    ///
    /// # Panics
    ///
    /// Panics if `plane >= 19`.
    #[inline]
    pub fn plane(&self, plane: usize) -> &[f32; PLANE_CELLS] {
        &self.planes[plane]
    }

    /// All planes as one flat slice, offset `plane * 64 + rank * 8 + file`.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.planes.as_flattened()
    }

    fn set(&mut self, plane: usize, sq: Square) {
        self.planes[plane][sq.index()] = 1.0;
    }

    fn fill(&mut self, plane: usize, value: f32) {
        self.planes[plane] = [value; PLANE_CELLS];
    }
}

impl Default for Representation {
    fn default() -> Self {
        Representation::zeroed()
    }
}

impl AsRef<[f32]> for Representation {
    fn as_ref(&self) -> &[f32] {
        self.as_slice()
    }
}

/// Encode a position into its input planes.
///
/// Total and pure: pieces are written exactly as placed, with no legality or
/// material checks, and the function touches no shared state.
pub fn encode<P: PositionView + ?Sized>(position: &P) -> Representation {
    let mut rep = Representation::zeroed();

    for color in Color::ALL {
        for kind in PieceKind::ALL {
            let plane = Piece::new(color, kind).index();
            for sq in position.pieces(color, kind) {
                rep.set(plane, sq);
            }
        }
    }

    if position.side_to_move() == Color::White {
        rep.fill(SIDE_TO_MOVE_PLANE, 1.0);
    }

    for (offset, (color, side)) in CASTLING_ORDER.into_iter().enumerate() {
        if position.has_castle_right(color, side) {
            rep.fill(CASTLING_PLANE + offset, 1.0);
        }
    }

    if let Some(sq) = position.en_passant() {
        rep.set(EN_PASSANT_PLANE, sq);
    }

    rep.fill(HALFMOVE_PLANE, f32::from(position.halfmove_clock()) / HALFMOVE_NORMALIZER);

    rep
}
