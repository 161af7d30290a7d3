//! Read-only position access for the encoder.

use clockwork_core::{Bitboard, Board, CastleSide, Color, PieceKind, Square};

/// The accessors [`encode`](crate::encode) needs from a position.
///
/// Implement this for a foreign engine's position type to encode it without
/// converting to [`Board`] first.
pub trait PositionView {
    /// Squares holding pieces of `color` and `kind`.
    fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard;

    /// The side to move.
    fn side_to_move(&self) -> Color;

    /// Whether `color` still holds the castling right on `side`.
    fn has_castle_right(&self, color: Color, side: CastleSide) -> bool;

    /// The en passant target square, if any.
    fn en_passant(&self) -> Option<Square>;

    /// Half-moves since the last capture or pawn move.
    fn halfmove_clock(&self) -> u16;
}

impl PositionView for Board {
    #[inline]
    fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        Board::pieces(self, color, kind)
    }

    #[inline]
    fn side_to_move(&self) -> Color {
        Board::side_to_move(self)
    }

    #[inline]
    fn has_castle_right(&self, color: Color, side: CastleSide) -> bool {
        self.castling().has(color, side)
    }

    #[inline]
    fn en_passant(&self) -> Option<Square> {
        Board::en_passant(self)
    }

    #[inline]
    fn halfmove_clock(&self) -> u16 {
        Board::halfmove_clock(self)
    }
}
