//! The position: piece placement, side to move, castling, en passant, and move counters.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

/// Back-rank piece order from the a-file to the h-file.
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

/// Complete position state.
///
/// The board is a placement record, not a rules engine: it holds whatever
/// pieces it is given, including setups with missing kings or extra queens.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Occupancy per color and kind, indexed `[color][kind]`.
    pieces: [[Bitboard; PieceKind::COUNT]; Color::COUNT],
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    /// Half-moves since the last capture or pawn move.
    halfmove_clock: u16,
    /// Starts at 1, incremented after Black moves.
    fullmove_number: u16,
}

impl Board {
    /// An empty board: White to move, no rights, counters at their initial values.
    pub const fn empty() -> Board {
        Board {
            pieces: [[Bitboard::EMPTY; PieceKind::COUNT]; Color::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let (pawn_rank, back_rank) = match color {
                Color::White => (1, 0),
                Color::Black => (6, 7),
            };
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                let file = file as u8;
                if let Some(sq) = Square::new(back_rank, file) {
                    board.put(sq, Piece::new(color, kind));
                }
                if let Some(sq) = Square::new(pawn_rank, file) {
                    board.put(sq, Piece::new(color, PieceKind::Pawn));
                }
            }
        }
        board.castling = CastleRights::ALL;
        board
    }

    /// Return the piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        Color::ALL.into_iter().find_map(|color| {
            PieceKind::ALL
                .into_iter()
                .find(|kind| self.pieces[color.index()][kind.index()].contains(sq))
                .map(|kind| Piece::new(color, kind))
        })
    }

    /// Squares holding pieces of the given color and kind.
    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    /// All squares holding a piece of `color`.
    pub fn side(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    /// All occupied squares.
    pub fn occupied(&self) -> Bitboard {
        self.side(Color::White) | self.side(Color::Black)
    }

    /// Place `piece` on `sq`, replacing whatever stood there.
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.clear(sq);
        let bb = &mut self.pieces[piece.color.index()][piece.kind.index()];
        *bb = bb.with(sq);
    }

    /// Remove and return the piece on `sq`, if any.
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        let bb = &mut self.pieces[piece.color.index()][piece.kind.index()];
        *bb = bb.without(sq);
        Some(piece)
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Set the side to move.
    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Set the castling rights.
    #[inline]
    pub fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    /// Return the en passant target square, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Set the en passant target square.
    #[inline]
    pub fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    /// Return the halfmove (no-progress) clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    /// Set the halfmove clock.
    #[inline]
    pub fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    /// Return the fullmove number.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Set the fullmove number.
    #[inline]
    pub fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    /// Return a wrapper that displays the board as an 8x8 grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{self}\")")
    }
}

/// Grid display of a [`Board`], rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = Square::new(rank, file)
                    .and_then(|sq| self.0.piece_at(sq))
                    .map_or('.', Piece::fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
