//! Move execution via copy-make.

use tracing::trace;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::square::Square;

impl Board {
    /// Apply a move and return the resulting board. Copy-make: `self` is not modified.
    ///
    /// No legality checking is done. Special moves are recognised from the
    /// position the way UCI text requires:
    /// - a king moving two files castles, bringing the corner rook across;
    /// - a pawn moving diagonally onto the en passant square captures the
    ///   pawn behind it;
    /// - a pawn reaching the last rank without a promotion piece becomes a queen.
    ///
    /// A move from an empty square returns the board unchanged.
    pub fn play(&self, mv: Move) -> Board {
        let mut b = *self;
        let src = mv.source();
        let dst = mv.dest();

        let Some(moving) = b.piece_at(src) else {
            trace!(%mv, "ignoring move from empty square");
            return b;
        };
        let us = moving.color;

        let mut captured = b.clear(dst);
        b.clear(src);
        b.set_en_passant(None);

        match moving.kind {
            PieceKind::Pawn => {
                if mv.file_delta() != 0 && captured.is_none() && self.en_passant() == Some(dst) {
                    captured = dst.offset(-us.forward(), 0).and_then(|behind| b.clear(behind));
                }
                if mv.rank_delta().abs() == 2 {
                    b.set_en_passant(src.offset(us.forward(), 0));
                }
                let (_, last_rank) = us.promotion_ranks();
                let kind = if dst.rank() == last_rank {
                    mv.promotion().unwrap_or(PromotionPiece::Queen).to_piece_kind()
                } else {
                    PieceKind::Pawn
                };
                b.put(dst, Piece::new(us, kind));
            }
            PieceKind::King if mv.file_delta().abs() == 2 => {
                b.put(dst, moving);
                castle_rook(&mut b, us, dst);
            }
            _ => b.put(dst, moving),
        }

        b.set_castling(
            b.castling()
                .without(CastleRights::revoked_by(src))
                .without(CastleRights::revoked_by(dst)),
        );

        if moving.kind == PieceKind::Pawn || captured.is_some() {
            b.set_halfmove_clock(0);
        } else {
            b.set_halfmove_clock(b.halfmove_clock().saturating_add(1));
        }

        if us == Color::Black {
            b.set_fullmove_number(b.fullmove_number().saturating_add(1));
        }
        b.set_side_to_move(us.flip());
        b
    }
}

/// Move the castling rook for a king that has just landed on `king_dst`.
fn castle_rook(b: &mut Board, us: Color, king_dst: Square) {
    let (rook_from_file, rook_to_file) = if king_dst.file() == 6 { (7, 5) } else { (0, 3) };
    let rank = king_dst.rank();
    let (Some(from), Some(to)) = (Square::new(rank, rook_from_file), Square::new(rank, rook_to_file)) else {
        return;
    };
    if let Some(rook) = b.clear(from) {
        b.put(to, rook);
    } else {
        trace!(color = %us, square = %from, "castling without a rook on the corner");
    }
}
