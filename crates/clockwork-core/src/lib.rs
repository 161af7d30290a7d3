//! Core chess types: squares, pieces, moves, and the position record.

mod bitboard;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod piece;
mod play;
mod square;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, PromotionPiece};
pub use color::Color;
pub use error::FenError;
pub use fen::STARTING_FEN;
pub use piece::{Piece, PieceKind};
pub use square::Square;
