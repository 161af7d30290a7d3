//! Neural-network codecs: board -> input planes, move <-> policy index.

mod encoder;
mod error;
mod index;
mod sample;
mod shape;
mod table;
mod view;

pub use encoder::{
    CASTLING_ORDER, CASTLING_PLANE, EN_PASSANT_PLANE, HALFMOVE_NORMALIZER, HALFMOVE_PLANE,
    NUM_PLANES, PLANE_CELLS, Representation, SIDE_TO_MOVE_PLANE, encode,
};
pub use error::CodecError;
pub use index::{MoveIndex, POLICY_SIZE};
pub use sample::TrainingSample;
pub use shape::{Direction, KNIGHT_JUMPS, MoveShape, NUM_MOVE_PLANES, PROMOTION_FILE_DELTAS};
pub use table::{MoveTable, index_to_move, move_to_index};
pub use view::PositionView;
