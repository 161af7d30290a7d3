//! Training records handed to the data pipeline.

use clockwork_core::Move;

use crate::encoder::{Representation, encode};
use crate::error::CodecError;
use crate::index::MoveIndex;
use crate::table::MoveTable;
use crate::view::PositionView;

/// One supervised example: input planes, policy target, value target.
///
/// Storage and batching are the pipeline's business; this only fixes the
/// three field shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    /// Encoded position.
    pub representation: Representation,
    /// Index of the move played, in 0..4672.
    pub policy: MoveIndex,
    /// Outcome label for the position.
    pub value: f32,
}

impl TrainingSample {
    /// Encode `position` and the move played from it.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnindexableMove`] if `mv` has no policy index.
    pub fn new<P: PositionView + ?Sized>(
        position: &P,
        mv: Move,
        value: f32,
    ) -> Result<TrainingSample, CodecError> {
        let policy = MoveTable::global().require_index(mv)?;
        Ok(TrainingSample {
            representation: encode(position),
            policy,
            value,
        })
    }
}
