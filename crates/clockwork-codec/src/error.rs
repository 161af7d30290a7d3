//! Errors for callers that treat a lookup miss as fatal.

use clockwork_core::Move;

/// Escalated lookup failures.
///
/// The lookups themselves return `Option`; these variants exist for callers
/// such as [`TrainingSample::new`](crate::TrainingSample::new) that must reject
/// a miss instead of skipping it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The move matches none of the 73 shapes anchored at its origin square.
    #[error("move {mv} does not match any policy move shape")]
    UnindexableMove {
        /// The offending move.
        mv: Move,
    },

    /// A raw policy index is not below 4672.
    #[error("policy index {index} is out of range (expected < 4672)")]
    IndexOutOfRange {
        /// The raw index.
        index: usize,
    },

    /// A policy index addresses a slot with no move (clipped at the board edge).
    #[error("policy index {index} does not correspond to a move")]
    EmptySlot {
        /// The raw index.
        index: usize,
    },
}
