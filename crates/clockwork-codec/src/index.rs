//! Policy indices: `origin * 73 + plane`.

use std::fmt;

use clockwork_core::Square;

use crate::shape::{MoveShape, NUM_MOVE_PLANES};

/// Size of the policy output: 64 origins x 73 shapes.
pub const POLICY_SIZE: usize = Square::COUNT * NUM_MOVE_PLANES;

/// A slot in the 4672-wide policy vector.
///
/// Every value below [`POLICY_SIZE`] is a valid index; whether a move lives
/// there is up to the [`MoveTable`](crate::MoveTable).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoveIndex(u16);

impl MoveIndex {
    /// Wrap a raw index, or `None` if it is not below 4672.
    #[inline]
    pub const fn new(index: usize) -> Option<MoveIndex> {
        if index < POLICY_SIZE {
            Some(MoveIndex(index as u16))
        } else {
            None
        }
    }

    /// Index of `shape` anchored at `from`, or `None` if the shape has no plane.
    #[inline]
    pub fn from_parts(from: Square, shape: MoveShape) -> Option<MoveIndex> {
        MoveIndex::new(from.index() * NUM_MOVE_PLANES + usize::from(shape.plane()?))
    }

    /// The raw index (0..4672).
    #[inline]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Origin square.
    #[inline]
    pub fn source(self) -> Square {
        Square::from_index((self.get() / NUM_MOVE_PLANES) as u8)
            .expect("policy index is below 64 * 73")
    }

    /// Plane offset (0..=72).
    #[inline]
    pub const fn plane(self) -> u8 {
        (self.get() % NUM_MOVE_PLANES) as u8
    }

    /// The move shape this slot stands for.
    pub fn shape(self) -> Option<MoveShape> {
        MoveShape::from_plane(self.plane())
    }
}

impl From<MoveIndex> for usize {
    fn from(index: MoveIndex) -> usize {
        index.get()
    }
}

impl fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveIndex({} = {}*73+{})", self.0, self.get() / NUM_MOVE_PLANES, self.plane())
    }
}
