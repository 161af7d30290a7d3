//! The move <-> policy index table.
//!
//! Built once per process behind a [`OnceLock`] and shared read-only
//! afterwards. Generation walks every origin square and every one of the 73
//! shapes, registering the move wherever the destination stays on the board:
//!
//! - 1456 queen-like entries (planes 0..=55),
//! - 336 knight entries (planes 56..=63),
//! - 132 underpromotion entries (planes 64..=72, 66 per color).
//!
//! The remaining 2748 slots are empty.

use std::fmt;
use std::sync::OnceLock;

use clockwork_core::{Move, PromotionPiece, Square};
use tracing::{debug, trace};

use crate::error::CodecError;
use crate::index::{MoveIndex, POLICY_SIZE};
use crate::shape::MoveShape;

/// Promotion slots in the forward key: none (or queen), knight, bishop, rook.
const PROMOTION_SLOTS: usize = 4;

/// Size of the forward key space: origin x destination x promotion slot.
const KEY_SPACE: usize = Square::COUNT * Square::COUNT * PROMOTION_SLOTS;

static MOVE_TABLE: OnceLock<MoveTable> = OnceLock::new();

/// Bidirectional map between moves and policy indices.
#[derive(Clone, PartialEq, Eq)]
pub struct MoveTable {
    /// Move key -> index.
    forward: Box<[Option<MoveIndex>]>,
    /// Index -> move.
    reverse: Box<[Option<Move>]>,
    len: usize,
}

impl MoveTable {
    /// Build the process-wide table if needed and return it.
    ///
    /// Idempotent: later calls return the same table without regenerating it.
    /// Concurrent first calls block until the one generating thread finishes.
    pub fn build() -> &'static MoveTable {
        MOVE_TABLE.get_or_init(|| {
            let table = MoveTable::generate();
            debug!(entries = table.len(), "move table built");
            table
        })
    }

    /// The process-wide table, built on first use.
    #[inline]
    pub fn global() -> &'static MoveTable {
        Self::build()
    }

    /// Run the generation algorithm into a fresh, unshared table.
    pub fn generate() -> MoveTable {
        let mut table = MoveTable {
            forward: vec![None; KEY_SPACE].into_boxed_slice(),
            reverse: vec![None; POLICY_SIZE].into_boxed_slice(),
            len: 0,
        };

        for shape in MoveShape::all() {
            for from in Square::all() {
                let (Some(to), Some(index)) = (shape.target(from), MoveIndex::from_parts(from, shape))
                else {
                    continue;
                };
                let mv = match shape.promotion() {
                    Some(piece) => Move::new_promotion(from, to, piece),
                    None => Move::new(from, to),
                };
                table.insert(mv, index);
            }
        }
        table
    }

    fn insert(&mut self, mv: Move, index: MoveIndex) {
        let key = lookup_key(mv);
        debug_assert!(self.forward[key].is_none(), "duplicate move {mv}");
        debug_assert!(self.reverse[index.get()].is_none(), "duplicate index {index}");
        self.forward[key] = Some(index);
        self.reverse[index.get()] = Some(mv);
        self.len += 1;
    }

    /// Policy index of `mv`, or `None` if no shape from its origin produces it.
    ///
    /// A queen promotion resolves to the plain queen-like step onto the last rank.
    pub fn to_index(&self, mv: Move) -> Option<MoveIndex> {
        let index = self.forward[lookup_key(mv)];
        if index.is_none() {
            trace!(%mv, "move has no policy index");
        }
        index
    }

    /// Move stored at `index`, or `None` for an empty slot.
    ///
    /// Never returns a queen promotion; those share the plain move's slot.
    #[inline]
    pub fn to_move(&self, index: MoveIndex) -> Option<Move> {
        self.reverse[index.get()]
    }

    /// Like [`to_index`](Self::to_index), but a miss is an error.
    pub fn require_index(&self, mv: Move) -> Result<MoveIndex, CodecError> {
        self.to_index(mv).ok_or(CodecError::UnindexableMove { mv })
    }

    /// Decode a raw policy position, rejecting out-of-range and empty slots.
    pub fn require_move(&self, raw: usize) -> Result<Move, CodecError> {
        let index = MoveIndex::new(raw).ok_or(CodecError::IndexOutOfRange { index: raw })?;
        self.to_move(index).ok_or(CodecError::EmptySlot { index: raw })
    }

    /// Number of populated slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if no slot is populated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Populated slots in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (MoveIndex, Move)> + '_ {
        self.reverse
            .iter()
            .enumerate()
            .filter_map(|(raw, mv)| Some((MoveIndex::new(raw)?, (*mv)?)))
    }
}

impl fmt::Debug for MoveTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveTable").field("len", &self.len).finish()
    }
}

/// Forward key for `mv`. Queen promotions drop their annotation here, which
/// is what folds them onto the queen-like entries.
#[inline]
fn lookup_key(mv: Move) -> usize {
    let slot = match mv.promotion() {
        None | Some(PromotionPiece::Queen) => 0,
        Some(PromotionPiece::Knight) => 1,
        Some(PromotionPiece::Bishop) => 2,
        Some(PromotionPiece::Rook) => 3,
    };
    (mv.source().index() * Square::COUNT + mv.dest().index()) * PROMOTION_SLOTS + slot
}

/// Policy index of `mv` in the process-wide table.
pub fn move_to_index(mv: Move) -> Option<MoveIndex> {
    MoveTable::global().to_index(mv)
}

/// Move at raw policy position `index` in the process-wide table.
pub fn index_to_move(index: usize) -> Option<Move> {
    MoveTable::global().to_move(MoveIndex::new(index)?)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use clockwork_core::{Move, PromotionPiece, Square};

    use super::{MoveTable, index_to_move, move_to_index};
    use crate::error::CodecError;
    use crate::index::{MoveIndex, POLICY_SIZE};
    use crate::shape::{Direction, MoveShape};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn uci(s: &str) -> Move {
        Move::from_uci(s).unwrap()
    }

    #[test]
    fn entry_count() {
        let table = MoveTable::build();
        assert_eq!(table.len(), 1924);
        assert!(table.len() <= POLICY_SIZE);
        assert_eq!(table.iter().count(), table.len());
    }

    #[test]
    fn entry_count_by_shape_family() {
        let mut queen = 0;
        let mut knight = 0;
        let mut under = 0;
        for (index, _) in MoveTable::build().iter() {
            match index.shape().unwrap() {
                MoveShape::Queen { .. } => queen += 1,
                MoveShape::Knight { .. } => knight += 1,
                MoveShape::Underpromotion { .. } => under += 1,
            }
        }
        assert_eq!((queen, knight, under), (1456, 336, 132));
    }

    #[test]
    fn known_indices() {
        let table = MoveTable::build();
        let cases = [
            ("e2e4", 12 * 73 + 1),
            ("g1f3", 6 * 73 + 63),
            ("e7e8", 52 * 73),
            ("e7e8n", 52 * 73 + 65),
            ("e7d8b", 52 * 73 + 67),
            ("e7f8r", 52 * 73 + 72),
            ("a1h8", 13),
            ("h8a1", 63 * 73 + 5 * 7 + 6),
            ("d2d1n", 11 * 73 + 65),
        ];
        for (text, expected) in cases {
            assert_eq!(
                table.to_index(uci(text)).map(MoveIndex::get),
                Some(expected),
                "index of {text}"
            );
        }
    }

    #[test]
    fn queen_promotion_folds_onto_plain_move() {
        let table = MoveTable::build();
        let plain = table.to_index(uci("e7e8")).unwrap();
        assert_eq!(table.to_index(uci("e7e8q")), Some(plain));

        let under: HashSet<MoveIndex> = ["e7e8n", "e7e8b", "e7e8r"]
            .into_iter()
            .map(|m| table.to_index(uci(m)).unwrap())
            .collect();
        assert_eq!(under.len(), 3);
        assert!(!under.contains(&plain));

        // Decoding never yields a queen promotion.
        assert_eq!(table.to_move(plain), Some(uci("e7e8")));
    }

    #[test]
    fn black_queen_promotion_folds_too() {
        let table = MoveTable::build();
        assert_eq!(table.to_index(uci("b2a1q")), table.to_index(uci("b2a1")));
        assert_ne!(table.to_index(uci("b2a1n")), table.to_index(uci("b2a1")));
    }

    #[test]
    fn white_and_black_share_underpromotion_planes() {
        let table = MoveTable::build();
        let white = table.to_index(uci("c7c8r")).unwrap();
        let black = table.to_index(uci("c2c1r")).unwrap();
        assert_eq!(white.plane(), black.plane());
        assert_ne!(white, black);
    }

    #[test]
    fn east_seven_from_h_file_is_absent() {
        let table = MoveTable::build();
        let shape = MoveShape::Queen { direction: Direction::East, distance: 7 };
        for rank in 0..8 {
            let h = Square::new(rank, 7).unwrap();
            assert_eq!(shape.target(h), None);
            assert_eq!(table.to_move(MoveIndex::from_parts(h, shape).unwrap()), None);

            let a = Square::new(rank, 0).unwrap();
            let index = MoveIndex::from_parts(a, shape).unwrap();
            assert_eq!(table.to_move(index), Some(Move::new(a, h)));
            assert_eq!(table.to_index(Move::new(a, h)), Some(index));
        }
    }

    #[test]
    fn roundtrip_every_entry() {
        let table = MoveTable::build();
        let mut seen = HashSet::new();
        for (index, mv) in table.iter() {
            assert!(seen.insert(index), "index {index} repeated");
            assert_eq!(table.to_index(mv), Some(index), "{mv}");
            assert_eq!(table.to_move(index), Some(mv));
            assert_ne!(mv.promotion(), Some(PromotionPiece::Queen));
        }
    }

    #[test]
    fn impossible_moves_miss() {
        let table = MoveTable::build();
        for text in ["a1c4", "e4e4", "b1d5", "e6e7n", "e7e6b", "e7g8r", "a3a2n", "h1a2"] {
            let mv = uci(text);
            assert_eq!(table.to_index(mv), None, "{text} should miss");
            assert_eq!(table.require_index(mv), Err(CodecError::UnindexableMove { mv }));
        }
    }

    #[test]
    fn require_move_errors() {
        let table = MoveTable::build();
        assert_eq!(table.require_move(877), Ok(Move::new(sq("e2"), sq("e4"))));
        assert_eq!(table.require_move(4672), Err(CodecError::IndexOutOfRange { index: 4672 }));
        // h1 east by one is off the board: plane 14 of square 7.
        assert_eq!(table.require_move(7 * 73 + 14), Err(CodecError::EmptySlot { index: 7 * 73 + 14 }));
    }

    #[test]
    fn generate_matches_global() {
        assert_eq!(MoveTable::generate(), *MoveTable::build());
        assert!(std::ptr::eq(MoveTable::build(), MoveTable::global()));
    }

    #[test]
    fn free_functions_use_global_table() {
        assert_eq!(move_to_index(uci("e2e4")).map(MoveIndex::get), Some(877));
        assert_eq!(index_to_move(877), Some(uci("e2e4")));
        assert_eq!(index_to_move(POLICY_SIZE), None);
    }

    #[test]
    fn invalid_shapes_never_reach_the_table() {
        let table = MoveTable::build();
        let h8 = sq("h8");
        for shape in [
            MoveShape::Knight { jump: 20 },
            MoveShape::Queen { direction: Direction::North, distance: 0 },
            MoveShape::Underpromotion { piece: PromotionPiece::Queen, file_delta: 1 },
        ] {
            let to_move = MoveIndex::from_parts(h8, shape).and_then(|i| table.to_move(i));
            assert_eq!(to_move, None, "{shape:?}");
        }
    }

    #[test]
    fn debug_is_compact() {
        assert_eq!(format!("{:?}", MoveTable::build()), "MoveTable { len: 1924 }");
    }
}
