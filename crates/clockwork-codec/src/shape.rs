//! The 73 move shapes that make up each square's slice of the policy.
//!
//! ```text
//!   0..=55   queen-like: direction * 7 + (distance - 1)
//!   56..=63  knight jumps, in KNIGHT_JUMPS order
//!   64..=72  underpromotions: 64 + piece * 3 + (file_delta + 1), pieces N, B, R
//! ```

use clockwork_core::{Color, PromotionPiece, Square};

/// Number of shapes per origin square.
pub const NUM_MOVE_PLANES: usize = 73;

const QUEEN_PLANES: u8 = 56;
const KNIGHT_PLANES: u8 = 8;
const MAX_DISTANCE: u8 = 7;

/// Knight deltas as `(d_rank, d_file)`, in plane order.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Underpromotion file deltas in plane order: capture left, straight, capture right.
pub const PROMOTION_FILE_DELTAS: [i8; 3] = [-1, 0, 1];

/// A compass direction for queen-like moves, seen from White's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    /// All directions in plane order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Return the index (0..7).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit step as `(d_rank, d_file)`.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (-1, 1),
            Direction::South => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (1, -1),
        }
    }

    /// Direction and distance of a straight or diagonal displacement.
    fn from_displacement(d_rank: i8, d_file: i8) -> Option<(Direction, u8)> {
        let straight = d_rank == 0 || d_file == 0;
        let diagonal = d_rank.abs() == d_file.abs();
        if (d_rank, d_file) == (0, 0) || !(straight || diagonal) {
            return None;
        }
        let step = (d_rank.signum(), d_file.signum());
        let direction = Direction::ALL.into_iter().find(|d| d.delta() == step)?;
        Some((direction, d_rank.unsigned_abs().max(d_file.unsigned_abs())))
    }
}

/// One of the 73 move patterns anchored at an origin square.
///
/// Fields are not range-checked on construction; [`plane`](Self::plane) and
/// [`target`](Self::target) return `None` for a shape outside the 73.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveShape {
    /// Slide `distance` (1..=7) squares in `direction`. Covers queen promotions.
    Queen { direction: Direction, distance: u8 },
    /// Knight jump `KNIGHT_JUMPS[jump]`.
    Knight { jump: u8 },
    /// Pawn step onto the last rank promoting to a knight, bishop or rook.
    Underpromotion { piece: PromotionPiece, file_delta: i8 },
}

impl MoveShape {
    /// Decode a plane offset, or `None` if it is not below 73.
    pub fn from_plane(plane: u8) -> Option<MoveShape> {
        (usize::from(plane) < NUM_MOVE_PLANES).then(|| decode(plane))
    }

    /// All 73 shapes in plane order.
    pub fn all() -> impl Iterator<Item = MoveShape> {
        (0..NUM_MOVE_PLANES as u8).map(decode)
    }

    /// Plane offset of this shape (0..=72), or `None` if a field is out of
    /// range: a distance outside 1..=7, a jump of 8 or more, a file delta
    /// outside -1..=1, or a queen underpromotion.
    pub fn plane(self) -> Option<u8> {
        match self {
            MoveShape::Queen { direction, distance } => (1..=MAX_DISTANCE)
                .contains(&distance)
                .then(|| direction as u8 * MAX_DISTANCE + (distance - 1)),
            MoveShape::Knight { jump } => (jump < KNIGHT_PLANES).then_some(QUEEN_PLANES + jump),
            MoveShape::Underpromotion { piece, file_delta } => {
                let piece = PromotionPiece::UNDER.iter().position(|&p| p == piece)?;
                let delta = PROMOTION_FILE_DELTAS.iter().position(|&d| d == file_delta)?;
                Some(QUEEN_PLANES + KNIGHT_PLANES + (piece * 3 + delta) as u8)
            }
        }
    }

    /// Promotion piece carried by this shape.
    pub fn promotion(self) -> Option<PromotionPiece> {
        match self {
            MoveShape::Underpromotion { piece, .. } => Some(piece),
            _ => None,
        }
    }

    /// Destination reached from `from`, or `None` if it is off the board or
    /// the shape has no plane.
    ///
    /// Underpromotions only apply from the seventh rank (White, moving up) or
    /// the second rank (Black, moving down); every other origin yields `None`.
    pub fn target(self, from: Square) -> Option<Square> {
        self.plane()?;
        match self {
            MoveShape::Queen { direction, distance } => {
                let (dr, df) = direction.delta();
                let n = distance as i8;
                from.offset(dr * n, df * n)
            }
            MoveShape::Knight { jump } => {
                let &(dr, df) = KNIGHT_JUMPS.get(usize::from(jump))?;
                from.offset(dr, df)
            }
            MoveShape::Underpromotion { file_delta, .. } => {
                let color = promoting_color(from)?;
                from.offset(color.forward(), file_delta)
            }
        }
    }

    /// The shape that carries `from -> to` with the given promotion, if any.
    ///
    /// A queen promotion is treated as the plain queen-like step.
    pub fn classify(from: Square, to: Square, promotion: Option<PromotionPiece>) -> Option<MoveShape> {
        let d_rank = to.rank() as i8 - from.rank() as i8;
        let d_file = to.file() as i8 - from.file() as i8;

        match promotion {
            Some(PromotionPiece::Queen) | None => {
                if let Some(jump) = KNIGHT_JUMPS.iter().position(|&j| j == (d_rank, d_file)) {
                    return Some(MoveShape::Knight { jump: jump as u8 });
                }
                let (direction, distance) = Direction::from_displacement(d_rank, d_file)?;
                Some(MoveShape::Queen { direction, distance })
            }
            Some(piece) => {
                let color = promoting_color(from)?;
                if d_rank != color.forward() || !PROMOTION_FILE_DELTAS.contains(&d_file) {
                    return None;
                }
                Some(MoveShape::Underpromotion { piece, file_delta: d_file })
            }
        }
    }
}

/// Side whose pawns promote from `from`'s rank, if any.
fn promoting_color(from: Square) -> Option<Color> {
    Color::ALL
        .into_iter()
        .find(|color| color.promotion_ranks().0 == from.rank())
}

/// Decode a plane offset already known to be below 73.
fn decode(plane: u8) -> MoveShape {
    if plane < QUEEN_PLANES {
        MoveShape::Queen {
            direction: Direction::ALL[usize::from(plane / MAX_DISTANCE)],
            distance: plane % MAX_DISTANCE + 1,
        }
    } else if plane < QUEEN_PLANES + KNIGHT_PLANES {
        MoveShape::Knight { jump: plane - QUEEN_PLANES }
    } else {
        let i = usize::from(plane - QUEEN_PLANES - KNIGHT_PLANES);
        MoveShape::Underpromotion {
            piece: PromotionPiece::UNDER[(i / 3).min(2)],
            file_delta: PROMOTION_FILE_DELTAS[i % 3],
        }
    }
}
