//! Integer 3D vectors and the six axis-aligned unit directions.
//!
//! # Direction order
//!
//! Whenever "the six directions" are iterated, the canonical order is the
//! order of [`DIRECTIONS`]:
//!
//! ```text
//! Up (0,1,0) → Forward (0,0,1) → Left (-1,0,0)
//!            → Down (0,-1,0)   → Back (0,0,-1) → Right (1,0,0)
//! ```
//!
//! The cyclic successor walks this array with wrap-around
//! (`Right → Up → Forward → Left → Down → Back → Right`), which places a
//! direction's opposite exactly three successor steps away.

use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

// ── Vec3 ──────────────────────────────────────────────────────────────────────

/// An integer 3D vector, used both for cell coordinates and displacements.
///
/// Grid dimensions never exceed 20 per axis, so `i32` components leave ample
/// headroom for out-of-bounds probes during neighborhood inspection.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// `true` for the zero vector — the "has not moved yet" sentinel of a
    /// robot's `last_move`.
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Vec3::ZERO
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the six axis-aligned unit directions.
///
/// The discriminant is the direction's canonical index (0..6), which is also
/// the code reported through the packed event read-out.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    Up      = 0,
    Forward = 1,
    Left    = 2,
    Down    = 3,
    Back    = 4,
    Right   = 5,
}

/// The six directions in canonical iteration order.
pub const DIRECTIONS: [Direction; 6] = [
    Direction::Up,
    Direction::Forward,
    Direction::Left,
    Direction::Down,
    Direction::Back,
    Direction::Right,
];

impl Direction {
    /// The unit displacement of this direction.
    #[inline]
    pub const fn vec(self) -> Vec3 {
        match self {
            Direction::Up      => Vec3::new(0, 1, 0),
            Direction::Forward => Vec3::new(0, 0, 1),
            Direction::Left    => Vec3::new(-1, 0, 0),
            Direction::Down    => Vec3::new(0, -1, 0),
            Direction::Back    => Vec3::new(0, 0, -1),
            Direction::Right   => Vec3::new(1, 0, 0),
        }
    }

    /// Canonical index, 0..6.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Cyclic successor: `Right → Up → Forward → Left → Down → Back → Right`.
    #[inline]
    pub fn succ(self) -> Direction {
        DIRECTIONS[(self.index() + 1) % 6]
    }

    /// The opposite direction — three successor steps away.
    #[inline]
    pub fn opposite(self) -> Direction {
        DIRECTIONS[(self.index() + 3) % 6]
    }

    /// The four directions perpendicular to `self`, enumerated by walking the
    /// cyclic successor from `succ(self)` and skipping the opposite.
    pub fn compatible(self) -> [Direction; 4] {
        let mut out = [self; 4];
        let mut d = self.succ();
        let mut n = 0;
        while n < 4 {
            if d != self.opposite() {
                out[n] = d;
                n += 1;
            }
            d = d.succ();
        }
        out
    }

    /// `true` when this direction lies in the plane orthogonal to `axis`.
    #[inline]
    pub fn is_orthogonal_to(self, axis: Vec3) -> bool {
        self.vec().dot(axis) == 0
    }

    /// Recover a direction from a unit displacement.  `None` for anything
    /// else, including the zero vector.
    pub fn from_vec(v: Vec3) -> Option<Direction> {
        DIRECTIONS.into_iter().find(|d| d.vec() == v)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up      => "up",
            Direction::Forward => "forward",
            Direction::Left    => "left",
            Direction::Down    => "down",
            Direction::Back    => "back",
            Direction::Right   => "right",
        };
        f.write_str(name)
    }
}
