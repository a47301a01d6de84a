//! Map parsing errors.
//!
//! The only fallible surface of the whole engine: in-engine faults recover
//! silently, but an externally supplied packed map is validated up front and
//! rejected with a typed reason.

use thiserror::Error;
use ud_core::Vec3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("packed map stream has {got} bytes, expected {expected}")]
    Truncated { expected: usize, got: usize },

    #[error("dimension {got} outside the valid range 1..={max}")]
    BadDimension { got: usize, max: usize },

    #[error("door {door} lies outside the {size_x}x{size_y}x{size_z} volume")]
    DoorOutsideVolume { door: Vec3, size_x: usize, size_y: usize, size_z: usize },

    #[error("door {door} is packed as a wall cell")]
    DoorOnWall { door: Vec3 },
}
