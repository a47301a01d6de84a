//! `ud-world` — the mutable 3D world robots disperse through.
//!
//! # Data layout
//!
//! All per-cell state lives in flat `Vec`s indexed by
//! `(x * size_y + y) * size_z + z`:
//!
//! - `walkable` — the dispersion volume,
//! - `distance` — BFS hop count from the door (`DISTANCE_UNREACHED` elsewhere),
//! - `robot_at` — back-pointer into the robot arena by [`ud_core::RobotId`].
//!
//! The grid stores indices only; the arena owns every robot.  Cell
//! classification ([`WorldGrid::cell_view`] for renderers,
//! [`WorldGrid::cell_state`] for observations) is derived on query and never
//! stored.

pub mod grid;


pub use grid::{DISTANCE_UNREACHED, WorldGrid};
