//! `ud-core` — foundational types for the uniform-dispersion engine.
//!
//! This crate is a dependency of every other `ud-*` crate.  It intentionally
//! has no `ud-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module           | Contents                                             |
//! |------------------|------------------------------------------------------|
//! | [`ids`]          | `RobotId`                                            |
//! | [`vec3`]         | `Vec3`, the six-direction set and its cyclic order   |
//! | [`cell`]         | `CellKind` (render codes), `CellState` (observation) |
//! | [`neighborhood`] | 3×3×3 observation buffer and local reachability      |
//! | [`rng`]          | `RandomSource` injection seam and its two impls      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

/// Maximum grid extent along each axis.  World dimensions are clamped to
/// this, which in turn bounds the robot arena at `20³ = 8000` records.
pub const MAX_DIM: usize = 20;

pub mod cell;
pub mod ids;
pub mod neighborhood;
pub mod rng;
pub mod vec3;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{CellKind, CellState};
pub use ids::RobotId;
pub use neighborhood::Neighborhood;
pub use rng::{RandomSource, ScriptedSource, SmallRngSource};
pub use vec3::{DIRECTIONS, Direction, Vec3};
