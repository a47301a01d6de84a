//! `ud-robot` — robot state and the local decision procedure.
//!
//! A robot is a fixed-size record in a bounded arena ([`RobotArena`]); the
//! world grid refers to robots by [`ud_core::RobotId`] only, never by
//! pointer.  The decision procedure ([`Robot::decide`]) is strictly local:
//! it reads nothing but the robot's own 3×3×3 observation buffer, and its
//! only effects are on the robot's own fields.

pub mod decision;
pub mod robot;


pub use decision::DecisionOutcome;
pub use robot::{AGED_AFTER, Robot, RobotArena};
