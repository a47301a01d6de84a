//! Cell classification enums.
//!
//! Two views of the same world exist side by side: [`CellKind`] is the
//! render code handed to external consumers (visualizers, dashboards), and
//! [`CellState`] is the three-way code robots see inside their observation
//! buffers.  Neither is ever stored in the grid; both are derived on query.

use std::fmt;

// ── CellKind ──────────────────────────────────────────────────────────────────

/// Logical render code for a cell, exposed to consumers.
///
/// The discriminants are part of the external interface and must not change.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CellKind {
    #[default]
    Empty         = 0,
    Wall          = 1,
    ActiveRobot   = 2,
    SettledRobot  = 3,
    Door          = 4,
    SleepingRobot = 5,
}

impl CellKind {
    /// The wire code of this kind.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CellKind::Empty         => "empty",
            CellKind::Wall          => "wall",
            CellKind::ActiveRobot   => "active-robot",
            CellKind::SettledRobot  => "settled-robot",
            CellKind::Door          => "door",
            CellKind::SleepingRobot => "sleeping-robot",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── CellState ─────────────────────────────────────────────────────────────────

/// What a robot sees in one cell of its 3×3×3 neighborhood.
///
/// Settled robots read as `Wall`: once a robot freezes it is part of the
/// environment as far as every other robot is concerned.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Wall,
    Occupied,
    Free,
}

impl CellState {
    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(self, CellState::Wall)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellState::Wall     => "wall",
            CellState::Occupied => "occupied",
            CellState::Free     => "free",
        };
        f.write_str(name)
    }
}
