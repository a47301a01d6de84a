//! Per-robot state-transition read-out.
//!
//! External pollers call [`EventLog::pop_event`] between ticks to learn what
//! happened to a robot since their last poll.  The log keeps two phases per
//! robot (`prev`, `curr`) and derives a diff tag on each poll, then rolls
//! the pair forward from the robot's live flags.  Sleeping is deliberately
//! not a tag: it is orthogonal to the Idle/Active/Settled lifecycle and
//! consumers combine the `sleeping` flag themselves.

use ud_core::{Direction, RobotId, Vec3};
use ud_robot::Robot;

/// Coarse lifecycle phase tracked by the event log.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RobotPhase {
    Idle,
    Active,
    Settled,
}

/// Diff tag returned to pollers.  The discriminants are part of the packed
/// wire encoding and must not change.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum EventTag {
    NoChange = 0,
    Moving   = 1,
    Settled  = 2,
    Stopped  = 3,
    Invalid  = 4,
}

/// Direction code reported when the robot has not moved yet.
pub const DIRECTION_UNKNOWN: i32 = 6;

/// Pack a tag and a direction code into the wire integer: tag in bits 0..3,
/// direction in bits 3..6.
#[inline]
pub fn pack(tag: EventTag, direction: i32) -> i32 {
    (tag as i32) | (direction << 3)
}

/// Canonical code of a robot's last move, [`DIRECTION_UNKNOWN`] before any.
#[inline]
pub fn direction_code(last_move: Vec3) -> i32 {
    Direction::from_vec(last_move).map_or(DIRECTION_UNKNOWN, |d| d.index() as i32)
}

// ── EventLog ──────────────────────────────────────────────────────────────────

/// Parallel phase arrays, indexed by robot id.
#[derive(Debug, Default)]
pub struct EventLog {
    prev: Vec<RobotPhase>,
    curr: Vec<RobotPhase>,
}

impl EventLog {
    /// Drop all per-robot state (map load / world re-init).
    pub fn reset(&mut self) {
        self.prev.clear();
        self.curr.clear();
    }

    /// Start tracking one more robot, in the Idle phase.
    pub(crate) fn register_robot(&mut self) {
        self.prev.push(RobotPhase::Idle);
        self.curr.push(RobotPhase::Idle);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.curr.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curr.is_empty()
    }

    /// Diff-and-roll-forward poll for one robot.
    ///
    /// The caller resolves the id to its live record; ids the engine does not
    /// know are reported as −1 before ever reaching this point.
    pub fn pop_event(&mut self, id: RobotId, robot: &Robot) -> i32 {
        let i = id.index();
        let tag = diff(self.prev[i], self.curr[i]);
        self.prev[i] = self.curr[i];
        self.curr[i] = if robot.active { RobotPhase::Active } else { RobotPhase::Settled };
        pack(tag, direction_code(robot.last_move))
    }
}

/// The (prev, curr) → tag table.
fn diff(prev: RobotPhase, curr: RobotPhase) -> EventTag {
    use self::RobotPhase::{Active, Idle, Settled};
    match (prev, curr) {
        (Idle, Idle) => EventTag::NoChange,
        (Idle, Active) | (Active, Active) => EventTag::Moving,
        (Idle, Settled) | (Active, Settled) => EventTag::Settled,
        (Active, Idle) => EventTag::Stopped,
        (Settled, Settled) => EventTag::NoChange,
        (Settled, Idle) | (Settled, Active) => EventTag::Invalid,
    }
}
