//! The settle-or-move decision.
//!
//! Runs once per active robot per tick, strictly on the robot's own
//! observation buffer.  In order:
//!
//! 1. **Total blockage** — all six directions walled: freeze where it stands.
//! 2. **Settlement test** — the robot has moved at least once, a wall closes
//!    each axis, and walling the center would not disconnect any pair of
//!    neighborhood cells.  The disconnection check runs twice: on the plain
//!    observation, and on a copy with both horizontal lids forced shut, so a
//!    settlement cannot lean on connectivity that only exists through the
//!    layer above or below.
//! 3. **Climb** — move up unless the previous move was down.
//! 4. **Lateral sweep** — first open direction in the horizontal plane,
//!    canonical order, never straight back the way it came.
//! 5. **Drop.**
//!
//! `set_move` records `last_move`/`ever_moved` only for a step into a `Free`
//! cell.  A push into an `Occupied` cell (one expected to vacate during this
//! tick's commit) records the target alone — the robot keeps hugging the
//! column it is pushing through, and a robot that has only ever pushed still
//! counts as never having moved for the settlement precondition.

use ud_core::neighborhood::CELLS;
use ud_core::{CellState, DIRECTIONS, Direction, Neighborhood};

use crate::robot::Robot;

/// What a decision did to the robot.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DecisionOutcome {
    /// `target` names the neighbor to enter at commit.
    Move,
    /// Settled by the settlement test.
    Settled,
    /// Settled because every direction is walled off.
    Blocked,
}

impl Robot {
    /// Decide this tick's action.  Increments `active_for`; either stores a
    /// pending `target` or flips the robot to settled.
    pub fn decide(&mut self) -> DecisionOutcome {
        self.active_for += 1;

        if DIRECTIONS.iter().all(|d| self.obs.dir(*d).is_wall()) {
            self.settle();
            return DecisionOutcome::Blocked;
        }

        if self.ever_moved
            && self.walled_on_every_axis()
            && settling_preserves_reachability(&self.obs)
        {
            self.settle();
            return DecisionOutcome::Settled;
        }

        // A robot that has just dropped does not climb straight back.
        if self.last_move != Direction::Down.vec() && !self.obs.dir(Direction::Up).is_wall() {
            self.primary_dir = Some(Direction::Up);
            self.set_move(Direction::Up);
            return DecisionOutcome::Move;
        }

        for d in DIRECTIONS {
            if d.is_orthogonal_to(self.external_axis)
                && d.vec() != -self.last_move
                && !self.obs.dir(d).is_wall()
            {
                self.secondary_dir = Some(d);
                self.set_move(d);
                return DecisionOutcome::Move;
            }
        }

        self.set_move(Direction::Down);
        DecisionOutcome::Move
    }

    /// Record the chosen step.  The target is always written; the move only
    /// counts (for `last_move` and `ever_moved`) when the cell is `Free`.
    fn set_move(&mut self, d: Direction) {
        self.target = self.position + d.vec();
        if self.obs.dir(d) == CellState::Free {
            self.last_move = d.vec();
            self.ever_moved = true;
        }
    }

    /// A wall on at least one side of each of the three axes.
    fn walled_on_every_axis(&self) -> bool {
        use ud_core::Direction::{Back, Down, Forward, Left, Right, Up};
        let obs = &self.obs;
        (obs.dir(Up).is_wall() || obs.dir(Down).is_wall())
            && (obs.dir(Left).is_wall() || obs.dir(Right).is_wall())
            && (obs.dir(Forward).is_wall() || obs.dir(Back).is_wall())
    }
}

/// Both settlement reachability checks: the plain observation and the
/// lids-closed variant.  Both must hold; neither subsumes the other.
pub(crate) fn settling_preserves_reachability(obs: &Neighborhood) -> bool {
    preserves_reachability(obs) && preserves_reachability(&obs.with_lids_closed())
}

/// Would walling the center leave every currently-connected pair of
/// non-center cells connected?
pub(crate) fn preserves_reachability(obs: &Neighborhood) -> bool {
    let walled = obs.with_center_walled();
    for from in 0..CELLS {
        if from == Neighborhood::CENTER {
            continue;
        }
        for to in 0..CELLS {
            if to == Neighborhood::CENTER {
                continue;
            }
            if obs.reachable(from, to) && !walled.reachable(from, to) {
                return false;
            }
        }
    }
    true
}
