//! Scalar run counters, updated inline by the tick loop.

use ud_core::RobotId;

/// Performance counters for one run.
///
/// `makespan` mirrors `simulation_steps` every tick and is monotone within a
/// run; consumers freeze it at the tick they observe completion.  Walkable
/// cell and robot counts live with the grid and arena; everything here is
/// pure tick accounting.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Ticks executed since the last map load or reset.
    pub simulation_steps: u64,
    /// Equal to `simulation_steps`; see the struct docs.
    pub makespan: u64,

    /// Sum over robots of positions changed.
    pub t_total: u64,
    /// Maximum over robots of `robot_steps`.
    pub t_max: u64,
    /// Sum over robots of ticks spent active in the arena.
    pub e_total: u64,
    /// Maximum over robots of `robot_time`.
    pub e_max: u64,

    /// True once a tick started with no active robot and spawned none.
    pub complete: bool,

    /// Per-robot accepted moves, indexed by robot id.
    pub robot_steps: Vec<u64>,
    /// Per-robot active ticks, indexed by robot id.
    pub robot_time: Vec<u64>,
}

impl Metrics {
    pub fn reset(&mut self) {
        *self = Metrics::default();
    }

    /// Start counting for one more robot.
    pub(crate) fn register_robot(&mut self) {
        self.robot_steps.push(0);
        self.robot_time.push(0);
    }

    /// One accepted position change for `id`.
    pub(crate) fn record_move(&mut self, id: RobotId) {
        let steps = &mut self.robot_steps[id.index()];
        *steps += 1;
        self.t_total += 1;
        self.t_max = self.t_max.max(*steps);
    }

    /// One tick of active presence for `id`.
    pub(crate) fn record_presence(&mut self, id: RobotId) {
        let time = &mut self.robot_time[id.index()];
        *time += 1;
        self.e_total += 1;
        self.e_max = self.e_max.max(*time);
    }
}
