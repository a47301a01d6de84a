//! The `Engine` handle and its tick loop.

use ud_core::{CellKind, RandomSource, RobotId, SmallRngSource, Vec3};
use ud_map::PackedMap;
use ud_map::catalog;
use ud_robot::{DecisionOutcome, RobotArena};
use ud_world::{DISTANCE_UNREACHED, WorldGrid};

use crate::events::EventLog;
use crate::metrics::Metrics;
use crate::observer::{NoopObserver, SimObserver};

/// Default activation probability in percent.
pub const DEFAULT_ACTIVE_PROBABILITY: u8 = 50;

/// Which map the engine last loaded, so `reset_simulation` can replay it.
#[derive(Clone, Debug)]
enum LoadedMap {
    Catalog(usize),
    Packed(PackedMap),
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// One independent simulation instance.
///
/// `Engine<R>` owns all state — world grid, robot arena, counters, event
/// tables — behind a single handle, so any number of instances coexist
/// without shared mutable state.  It is generic over the injected
/// [`RandomSource`]; determinism is entirely a function of that injection.
///
/// The tick loop runs four ordered phases:
///
/// 1. **Decisions**: robots in ascending id order; each active robot either
///    sleeps (activation sampling) or observes and decides.  The grid is not
///    mutated here, so every decider sees the previous tick's world.
/// 2. **Door respawn**: if no robot holds the door cell, a fresh one appears
///    there — visible to the grid only after phase 4.
/// 3. **Commit**: pending targets become positions; targets naming a wall or
///    the outside are dropped.  Two movers may enter the same cell.
/// 4. **Rebuild**: the robot field is recomputed, earliest id winning any
///    contested cell.
pub struct Engine<R: RandomSource> {
    grid:   WorldGrid,
    robots: RobotArena,
    rng:    R,

    active_probability: u8,
    metrics:            Metrics,
    events:             EventLog,
    loaded:             Option<LoadedMap>,
}

impl Engine<SmallRngSource> {
    /// An engine with the default seeded generator and an empty world.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SmallRngSource::new(seed))
    }
}

impl<R: RandomSource> Engine<R> {
    /// An engine driven by the given random source and an empty world.
    /// Call [`load_map`][Self::load_map] or [`init_grid`][Self::init_grid]
    /// before ticking.
    pub fn with_rng(rng: R) -> Self {
        Self {
            grid: WorldGrid::new(0, 0, 0),
            robots: RobotArena::new(0),
            rng,
            active_probability: DEFAULT_ACTIVE_PROBABILITY,
            metrics: Metrics::default(),
            events: EventLog::default(),
            loaded: None,
        }
    }

    // ── World lifecycle and editing ───────────────────────────────────────

    /// Replace the world with an all-wall grid of the given extents (each
    /// clamped to the per-axis maximum) and drop all robots, counters, and
    /// event state.  The door returns to the origin.
    pub fn init_grid(&mut self, size_x: usize, size_y: usize, size_z: usize) {
        self.grid = WorldGrid::new(size_x, size_y, size_z);
        self.robots.reset(self.grid.volume());
        self.metrics.reset();
        self.events.reset();
    }

    /// Stamp a cell kind into the world.  Out-of-bounds: no-op.
    ///
    /// Walls evict nothing but force an active occupant settled and already
    /// aged; robot kinds append a new robot only when the cell is robot-free;
    /// `Door` retargets the door; `Empty` clears walkability obstacles but
    /// never removes a robot.  `SleepingRobot` is a render-only code and is
    /// ignored here.
    pub fn set_cell(&mut self, x: i32, y: i32, z: i32, kind: CellKind) {
        let p = Vec3::new(x, y, z);
        if !self.grid.in_bounds(p) {
            return;
        }
        match kind {
            CellKind::Wall => {
                self.grid.set_walkable(p, false);
                let occupant = self.grid.robot_id_at(p);
                if let Some(robot) = self.robots.get_mut(occupant) {
                    if robot.active {
                        robot.settle_aged();
                        tracing::debug!(robot = occupant.0, at = %p, "walled in, forced settled");
                    }
                }
                self.grid.release_cell(p);
            }
            CellKind::Empty => self.grid.set_walkable(p, true),
            CellKind::Door => {
                self.grid.set_walkable(p, true);
                self.grid.set_door(p);
            }
            CellKind::ActiveRobot | CellKind::SettledRobot => {
                self.grid.set_walkable(p, true);
                if self.grid.robot_id_at(p) == RobotId::INVALID {
                    let active = kind == CellKind::ActiveRobot;
                    if let Some(id) = self.append_robot(p, active) {
                        self.grid.claim_cell(p, id);
                    }
                }
            }
            CellKind::SleepingRobot => {}
        }
    }

    /// Append an active robot at a coordinate.  Out-of-bounds: no-op; a full
    /// arena suppresses the append.  An occupied cell is allowed — the robot
    /// starts shadowed and surfaces once the occupant moves on.
    pub fn add_robot(&mut self, x: i32, y: i32, z: i32) {
        let p = Vec3::new(x, y, z);
        if !self.grid.in_bounds(p) {
            return;
        }
        if let Some(id) = self.append_robot(p, true) {
            self.grid.claim_cell(p, id);
        }
    }

    /// Retarget the door cell (straight-through `(x, y, z)` convention) and
    /// refresh the distance field.  Out-of-bounds: no-op.
    pub fn set_start_position(&mut self, x: i32, y: i32, z: i32) {
        let p = Vec3::new(x, y, z);
        if !self.grid.in_bounds(p) {
            return;
        }
        self.set_cell(x, y, z, CellKind::Door);
        self.grid.rebuild_distance_field();
    }

    /// Load catalog entry `index`.  An invalid index loads the first entry;
    /// an empty catalog makes this a no-op.
    pub fn load_map(&mut self, index: usize) {
        let resolved = if catalog::entry(index).is_some() { index } else { 0 };
        let Some(map) = catalog::entry(resolved) else {
            return;
        };
        self.load_cells(map.size_x, map.size_y, map.size_z, map.door, |x, y, z| {
            map.is_walkable(x, y, z)
        });
        self.loaded = Some(LoadedMap::Catalog(resolved));
        tracing::debug!(
            map = map.name,
            cells = self.grid.available_cells(),
            "map loaded"
        );
    }

    /// Load an externally supplied packed map (already parsed and validated).
    pub fn load_packed(&mut self, map: PackedMap) {
        self.load_cells(map.size_x, map.size_y, map.size_z, map.door, |x, y, z| {
            map.is_walkable(x, y, z)
        });
        self.loaded = Some(LoadedMap::Packed(map));
    }

    /// Reload whatever was last loaded, resetting metrics and events.  A
    /// no-op if nothing has been loaded yet.
    pub fn reset_simulation(&mut self) {
        match self.loaded.take() {
            Some(LoadedMap::Catalog(index)) => self.load_map(index),
            Some(LoadedMap::Packed(map)) => self.load_packed(map),
            None => {}
        }
    }

    fn load_cells(
        &mut self,
        size_x: usize,
        size_y: usize,
        size_z: usize,
        door: Vec3,
        walkable: impl Fn(usize, usize, usize) -> bool,
    ) {
        self.init_grid(size_x, size_y, size_z);
        for x in 0..size_x {
            for y in 0..size_y {
                for z in 0..size_z {
                    if walkable(x, y, z) {
                        self.grid.set_walkable(Vec3::new(x as i32, y as i32, z as i32), true);
                    }
                }
            }
        }
        self.grid.set_door(door);
        self.grid.rebuild_distance_field();
    }

    /// Arena append plus counter/event registration.  Clears the completion
    /// latch when the newcomer is active.
    fn append_robot(&mut self, p: Vec3, active: bool) -> Option<RobotId> {
        let id = self.robots.spawn(p, active)?;
        self.metrics.register_robot();
        self.events.register_robot();
        if active {
            self.metrics.complete = false;
        }
        Some(id)
    }

    // ── Simulation control ────────────────────────────────────────────────

    /// Run one tick.
    pub fn simulate_step(&mut self) {
        self.tick_with(&mut NoopObserver);
    }

    /// Run one tick with observer callbacks.
    pub fn tick_with<O: SimObserver>(&mut self, observer: &mut O) {
        self.metrics.simulation_steps += 1;
        let tick = self.metrics.simulation_steps;
        observer.on_tick_start(tick);

        let mut complete = true;
        let mut decided = 0usize;

        // ── Phase 1: decisions, ascending id ──────────────────────────────
        for i in 0..self.robots.len() {
            let id = RobotId(i as u32);
            if !self.robots[id].active {
                continue;
            }
            complete = false;

            if self.rng.random_int(0, 100) > i32::from(self.active_probability) {
                self.robots[id].sleeping = true;
                continue;
            }

            let position = self.robots[id].position;
            let door_distance = self.grid.distance_at(position);
            let obs = self.grid.observe(position, &self.robots);

            let robot = &mut self.robots[id];
            robot.sleeping = false;
            robot.obs = obs;
            decided += 1;

            match robot.decide() {
                DecisionOutcome::Move => {}
                outcome => {
                    if outcome == DecisionOutcome::Settled
                        && (door_distance == DISTANCE_UNREACHED
                            || u64::from(robot.active_for) != u64::from(door_distance) + 1)
                    {
                        tracing::debug!(
                            robot = id.0,
                            rounds = robot.active_for,
                            door_distance,
                            "settled off the expected arrival round"
                        );
                    }
                    tracing::debug!(robot = id.0, at = %robot.position, "robot settled");
                    observer.on_robot_settled(id, tick);
                }
            }
        }

        // ── Phase 2: door respawn ─────────────────────────────────────────
        //
        // Checked against the robot field as rebuilt last tick; the spawn
        // itself only lands in the field during this tick's rebuild.
        let door = self.grid.door();
        if self.grid.robot_id_at(door) == RobotId::INVALID && self.grid.is_walkable(door) {
            if let Some(id) = self.append_robot(door, true) {
                complete = false;
                tracing::debug!(robot = id.0, at = %door, "spawned at door");
            }
        }

        // ── Phase 3: commit ───────────────────────────────────────────────
        for i in 0..self.robots.len() {
            let id = RobotId(i as u32);
            let (active, position, target) = {
                let r = &self.robots[id];
                (r.active, r.position, r.target)
            };
            if !active {
                self.robots[id].settled_age += 1;
                continue;
            }
            if target != position {
                if self.grid.is_walkable(target) {
                    self.robots[id].position = target;
                    self.metrics.record_move(id);
                } else {
                    self.robots[id].target = position;
                }
            }
            self.metrics.record_presence(id);
        }

        // ── Phase 4: rebuild the robot field ──────────────────────────────
        self.grid.rebuild_robot_field(&self.robots);
        self.metrics.makespan = self.metrics.simulation_steps;
        self.metrics.complete = complete;

        observer.on_tick_end(tick, decided);
    }

    /// Tick until completion or `max_ticks`, whichever comes first.  Returns
    /// the number of ticks executed.
    pub fn run_until_complete<O: SimObserver>(&mut self, max_ticks: u64, observer: &mut O) -> u64 {
        let mut ran = 0;
        while ran < max_ticks {
            self.tick_with(observer);
            ran += 1;
            if self.metrics.complete {
                observer.on_complete(self.metrics.simulation_steps);
                break;
            }
        }
        ran
    }

    // ── Readout ───────────────────────────────────────────────────────────

    pub fn is_simulation_complete(&self) -> bool {
        self.metrics.complete
    }

    /// Clamp and set the activation probability in percent.
    pub fn set_active_probability(&mut self, p: i32) {
        self.active_probability = p.clamp(0, 100) as u8;
    }

    pub fn active_probability(&self) -> u8 {
        self.active_probability
    }

    /// Render code for a cell.
    pub fn get_cell(&self, x: i32, y: i32, z: i32) -> CellKind {
        self.grid.cell_view(Vec3::new(x, y, z), &self.robots)
    }

    /// `true` when the cell holds a settled robot aged into the scenery.
    pub fn is_cell_aged(&self, x: i32, y: i32, z: i32) -> bool {
        self.grid.is_cell_aged(Vec3::new(x, y, z), &self.robots)
    }

    pub fn get_grid_size_x(&self) -> usize {
        self.grid.size_x()
    }

    pub fn get_grid_size_y(&self) -> usize {
        self.grid.size_y()
    }

    pub fn get_grid_size_z(&self) -> usize {
        self.grid.size_z()
    }

    pub fn get_robot_count(&self) -> usize {
        self.robots.len()
    }

    /// Packed state-transition poll for robot `id`; −1 for unknown ids.
    pub fn pop_robot_state(&mut self, id: i32) -> i32 {
        if id < 0 {
            return -1;
        }
        let rid = RobotId(id as u32);
        match self.robots.get(rid) {
            Some(robot) => self.events.pop_event(rid, robot),
            None => -1,
        }
    }

    pub fn get_available_cells(&self) -> usize {
        self.grid.available_cells()
    }

    pub fn get_makespan(&self) -> u64 {
        self.metrics.makespan
    }

    pub fn get_t_max(&self) -> u64 {
        self.metrics.t_max
    }

    pub fn get_t_total(&self) -> u64 {
        self.metrics.t_total
    }

    pub fn get_e_max(&self) -> u64 {
        self.metrics.e_max
    }

    pub fn get_e_total(&self) -> u64 {
        self.metrics.e_total
    }

    pub fn get_simulation_steps(&self) -> u64 {
        self.metrics.simulation_steps
    }

    // ── Catalog read-out ──────────────────────────────────────────────────

    pub fn get_map_count(&self) -> usize {
        catalog::map_count()
    }

    pub fn get_map_size_x(&self, i: usize) -> usize {
        catalog::entry(i).map_or(0, |m| m.size_x)
    }

    pub fn get_map_size_y(&self, i: usize) -> usize {
        catalog::entry(i).map_or(0, |m| m.size_y)
    }

    pub fn get_map_size_z(&self, i: usize) -> usize {
        catalog::entry(i).map_or(0, |m| m.size_z)
    }

    pub fn get_map_name_length(&self, i: usize) -> usize {
        catalog::entry(i).map_or(0, |m| m.name_len())
    }

    pub fn get_map_name_char(&self, i: usize, j: usize) -> u8 {
        catalog::entry(i).map_or(0, |m| m.name_byte(j))
    }

    // ── Structured read access (visualizers, harnesses, tests) ────────────

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn robots(&self) -> &RobotArena {
        &self.robots
    }

    pub fn robot(&self, id: RobotId) -> Option<&ud_robot::Robot> {
        self.robots.get(id)
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
