//! The world grid: walkability, door distance field, robot back-pointers.

use std::collections::VecDeque;

use ud_core::{CellKind, CellState, DIRECTIONS, MAX_DIM, Neighborhood, RobotId, Vec3};
use ud_robot::RobotArena;

/// Distance value for cells the door BFS never reached.
pub const DISTANCE_UNREACHED: u32 = u32::MAX;

/// The mutable 3D world.
///
/// Out-of-range coordinates are tolerated on every query (they read as wall)
/// and ignored on every mutation, per the engine's recover-locally policy.
#[derive(Debug)]
pub struct WorldGrid {
    size_x: usize,
    size_y: usize,
    size_z: usize,

    walkable: Vec<bool>,
    distance: Vec<u32>,
    robot_at: Vec<RobotId>,

    door:            Vec3,
    available_cells: usize,
}

impl WorldGrid {
    /// An all-wall grid of the given extents, each clamped to [`MAX_DIM`].
    /// The door starts at the origin until a map load or retarget moves it.
    pub fn new(size_x: usize, size_y: usize, size_z: usize) -> Self {
        let (size_x, size_y, size_z) =
            (size_x.min(MAX_DIM), size_y.min(MAX_DIM), size_z.min(MAX_DIM));
        let cells = size_x * size_y * size_z;
        Self {
            size_x,
            size_y,
            size_z,
            walkable: vec![false; cells],
            distance: vec![DISTANCE_UNREACHED; cells],
            robot_at: vec![RobotId::INVALID; cells],
            door: Vec3::ZERO,
            available_cells: 0,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn size_x(&self) -> usize {
        self.size_x
    }

    #[inline]
    pub fn size_y(&self) -> usize {
        self.size_y
    }

    #[inline]
    pub fn size_z(&self) -> usize {
        self.size_z
    }

    /// Total cell count — also the robot-arena capacity for this world.
    #[inline]
    pub fn volume(&self) -> usize {
        self.size_x * self.size_y * self.size_z
    }

    #[inline]
    pub fn in_bounds(&self, p: Vec3) -> bool {
        (0..self.size_x as i32).contains(&p.x)
            && (0..self.size_y as i32).contains(&p.y)
            && (0..self.size_z as i32).contains(&p.z)
    }

    /// Flat index of an in-bounds coordinate.
    #[inline]
    fn idx(&self, p: Vec3) -> usize {
        (p.x as usize * self.size_y + p.y as usize) * self.size_z + p.z as usize
    }

    // ── Walkability ───────────────────────────────────────────────────────

    #[inline]
    pub fn is_walkable(&self, p: Vec3) -> bool {
        self.in_bounds(p) && self.walkable[self.idx(p)]
    }

    /// Set a cell's walkability, keeping `available_cells` in step.
    /// Out-of-bounds: no-op.
    pub fn set_walkable(&mut self, p: Vec3, walkable: bool) {
        if !self.in_bounds(p) {
            return;
        }
        let idx = self.idx(p);
        if self.walkable[idx] != walkable {
            self.walkable[idx] = walkable;
            if walkable {
                self.available_cells += 1;
            } else {
                self.available_cells -= 1;
            }
        }
    }

    /// Count of walkable cells in the current map.
    #[inline]
    pub fn available_cells(&self) -> usize {
        self.available_cells
    }

    // ── Door ──────────────────────────────────────────────────────────────

    #[inline]
    pub fn door(&self) -> Vec3 {
        self.door
    }

    /// Retarget the door.  The caller is responsible for bounds checks and
    /// for re-running the distance field afterwards.
    #[inline]
    pub fn set_door(&mut self, p: Vec3) {
        self.door = p;
    }

    // ── Distance field ────────────────────────────────────────────────────

    /// BFS hop count from the door, or [`DISTANCE_UNREACHED`].
    #[inline]
    pub fn distance_at(&self, p: Vec3) -> u32 {
        if self.in_bounds(p) { self.distance[self.idx(p)] } else { DISTANCE_UNREACHED }
    }

    /// Recompute the 6-connected BFS distance field from the door over
    /// walkable cells.  Unreachable cells keep [`DISTANCE_UNREACHED`].
    pub fn rebuild_distance_field(&mut self) {
        self.distance.fill(DISTANCE_UNREACHED);
        if !self.is_walkable(self.door) {
            return;
        }

        // Every walkable cell enters the queue at most once, so this never
        // grows past `available_cells`.
        let mut queue = VecDeque::with_capacity(self.available_cells);
        let door_idx = self.idx(self.door);
        self.distance[door_idx] = 0;
        queue.push_back(self.door);

        while let Some(p) = queue.pop_front() {
            let next = self.distance[self.idx(p)] + 1;
            for d in DIRECTIONS {
                let n = p + d.vec();
                if self.is_walkable(n) {
                    let n_idx = self.idx(n);
                    if self.distance[n_idx] == DISTANCE_UNREACHED {
                        self.distance[n_idx] = next;
                        queue.push_back(n);
                    }
                }
            }
        }
    }

    // ── Robot field ───────────────────────────────────────────────────────

    /// Robot occupying `p`, or `RobotId::INVALID`.
    #[inline]
    pub fn robot_id_at(&self, p: Vec3) -> RobotId {
        if self.in_bounds(p) { self.robot_at[self.idx(p)] } else { RobotId::INVALID }
    }

    /// Point a cell at a robot immediately (external placement).  Same rule
    /// as the rebuild: only an empty, walkable cell is claimed.
    pub fn claim_cell(&mut self, p: Vec3, id: RobotId) {
        if !self.in_bounds(p) {
            return;
        }
        let idx = self.idx(p);
        if self.walkable[idx] && self.robot_at[idx] == RobotId::INVALID {
            self.robot_at[idx] = id;
        }
    }

    /// Clear a cell's back-pointer (forced settlement under a new wall).
    pub fn release_cell(&mut self, p: Vec3) {
        if self.in_bounds(p) {
            let idx = self.idx(p);
            self.robot_at[idx] = RobotId::INVALID;
        }
    }

    /// Rebuild every back-pointer from the arena, ascending id.
    ///
    /// Co-located robots resolve earliest-id-wins: the first claimant keeps
    /// the cell, later ones get no back-pointer and are thereby demoted for
    /// the next observation round.
    pub fn rebuild_robot_field(&mut self, robots: &RobotArena) {
        self.robot_at.fill(RobotId::INVALID);
        for robot in robots.iter() {
            let p = robot.position;
            if !self.in_bounds(p) {
                continue;
            }
            let idx = self.idx(p);
            if self.walkable[idx] && self.robot_at[idx] == RobotId::INVALID {
                self.robot_at[idx] = robot.id;
            }
        }
    }

    // ── Cell classification ───────────────────────────────────────────────

    /// Render code for external consumers.  The door always reads as `Door`,
    /// robot presence comes next, and bare walkability last.
    pub fn cell_view(&self, p: Vec3, robots: &RobotArena) -> CellKind {
        if !self.in_bounds(p) {
            return CellKind::Wall;
        }
        if p == self.door {
            return CellKind::Door;
        }
        if let Some(robot) = robots.get(self.robot_at[self.idx(p)]) {
            if !robot.active {
                return CellKind::SettledRobot;
            }
            return if robot.sleeping { CellKind::SleepingRobot } else { CellKind::ActiveRobot };
        }
        if self.walkable[self.idx(p)] { CellKind::Empty } else { CellKind::Wall }
    }

    /// `true` when `p` holds a settled robot old enough that consumers should
    /// stop animating the cell.
    pub fn is_cell_aged(&self, p: Vec3, robots: &RobotArena) -> bool {
        robots.get(self.robot_id_at(p)).is_some_and(|r| r.is_aged())
    }

    /// Observation code: what a robot sees in this cell.  Anything outside
    /// the volume, non-walkable, or holding a settled robot is a wall.
    pub fn cell_state(&self, p: Vec3, robots: &RobotArena) -> CellState {
        if !self.is_walkable(p) {
            return CellState::Wall;
        }
        match robots.get(self.robot_at[self.idx(p)]) {
            Some(robot) if robot.active => CellState::Occupied,
            Some(_) => CellState::Wall,
            None => CellState::Free,
        }
    }

    /// Assemble the 3×3×3 observation around `center`, ordered x-outermost,
    /// z-innermost so sequential slots match the neighborhood index layout.
    pub fn observe(&self, center: Vec3, robots: &RobotArena) -> Neighborhood {
        let mut obs = Neighborhood::filled(CellState::Wall);
        let mut slot = 0;
        for i in (center.x - 1)..=(center.x + 1) {
            for j in (center.y - 1)..=(center.y + 1) {
                for k in (center.z - 1)..=(center.z + 1) {
                    obs.set(slot, self.cell_state(Vec3::new(i, j, k), robots));
                    slot += 1;
                }
            }
        }
        obs
    }
}
