//! The robot record and the bounded arena that owns every robot.

use ud_core::{Neighborhood, RobotId, Vec3};

/// Settled age beyond which a robot renders as part of the wall and
/// consumers stop animating its cell.
pub const AGED_AFTER: u32 = 5;

// ── Robot ─────────────────────────────────────────────────────────────────────

/// Mutable per-robot state.
///
/// `target` is the pending destination written by the decision phase and
/// consumed by the tick's commit phase; outside a tick it always equals
/// `position`.  `last_move` is the unit vector of the most recent move into
/// a *free* cell — a push into an occupied cell leaves it untouched — and
/// stays zero until the robot has moved at all.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Robot {
    pub id:       RobotId,
    pub position: Vec3,
    pub target:   Vec3,

    /// Nominal upward axis of the world.  Fixed to +Y; kept per record for a
    /// future variant with per-robot orientation.
    pub external_axis: Vec3,

    /// Scratch: the climb candidate of the most recent decision.
    pub primary_dir:   Option<ud_core::Direction>,
    /// Scratch: the lateral choice of the most recent decision.
    pub secondary_dir: Option<ud_core::Direction>,

    pub last_move:   Vec3,
    pub sleeping:    bool,
    pub ever_moved:  bool,
    /// Decision rounds since creation.
    pub active_for:  u32,
    pub active:      bool,
    /// Ticks since settling; meaningful only while `active` is false.
    pub settled_age: u32,

    /// Scratch 3×3×3 view refreshed before each decision.
    pub obs: Neighborhood,
}

impl Robot {
    /// A freshly spawned, active robot at `position`.
    pub fn new(id: RobotId, position: Vec3) -> Self {
        Self {
            id,
            position,
            target: position,
            external_axis: ud_core::Direction::Up.vec(),
            primary_dir: None,
            secondary_dir: None,
            last_move: Vec3::ZERO,
            sleeping: false,
            ever_moved: false,
            active_for: 0,
            active: true,
            settled_age: 0,
            obs: Neighborhood::default(),
        }
    }

    /// A robot placed directly in the settled state.
    pub fn new_settled(id: RobotId, position: Vec3) -> Self {
        let mut robot = Self::new(id, position);
        robot.active = false;
        robot
    }

    /// Freeze in place.  The robot stops participating and starts aging.
    pub fn settle(&mut self) {
        self.active = false;
        self.settled_age = 0;
    }

    /// Freeze already aged — used when a wall is stamped onto an active
    /// robot's cell and the robot must render as wall at once.
    pub fn settle_aged(&mut self) {
        self.active = false;
        self.settled_age = AGED_AFTER + 1;
    }

    /// `true` once a settled robot has aged into the scenery.
    #[inline]
    pub fn is_aged(&self) -> bool {
        !self.active && self.settled_age > AGED_AFTER
    }
}

// ── RobotArena ────────────────────────────────────────────────────────────────

/// Owns every robot ever spawned, in id order.
///
/// Robots are never removed; the arena is bounded by the world volume
/// (`capacity = size_x * size_y * size_z`), so the memory footprint is fixed
/// at init time.  Appends past the cap are suppressed.
#[derive(Debug, Default)]
pub struct RobotArena {
    robots:   Vec<Robot>,
    capacity: usize,
}

impl RobotArena {
    pub fn new(capacity: usize) -> Self {
        Self { robots: Vec::with_capacity(capacity), capacity }
    }

    /// Drop every robot and adopt a new capacity (world re-init).
    pub fn reset(&mut self, capacity: usize) {
        self.robots.clear();
        self.capacity = capacity;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.robots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a robot at `position`.  Returns its id, or `None` when the
    /// arena is full (the append is suppressed, per the error policy).
    pub fn spawn(&mut self, position: Vec3, active: bool) -> Option<RobotId> {
        if self.robots.len() >= self.capacity {
            return None;
        }
        let id = RobotId(self.robots.len() as u32);
        self.robots.push(if active {
            Robot::new(id, position)
        } else {
            Robot::new_settled(id, position)
        });
        Some(id)
    }

    #[inline]
    pub fn get(&self, id: RobotId) -> Option<&Robot> {
        self.robots.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: RobotId) -> Option<&mut Robot> {
        self.robots.get_mut(id.index())
    }

    /// Iterate robots in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Robot> {
        self.robots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Robot> {
        self.robots.iter_mut()
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = RobotId> + '_ {
        (0..self.robots.len() as u32).map(RobotId)
    }
}

impl std::ops::Index<RobotId> for RobotArena {
    type Output = Robot;

    /// Direct access for ids the caller knows are live (e.g. the tick loop's
    /// own iteration).  Use [`RobotArena::get`] for sentinel lookups.
    #[inline]
    fn index(&self, id: RobotId) -> &Robot {
        &self.robots[id.index()]
    }
}

impl std::ops::IndexMut<RobotId> for RobotArena {
    #[inline]
    fn index_mut(&mut self, id: RobotId) -> &mut Robot {
        &mut self.robots[id.index()]
    }
}
