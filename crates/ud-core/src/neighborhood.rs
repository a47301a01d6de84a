//! The 3×3×3 observation buffer and local reachability.
//!
//! # Index layout
//!
//! A relative displacement `(dx, dy, dz) ∈ {-1, 0, 1}³` maps to the linear
//! index `(dx+1)*9 + (dy+1)*3 + (dz+1)`; the center cell is index 13.  The
//! buffer is filled by the ordered triple loop x-outermost, z-innermost, so
//! sequential writes land exactly on this layout.
//!
//! `Neighborhood` is a plain value type: it is copied into a robot's scratch
//! buffer and its derived variants live on the stack.  No heap allocation
//! happens anywhere on the decision path.

use crate::cell::CellState;
use crate::vec3::Direction;

/// Number of cells in a 3×3×3 neighborhood.
pub const CELLS: usize = 27;

/// A robot's local view: one [`CellState`] per cell of the surrounding
/// 3×3×3 block, including the robot's own cell at the center.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighborhood {
    cells: [CellState; CELLS],
}

impl Neighborhood {
    /// Linear index of the center cell.
    pub const CENTER: usize = 13;

    /// A buffer with every cell set to `state`.
    #[inline]
    pub const fn filled(state: CellState) -> Self {
        Self { cells: [state; CELLS] }
    }

    /// Linear index of a relative displacement.  Each component must be in
    /// `{-1, 0, 1}`.
    #[inline]
    pub fn index_of(dx: i32, dy: i32, dz: i32) -> usize {
        debug_assert!((-1..=1).contains(&dx) && (-1..=1).contains(&dy) && (-1..=1).contains(&dz));
        ((dx + 1) * 9 + (dy + 1) * 3 + (dz + 1)) as usize
    }

    #[inline]
    pub fn at(&self, index: usize) -> CellState {
        self.cells[index]
    }

    #[inline]
    pub fn set(&mut self, index: usize, state: CellState) {
        self.cells[index] = state;
    }

    /// Cell state at a relative displacement.
    #[inline]
    pub fn rel(&self, dx: i32, dy: i32, dz: i32) -> CellState {
        self.cells[Self::index_of(dx, dy, dz)]
    }

    #[inline]
    pub fn set_rel(&mut self, dx: i32, dy: i32, dz: i32, state: CellState) {
        self.cells[Self::index_of(dx, dy, dz)] = state;
    }

    /// Cell state one step from the center in direction `d`.
    #[inline]
    pub fn dir(&self, d: Direction) -> CellState {
        let v = d.vec();
        self.rel(v.x, v.y, v.z)
    }

    #[inline]
    pub fn set_dir(&mut self, d: Direction, state: CellState) {
        let v = d.vec();
        self.set_rel(v.x, v.y, v.z, state);
    }

    /// A copy with the center cell forced to `Wall` — the "what if I settled
    /// here" view used by the settlement test.
    pub fn with_center_walled(&self) -> Self {
        let mut out = *self;
        out.cells[Self::CENTER] = CellState::Wall;
        out
    }

    /// A copy with the entire top (`dy = +1`) and bottom (`dy = -1`) layers
    /// forced to `Wall` — the "both horizontal lids closed" view.  Guards the
    /// settlement test against connectivity that only survives through a
    /// vertical corridor above or below.
    pub fn with_lids_closed(&self) -> Self {
        let mut out = *self;
        for dx in -1..=1 {
            for dz in -1..=1 {
                out.set_rel(dx, 1, dz, CellState::Wall);
                out.set_rel(dx, -1, dz, CellState::Wall);
            }
        }
        out
    }

    /// Mutual reachability of two cells through non-`Wall` 6-connected cells
    /// of this buffer.
    ///
    /// `false` whenever either endpoint is a `Wall`; a non-`Wall` cell is
    /// trivially reachable from itself.  The expansion is a fixed point over
    /// at most 27 cells and never touches the world.
    pub fn reachable(&self, from: usize, to: usize) -> bool {
        if self.cells[from].is_wall() || self.cells[to].is_wall() {
            return false;
        }

        let mut reach = [false; CELLS];
        reach[from] = true;
        loop {
            let mut grew = false;
            for i in 0..CELLS {
                if !reach[i] {
                    continue;
                }
                let (x, y, z) = ((i / 9) as i32, ((i / 3) % 3) as i32, (i % 3) as i32);
                for (ox, oy, oz) in [(1, 0, 0), (-1, 0, 0), (0, 1, 0), (0, -1, 0), (0, 0, 1), (0, 0, -1)] {
                    let (nx, ny, nz) = (x + ox, y + oy, z + oz);
                    if !(0..3).contains(&nx) || !(0..3).contains(&ny) || !(0..3).contains(&nz) {
                        continue;
                    }
                    let n = (nx * 9 + ny * 3 + nz) as usize;
                    if !reach[n] && !self.cells[n].is_wall() {
                        reach[n] = true;
                        grew = true;
                    }
                }
            }
            if !grew {
                break;
            }
        }
        reach[to]
    }
}

impl Default for Neighborhood {
    /// An all-`Wall` buffer — what a robot sees before its first observation.
    fn default() -> Self {
        Self::filled(CellState::Wall)
    }
}
