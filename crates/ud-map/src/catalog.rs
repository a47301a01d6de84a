//! The baked-in map catalog.
//!
//! Seven maps covering the engine's regimes: degenerate single cell, pure
//! corridor, vertical shaft, open volume, flat rooms with obstacles, and a
//! multi-storey hall.  Bitmaps were packed offline in the canonical order
//! (z-outermost, x-innermost, LSB-first within each byte).

use ud_core::Vec3;

use crate::packed::{bit_at, cell_bit_index};

/// One immutable catalog entry.
#[derive(Clone, Copy, Debug)]
pub struct MapEntry {
    pub name:   &'static str,
    pub size_x: usize,
    pub size_y: usize,
    pub size_z: usize,
    pub door:   Vec3,
    pub bits:   &'static [u8],
}

impl MapEntry {
    /// Walkability of cell `(x, y, z)`.
    #[inline]
    pub fn is_walkable(&self, x: usize, y: usize, z: usize) -> bool {
        bit_at(self.bits, cell_bit_index(x, y, z, self.size_x, self.size_y))
    }

    /// Number of walkable cells.
    pub fn walkable_cells(&self) -> usize {
        let cells = self.size_x * self.size_y * self.size_z;
        (0..cells).filter(|&i| bit_at(self.bits, i)).count()
    }

    /// Display-name length in bytes, for the flat catalog read-out.
    #[inline]
    pub fn name_len(&self) -> usize {
        self.name.len()
    }

    /// Byte `j` of the display name; 0 past the end.
    #[inline]
    pub fn name_byte(&self, j: usize) -> u8 {
        self.name.as_bytes().get(j).copied().unwrap_or(0)
    }
}

/// All baked-in maps, in menu order.
pub const CATALOG: &[MapEntry] = &[
    MapEntry {
        name:   "Single Cell",
        size_x: 1,
        size_y: 1,
        size_z: 1,
        door:   Vec3::new(0, 0, 0),
        bits:   &[0x01],
    },
    MapEntry {
        name:   "Corridor",
        size_x: 1,
        size_y: 1,
        size_z: 5,
        door:   Vec3::new(0, 0, 0),
        bits:   &[0x1F],
    },
    MapEntry {
        name:   "Shaft",
        size_x: 1,
        size_y: 3,
        size_z: 1,
        door:   Vec3::new(0, 0, 0),
        bits:   &[0x07],
    },
    MapEntry {
        name:   "Open Cube",
        size_x: 3,
        size_y: 3,
        size_z: 3,
        door:   Vec3::new(1, 0, 1),
        bits:   &[0xFF, 0xFF, 0xFF, 0x07],
    },
    // 5x1x5 single-storey hall split by a 3-cell baffle growing out of the
    // z = 0 wall at x = 2.  The baffle must stay wall-attached: a
    // free-standing pillar leaves a loop the lateral sweep orbits forever.
    MapEntry {
        name:   "Baffled Hall",
        size_x: 5,
        size_y: 1,
        size_z: 5,
        door:   Vec3::new(0, 0, 0),
        bits:   &[0x7B, 0xEF, 0xFF, 0x01],
    },
    // Two 3-wide rooms joined by a 1-wide doorway at z = 3.
    MapEntry {
        name:   "Twin Chambers",
        size_x: 3,
        size_y: 1,
        size_z: 7,
        door:   Vec3::new(1, 0, 0),
        bits:   &[0xFF, 0xF5, 0x1F],
    },
    // 5x3x5 hall divided by a full-height fin at x = 2 spanning z = 0..3,
    // with the passage at z = 4.  Wall-attached for the same reason as the
    // Baffled Hall.
    MapEntry {
        name:   "Gallery",
        size_x: 5,
        size_y: 3,
        size_z: 5,
        door:   Vec3::new(2, 0, 4),
        bits:   &[0x7B, 0xEF, 0xBD, 0xF7, 0xDE, 0x7B, 0xEF, 0xFD, 0xFF, 0x07],
    },
];

/// Number of baked-in maps.
#[inline]
pub fn map_count() -> usize {
    CATALOG.len()
}

/// Catalog entry `i`, if it exists.
#[inline]
pub fn entry(i: usize) -> Option<&'static MapEntry> {
    CATALOG.get(i)
}
