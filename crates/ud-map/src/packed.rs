//! Packed-bitmap decoding and the external wire format.

use ud_core::{MAX_DIM, Vec3};

use crate::MapError;

/// Linear bit index of cell `(x, y, z)` in a volume of the given extents.
///
/// Cells are iterated z-outermost, y in the middle, x-innermost — the same
/// nested order the packer wrote them in.
#[inline]
pub fn cell_bit_index(x: usize, y: usize, z: usize, size_x: usize, size_y: usize) -> usize {
    (z * size_y + y) * size_x + x
}

/// Read bit `i` of a packed stream: bit `i % 8` of byte `i / 8`.
#[inline]
pub fn bit_at(bits: &[u8], i: usize) -> bool {
    (bits[i / 8] >> (i % 8)) & 1 == 1
}

/// Number of bytes needed to hold `cells` packed bits.
#[inline]
pub fn packed_len(cells: usize) -> usize {
    cells.div_ceil(8)
}

// ── PackedMap ─────────────────────────────────────────────────────────────────

/// A map parsed from the external wire format.
///
/// Layout: `[size_x, size_y, size_z, door_x, door_y, door_z, bits…]`, one
/// byte per dimension and door coordinate, followed by the packed bitmap.
/// Trailing bytes beyond the bitmap are rejected as truncation in reverse:
/// the stream must be exactly as long as the header implies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedMap {
    pub size_x: usize,
    pub size_y: usize,
    pub size_z: usize,
    pub door:   Vec3,
    pub bits:   Vec<u8>,
}

impl PackedMap {
    /// Parse and validate a wire-format map.
    pub fn from_bytes(data: &[u8]) -> Result<PackedMap, MapError> {
        if data.len() < 6 {
            return Err(MapError::Truncated { expected: 6, got: data.len() });
        }

        let (size_x, size_y, size_z) =
            (data[0] as usize, data[1] as usize, data[2] as usize);
        for size in [size_x, size_y, size_z] {
            if size == 0 || size > MAX_DIM {
                return Err(MapError::BadDimension { got: size, max: MAX_DIM });
            }
        }

        let door = Vec3::new(i32::from(data[3]), i32::from(data[4]), i32::from(data[5]));
        if door.x as usize >= size_x || door.y as usize >= size_y || door.z as usize >= size_z {
            return Err(MapError::DoorOutsideVolume { door, size_x, size_y, size_z });
        }

        let expected = 6 + packed_len(size_x * size_y * size_z);
        if data.len() != expected {
            return Err(MapError::Truncated { expected, got: data.len() });
        }
        let bits = data[6..].to_vec();

        let door_bit = cell_bit_index(
            door.x as usize, door.y as usize, door.z as usize, size_x, size_y,
        );
        if !bit_at(&bits, door_bit) {
            return Err(MapError::DoorOnWall { door });
        }

        Ok(PackedMap { size_x, size_y, size_z, door, bits })
    }

    /// Walkability of cell `(x, y, z)`.
    #[inline]
    pub fn is_walkable(&self, x: usize, y: usize, z: usize) -> bool {
        bit_at(&self.bits, cell_bit_index(x, y, z, self.size_x, self.size_y))
    }
}
