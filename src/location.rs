use crate::constants::*;
use std::fmt;

/// A tile coordinate, packed the same way the host packs building positions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct TilePos {
    packed: i32,
}

impl TilePos {
    pub fn new(x: i32, y: i32) -> Self {
        TilePos {
            packed: (x << 16) | (y & 0xFFFF),
        }
    }

    #[inline]
    pub fn x(self) -> i32 {
        self.packed >> 16
    }

    #[inline]
    pub fn y(self) -> i32 {
        (self.packed & 0xFFFF) as i16 as i32
    }

    #[inline]
    pub fn packed_repr(self) -> i32 {
        self.packed
    }

    #[inline]
    pub fn from_packed(packed: i32) -> Self {
        TilePos { packed }
    }

    /// Tile under the given world coordinate, clamped into a `width` x `height` grid.
    pub fn from_world_clamped(x: f32, y: f32, width: i32, height: i32) -> Self {
        let tx = ((x / TILE_SIZE) as i32).clamp(0, (width - 1).max(0));
        let ty = ((y / TILE_SIZE) as i32).clamp(0, (height - 1).max(0));
        TilePos::new(tx, ty)
    }

    /// World coordinate of a block of the given offset placed on this tile.
    pub fn world(self, offset: f32) -> (f32, f32) {
        (
            self.x() as f32 * TILE_SIZE + offset,
            self.y() as f32 * TILE_SIZE + offset,
        )
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x(), self.y())
    }
}

/// Offset from a tile corner to the center of a block `size` tiles wide.
pub fn block_offset(size: u32) -> f32 {
    ((size + 1) % 2) as f32 * TILE_SIZE / 2.0
}

/// Euclidean distance check without the square root.
#[inline]
pub fn within(x1: f32, y1: f32, x2: f32, y2: f32, dst: f32) -> bool {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy <= dst * dst
}
