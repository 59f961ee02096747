//! Streaming-cell coordinates
//!
//! The external renderer re-bases uploaded geometry against the cell the
//! camera currently occupies, so the cell derivation here must agree with
//! the host's own streaming grid exactly.

use crate::core::types::DVec3;

/// Size of a streaming cell in world units along X and Z
pub const CELL_SIZE: u32 = 16;

/// Integer coordinate identifying a streaming cell in the world grid.
/// Cells partition the XZ plane; Y is not cell-addressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub x: i32,
    pub z: i32,
}

impl CellCoord {
    /// Create a new cell coordinate
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Convert a world position to its containing cell.
    ///
    /// Uses floor semantics, not truncation: position -1.5 is in cell -1,
    /// not cell 0. Truncation toward zero would desync the renderer's
    /// re-basing from the host's streamed geometry on the negative axes.
    pub fn from_world_pos(pos: DVec3) -> Self {
        Self {
            x: (pos.x / CELL_SIZE as f64).floor() as i32,
            z: (pos.z / CELL_SIZE as f64).floor() as i32,
        }
    }
}
