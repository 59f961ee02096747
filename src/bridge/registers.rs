//! Renderer state registers
//!
//! The external renderer consumes a tiny amount of per-frame state from the
//! bridge: a set of transform slots and the world-offset cell. These are
//! single-writer registers overwritten every frame; nothing here appends or
//! accumulates.

use bytemuck::{Pod, Zeroable};

use crate::math::cell::CellCoord;

/// Number of transform slots the register file carries
pub const TRANSFORM_SLOTS: usize = 4;

/// Slot holding the view matrix
pub const VIEW_SLOT: usize = 0;

/// State-setting API of the external renderer.
pub trait RenderBridge {
    /// Re-base the renderer's coordinate space to the given streaming cell.
    fn notify_world_offset(&mut self, cell_x: i32, cell_z: i32);

    /// Overwrite a transform slot with a column-major matrix.
    fn push_transform(&mut self, slot: usize, matrix: [f32; 16]);

    /// Drop all streamed geometry state. Invoked on world switch; anything
    /// uploaded for the previous world is stale afterwards.
    fn clear_streamed_regions(&mut self);
}

/// One transform register, laid out for direct GPU upload.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct TransformSlot {
    /// Column-major 4x4 matrix
    pub matrix: [f32; 16],
}

impl TransformSlot {
    /// Identity register value
    pub fn identity() -> Self {
        let mut matrix = [0.0; 16];
        matrix[0] = 1.0;
        matrix[5] = 1.0;
        matrix[10] = 1.0;
        matrix[15] = 1.0;
        Self { matrix }
    }

    /// Raw bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// In-process register file implementing [`RenderBridge`].
///
/// Process-lifetime service object; passed by reference into the frame
/// orchestrator. Reset only on explicit world switch.
#[derive(Debug)]
pub struct BridgeRegisters {
    slots: [TransformSlot; TRANSFORM_SLOTS],
    world_offset: Option<CellCoord>,
}

impl BridgeRegisters {
    /// Create a register file with identity transforms and no offset
    pub fn new() -> Self {
        Self {
            slots: [TransformSlot::identity(); TRANSFORM_SLOTS],
            world_offset: None,
        }
    }

    /// Current value of a transform slot
    pub fn transform(&self, slot: usize) -> Option<&TransformSlot> {
        self.slots.get(slot)
    }

    /// Current world-offset cell, if one has been pushed since the last
    /// world switch
    pub fn world_offset(&self) -> Option<CellCoord> {
        self.world_offset
    }
}

impl Default for BridgeRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBridge for BridgeRegisters {
    fn notify_world_offset(&mut self, cell_x: i32, cell_z: i32) {
        self.world_offset = Some(CellCoord::new(cell_x, cell_z));
    }

    fn push_transform(&mut self, slot: usize, matrix: [f32; 16]) {
        match self.slots.get_mut(slot) {
            Some(s) => s.matrix = matrix,
            // Register semantics: an out-of-range write is dropped, not an error
            None => log::warn!("push_transform: slot {} out of range, dropped", slot),
        }
    }

    fn clear_streamed_regions(&mut self) {
        log::debug!("clearing streamed region state");
        self.world_offset = None;
    }
}
