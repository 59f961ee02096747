//! Host camera state

use crate::core::types::DVec3;

/// Camera state as supplied by the host engine each frame.
///
/// Position is double precision (the host addresses a large world);
/// orientation is the host's degree-valued pitch/yaw pair. Read-only to
/// the bridge.
#[derive(Clone, Copy, Debug)]
pub struct CameraState {
    /// World position
    pub position: DVec3,
    /// Pitch in degrees, positive looking down
    pub pitch: f32,
    /// Yaw in degrees
    pub yaw: f32,
}

impl CameraState {
    /// Create a new camera state
    pub fn new(position: DVec3, pitch: f32, yaw: f32) -> Self {
        Self { position, pitch, yaw }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(DVec3::ZERO, 0.0, 0.0)
    }
}
