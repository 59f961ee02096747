//! Per-frame context handed to the frame hook

use crate::core::types::DVec3;
use crate::host::camera::CameraState;
use crate::host::entity::PlayerState;
use crate::host::world::SceneHost;
use crate::math::frustum::Frustum;

/// A frustum frozen at capture time, plus the position it was captured at.
/// Must be re-homed to that position before it is used for visibility.
#[derive(Clone, Copy, Debug)]
pub struct CapturedFrustum {
    pub frustum: Frustum,
    pub position: DVec3,
}

/// Everything the frame hook needs for one frame, assembled at hook entry
/// and dropped at hook exit. The world and player references may be absent
/// early in the host's lifecycle (before spawn, between worlds).
pub struct FrameContext<'a, H: SceneHost> {
    /// Camera state for this frame
    pub camera: CameraState,
    /// Fraction of the current tick that has elapsed
    pub tick_delta: f32,
    /// The host's live frustum
    pub frustum: Frustum,
    /// Captured frustum, if frustum capture is active
    pub captured_frustum: Option<CapturedFrustum>,
    /// The active world, if any
    pub world: Option<&'a mut H>,
    /// The controlled entity, if spawned
    pub player: Option<PlayerState>,
}

impl<'a, H: SceneHost> FrameContext<'a, H> {
    /// Context with a live frustum and a present world
    pub fn new(
        camera: CameraState,
        tick_delta: f32,
        frustum: Frustum,
        world: &'a mut H,
        player: Option<PlayerState>,
    ) -> Self {
        Self {
            camera,
            tick_delta,
            frustum,
            captured_frustum: None,
            world: Some(world),
            player,
        }
    }
}
