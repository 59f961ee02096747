//! Host world capability trait

use crate::core::types::{DVec3, Result};
use crate::host::camera::CameraState;
use crate::host::entity::EntitySnapshot;
use crate::host::geometry::VertexSink;
use crate::frame::transforms::TransformStack;
use crate::math::frustum::Frustum;

/// The host-engine capabilities the bridge consumes each frame.
///
/// The bridge borrows an implementation for the duration of one frame and
/// retains nothing. Streaming and dispatch methods are fallible: a fault in
/// the host propagates out of the frame hook uncaught, since the bridge has
/// no recovery of its own.
pub trait SceneHost {
    /// Apply queued streaming mutations. Must run before visibility setup
    /// so geometry that became available this frame is visible this frame.
    fn run_queued_updates(&mut self) -> Result<()>;

    /// Terrain and visibility setup for the frame.
    fn setup_terrain(
        &mut self,
        camera: &CameraState,
        frustum: &Frustum,
        frustum_captured: bool,
        spectator: bool,
    ) -> Result<()>;

    /// Advance streamed-chunk state toward the camera.
    fn update_streamed_chunks(&mut self, camera: &CameraState) -> Result<()>;

    /// Reconfigure the host's entity render dispatcher for this frame's
    /// camera. Runs once, before the traversal pass.
    fn prepare_entity_dispatch(&mut self, camera: &CameraState) -> Result<()>;

    /// Snapshot the live entity set, in host iteration order.
    fn entity_snapshots(&self) -> Vec<EntitySnapshot>;

    /// Invoke the host's per-entity render entry point. All geometry goes
    /// to `sink`; entity-side state transitions (animation timers, render
    /// caches) are the point of the call.
    fn dispatch_entity(
        &mut self,
        entity: &EntitySnapshot,
        camera_pos: DVec3,
        tick_delta: f32,
        transforms: &mut TransformStack,
        sink: &mut dyn VertexSink,
    ) -> Result<()>;
}
