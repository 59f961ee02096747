//! Frame intercept hook and legacy phase suppression
//!
//! [`BridgedFrameRenderer`] is the implementation of the host's per-frame
//! render surface that the host is configured to invoke instead of its
//! default path. One call does the host's streaming bookkeeping, preserves
//! entity dispatch side effects, pushes view state to the external
//! renderer, and tells the host to skip its own draw.

use crate::bridge::registers::{RenderBridge, VIEW_SLOT};
use crate::core::config::{BridgeConfig, CameraCalibration};
use crate::core::types::{DVec3, Mat4, Result};
use crate::frame::context::FrameContext;
use crate::frame::transforms::TransformStack;
use crate::host::geometry::NullVertexSink;
use crate::host::world::SceneHost;
use crate::math::cell::CellCoord;
use crate::math::view::{to_column_major, view_transform, view_translation};

/// What the host should do after the hook returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum FrameOutcome {
    /// The bridge handled the frame; the host must not run its own draw.
    SkipHostDraw,
    /// Fall through to the host's default draw path.
    Continue,
}

/// The host's per-frame render surface.
///
/// The host engine calls these instead of its built-in equivalents once the
/// bridge is installed. Implementations other than [`BridgedFrameRenderer`]
/// would return [`FrameOutcome::Continue`] from `render_frame` to keep the
/// default path.
pub trait FrameRenderer<H: SceneHost> {
    /// Per-frame entry point, invoked once per rendered frame.
    fn render_frame(
        &mut self,
        ctx: FrameContext<'_, H>,
        bridge: &mut dyn RenderBridge,
    ) -> Result<FrameOutcome>;

    /// Light-sky background phase.
    fn render_sky_light(&mut self);

    /// Dark-sky background phase.
    fn render_sky_dark(&mut self);

    /// Star-field phase.
    fn render_stars(&mut self);

    /// Renderer-state resource reload trigger.
    fn reload(&mut self);

    /// Invoked when the host switches the active world.
    fn world_changed(&mut self, bridge: &mut dyn RenderBridge);
}

/// Bridged implementation: redirects the frame to the external renderer.
pub struct BridgedFrameRenderer {
    calibration: CameraCalibration,
    sink: NullVertexSink,
}

impl BridgedFrameRenderer {
    /// Create a renderer with the given camera calibration
    pub fn new(calibration: CameraCalibration) -> Self {
        Self {
            calibration,
            sink: NullVertexSink::new(),
        }
    }

    /// Create a renderer from bridge configuration
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self::new(config.calibration)
    }

    /// Total vertices the entity traversal has discarded since creation
    pub fn discarded_vertices(&self) -> u64 {
        self.sink.discarded()
    }
}

impl Default for BridgedFrameRenderer {
    fn default() -> Self {
        Self::new(CameraCalibration::default())
    }
}

impl<H: SceneHost> FrameRenderer<H> for BridgedFrameRenderer {
    fn render_frame(
        &mut self,
        mut ctx: FrameContext<'_, H>,
        bridge: &mut dyn RenderBridge,
    ) -> Result<FrameOutcome> {
        // Frustum selection comes first: streaming visibility below depends
        // on it. A captured frustum is re-homed to its capture position.
        let frustum_captured = ctx.captured_frustum.is_some();
        let frustum = match ctx.captured_frustum.as_mut() {
            Some(captured) => {
                captured.frustum.set_position(captured.position);
                captured.frustum
            }
            None => ctx.frustum,
        };

        let Some(world) = ctx.world.as_deref_mut() else {
            // No active world: nothing to stream or traverse, but the
            // renderer still gets a sane view register. Identity rotation,
            // biased translation.
            let view = Mat4::from_translation(view_translation(
                ctx.camera.position,
                &self.calibration,
            ));
            bridge.push_transform(VIEW_SLOT, to_column_major(&view));
            return Ok(FrameOutcome::SkipHostDraw);
        };

        // Queued streaming mutations must land before visibility setup so
        // geometry that became available this frame is visible this frame.
        world.run_queued_updates()?;

        let spectator = ctx.player.map(|p| p.spectator).unwrap_or(false);
        world.setup_terrain(&ctx.camera, &frustum, frustum_captured, spectator)?;
        world.update_streamed_chunks(&ctx.camera)?;

        // Re-base the renderer to the controlled entity's streaming cell.
        // Before spawn there is no cell to re-base to and the translation
        // falls back to the neutral origin.
        let translation_pos = match ctx.player {
            Some(player) => {
                let cell = CellCoord::from_world_pos(player.position);
                bridge.notify_world_offset(cell.x, cell.z);
                ctx.camera.position
            }
            None => DVec3::ZERO,
        };

        let view = view_transform(
            translation_pos,
            ctx.camera.pitch,
            ctx.camera.yaw,
            &self.calibration,
        );

        // Entity traversal: invoke every live entity's render entry once
        // with the null sink, preserving dispatch side effects while the
        // geometry is discarded.
        world.prepare_entity_dispatch(&ctx.camera)?;
        let mut transforms = TransformStack::new();
        let snapshots = world.entity_snapshots();
        for snapshot in &snapshots {
            world.dispatch_entity(
                snapshot,
                ctx.camera.position,
                ctx.tick_delta,
                &mut transforms,
                &mut self.sink,
            )?;
        }
        log::trace!(
            "frame: {} entities traversed, {} vertices discarded total",
            snapshots.len(),
            self.sink.discarded()
        );

        bridge.push_transform(VIEW_SLOT, to_column_major(&view));

        Ok(FrameOutcome::SkipHostDraw)
    }

    // The sky, star, and reload phases belong to the external renderer now.
    // These overrides are unconditional no-ops.

    fn render_sky_light(&mut self) {}

    fn render_sky_dark(&mut self) {}

    fn render_stars(&mut self) {}

    fn reload(&mut self) {}

    fn world_changed(&mut self, bridge: &mut dyn RenderBridge) {
        log::info!("world changed, dropping streamed regions");
        bridge.clear_streamed_regions();
    }
}
