//! Framelink demo - drives the frame bridge against a simulated host

use std::path::Path;

use framelink::bridge::{BridgeRegisters, VIEW_SLOT};
use framelink::core::config::BridgeConfig;
use framelink::core::logging;
use framelink::core::types::{DVec3, Mat4, Result, Vec3};
use framelink::frame::{BridgedFrameRenderer, FrameContext, FrameOutcome, FrameRenderer};
use framelink::host::camera::CameraState;
use framelink::host::entity::PlayerState;
use framelink::host::sim::SimHost;
use framelink::math::frustum::Frustum;

const FRAMES: u32 = 240;
const TICK_RATE: f32 = 20.0;
const FRAME_RATE: f32 = 60.0;

fn main() -> Result<()> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => BridgeConfig::load(Path::new(&path))?,
        None => BridgeConfig::default(),
    };
    log::info!(
        "bridge calibration: yaw_offset={} vertical_bias={}",
        config.calibration.yaw_offset,
        config.calibration.vertical_bias
    );

    let mut host = SimHost::new();
    let watched = host.spawn_entity(DVec3::new(4.0, 65.0, 4.0));
    host.spawn_entity(DVec3::new(-12.0, 64.0, 20.0));
    host.spawn_entity(DVec3::new(30.0, 66.0, -8.0));

    let mut bridge = BridgeRegisters::new();
    let mut renderer = BridgedFrameRenderer::from_config(&config);

    let proj = Mat4::perspective_rh(70f32.to_radians(), 16.0 / 9.0, 0.05, 512.0);

    for frame in 0..FRAMES {
        // Orbit the viewpoint around the scene center
        let angle = frame as f64 * 0.01;
        let position = DVec3::new(angle.cos() * 48.0, 72.0, angle.sin() * 48.0);
        let yaw = 90.0 - angle.to_degrees() as f32;
        let camera = CameraState::new(position, 15.0, yaw);

        let view = Mat4::look_at_rh(Vec3::ZERO, -Vec3::Z, Vec3::Y);
        let frustum = Frustum::from_view_projection(&(proj * view), position);

        let ctx = FrameContext::new(
            camera,
            (frame as f32 * FRAME_RATE.recip() * TICK_RATE).fract(),
            frustum,
            &mut host,
            Some(PlayerState { position, spectator: false }),
        );
        let outcome = renderer.render_frame(ctx, &mut bridge)?;
        debug_assert_eq!(outcome, FrameOutcome::SkipHostDraw);
    }

    log::info!(
        "{} frames: {} cells streamed ({} visible), watched entity ticked {} times, {} vertices discarded",
        FRAMES,
        host.streamed_count(),
        host.visible_count(),
        host.render_ticks(watched).unwrap_or(0),
        renderer.discarded_vertices()
    );
    if let Some(offset) = bridge.world_offset() {
        log::info!("final world offset: ({}, {})", offset.x, offset.z);
    }
    log::debug!(
        "final view register: {:?}",
        bridge.transform(VIEW_SLOT).map(|s| s.matrix)
    );

    // Simulate a world switch on the way out
    FrameRenderer::<SimHost>::world_changed(&mut renderer, &mut bridge);

    Ok(())
}
