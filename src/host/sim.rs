//! In-memory host for demos and integration tests
//!
//! A deliberately small stand-in for the real engine: a streamed-cell set
//! fed by queued updates, and a handful of entities whose render dispatch
//! advances an animation tick. Enough behavior to exercise the full frame
//! hook without a real scene graph behind it.

use std::collections::{HashMap, HashSet};

use crate::core::types::{DVec3, Mat4, Result, Vec3};
use crate::frame::transforms::TransformStack;
use crate::host::camera::CameraState;
use crate::host::entity::{EntityId, EntitySnapshot};
use crate::host::geometry::VertexSink;
use crate::host::world::SceneHost;
use crate::math::cell::{CellCoord, CELL_SIZE};
use crate::math::frustum::Frustum;

/// Streaming radius in cells around the camera
const STREAM_RADIUS: i32 = 4;

struct SimEntity {
    position: DVec3,
    /// Frames this entity has been dispatched for; the dispatch side
    /// effect the bridge must preserve.
    render_ticks: u64,
}

/// Simulated host world
#[derive(Default)]
pub struct SimHost {
    queued: Vec<CellCoord>,
    streamed: HashSet<CellCoord>,
    visible: HashSet<CellCoord>,
    entities: HashMap<EntityId, SimEntity>,
    next_id: u64,
}

impl SimHost {
    /// Create an empty simulated world
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity at a position, returning its id
    pub fn spawn_entity(&mut self, position: DVec3) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, SimEntity { position, render_ticks: 0 });
        id
    }

    /// Queue a cell to become available on the next queued-update flush
    pub fn queue_cell(&mut self, cell: CellCoord) {
        self.queued.push(cell);
    }

    /// Number of cells currently streamed in
    pub fn streamed_count(&self) -> usize {
        self.streamed.len()
    }

    /// Number of streamed cells that passed the last visibility setup
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// How many frames the given entity has been render-dispatched
    pub fn render_ticks(&self, id: EntityId) -> Option<u64> {
        self.entities.get(&id).map(|e| e.render_ticks)
    }

    fn cell_center(cell: CellCoord) -> DVec3 {
        let half = CELL_SIZE as f64 / 2.0;
        DVec3::new(
            cell.x as f64 * CELL_SIZE as f64 + half,
            0.0,
            cell.z as f64 * CELL_SIZE as f64 + half,
        )
    }
}

impl SceneHost for SimHost {
    fn run_queued_updates(&mut self) -> Result<()> {
        for cell in self.queued.drain(..) {
            self.streamed.insert(cell);
        }
        Ok(())
    }

    fn setup_terrain(
        &mut self,
        _camera: &CameraState,
        frustum: &Frustum,
        _frustum_captured: bool,
        _spectator: bool,
    ) -> Result<()> {
        self.visible = self
            .streamed
            .iter()
            .copied()
            .filter(|&c| frustum.contains_point(Self::cell_center(c)))
            .collect();
        Ok(())
    }

    fn update_streamed_chunks(&mut self, camera: &CameraState) -> Result<()> {
        let center = CellCoord::from_world_pos(camera.position);
        for dx in -STREAM_RADIUS..=STREAM_RADIUS {
            for dz in -STREAM_RADIUS..=STREAM_RADIUS {
                self.streamed.insert(CellCoord::new(center.x + dx, center.z + dz));
            }
        }
        Ok(())
    }

    fn prepare_entity_dispatch(&mut self, _camera: &CameraState) -> Result<()> {
        Ok(())
    }

    fn entity_snapshots(&self) -> Vec<EntitySnapshot> {
        self.entities
            .iter()
            .map(|(&id, e)| EntitySnapshot { id, position: e.position })
            .collect()
    }

    fn dispatch_entity(
        &mut self,
        entity: &EntitySnapshot,
        _camera_pos: DVec3,
        _tick_delta: f32,
        transforms: &mut TransformStack,
        sink: &mut dyn VertexSink,
    ) -> Result<()> {
        if let Some(e) = self.entities.get_mut(&entity.id) {
            e.render_ticks += 1;
        }

        // A billboard quad in entity-local space, placed via the stack
        transforms.push();
        transforms.multiply(Mat4::from_translation(entity.position.as_vec3()));
        let local_to_world = *transforms.peek();
        for (dx, dy) in [(0.0f32, 0.0f32), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            let v = local_to_world.transform_point3(Vec3::new(dx, dy, 0.0));
            sink.vertex(v.x as f64, v.y as f64, v.z as f64);
            sink.color(1.0, 1.0, 1.0, 1.0);
            sink.uv(dx, dy);
            sink.normal(0.0, 0.0, 1.0);
            sink.end_vertex();
        }
        transforms.pop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::registers::{BridgeRegisters, VIEW_SLOT};
    use crate::frame::context::FrameContext;
    use crate::frame::renderer::{BridgedFrameRenderer, FrameOutcome, FrameRenderer};
    use crate::host::entity::PlayerState;

    #[test]
    fn test_queued_updates_flush_before_visibility() {
        let mut host = SimHost::new();
        host.queue_cell(CellCoord::new(100, 100));

        let mut bridge = BridgeRegisters::new();
        let mut renderer = BridgedFrameRenderer::default();

        let camera = CameraState::new(DVec3::new(8.0, 64.0, 8.0), 0.0, 0.0);
        let ctx = FrameContext::new(
            camera,
            0.0,
            Frustum::accept_all(),
            &mut host,
            Some(PlayerState { position: camera.position, spectator: false }),
        );
        let outcome = renderer.render_frame(ctx, &mut bridge).unwrap();
        assert_eq!(outcome, FrameOutcome::SkipHostDraw);

        // The queued far cell landed this frame and passed visibility
        assert!(host.streamed.contains(&CellCoord::new(100, 100)));
        assert!(host.visible.contains(&CellCoord::new(100, 100)));
        // Streaming filled the radius around the camera's cell
        let side = (2 * STREAM_RADIUS + 1) as usize;
        assert_eq!(host.streamed_count(), side * side + 1);
    }

    #[test]
    fn test_entities_tick_once_per_frame() {
        let mut host = SimHost::new();
        let a = host.spawn_entity(DVec3::new(0.0, 64.0, 0.0));
        let b = host.spawn_entity(DVec3::new(10.0, 64.0, 10.0));

        let mut bridge = BridgeRegisters::new();
        let mut renderer = BridgedFrameRenderer::default();
        let camera = CameraState::new(DVec3::new(0.0, 66.0, 5.0), 0.0, 0.0);

        for _ in 0..3 {
            let ctx = FrameContext::new(
                camera,
                0.0,
                Frustum::accept_all(),
                &mut host,
                Some(PlayerState { position: camera.position, spectator: false }),
            );
            let _ = renderer.render_frame(ctx, &mut bridge).unwrap();
        }

        assert_eq!(host.render_ticks(a), Some(3));
        assert_eq!(host.render_ticks(b), Some(3));
        // Two quads per frame, three frames, all discarded
        assert_eq!(renderer.discarded_vertices(), 2 * 4 * 3);
    }

    #[derive(Default)]
    struct CapturingSink {
        positions: Vec<(f64, f64, f64)>,
    }

    impl VertexSink for CapturingSink {
        fn vertex(&mut self, x: f64, y: f64, z: f64) {
            self.positions.push((x, y, z));
        }
        fn color(&mut self, _r: f32, _g: f32, _b: f32, _a: f32) {}
        fn uv(&mut self, _u: f32, _v: f32) {}
        fn normal(&mut self, _x: f32, _y: f32, _z: f32) {}
        fn end_vertex(&mut self) {}
    }

    #[test]
    fn test_dispatch_places_quad_via_transform_stack() {
        let mut host = SimHost::new();
        let position = DVec3::new(5.0, 64.0, -3.0);
        let id = host.spawn_entity(position);

        let mut transforms = TransformStack::new();
        let mut sink = CapturingSink::default();
        host.dispatch_entity(
            &EntitySnapshot { id, position },
            DVec3::ZERO,
            0.0,
            &mut transforms,
            &mut sink,
        )
        .unwrap();

        // First corner lands at the entity position via the stack's matrix
        assert_eq!(sink.positions[0], (5.0, 64.0, -3.0));
        assert_eq!(sink.positions.len(), 4);
        // The dispatch leaves the stack as it found it
        assert_eq!(*transforms.peek(), Mat4::IDENTITY);
    }

    #[test]
    fn test_registers_after_frame_and_world_switch() {
        let mut host = SimHost::new();
        host.spawn_entity(DVec3::new(1.0, 64.0, 1.0));

        let mut bridge = BridgeRegisters::new();
        let mut renderer = BridgedFrameRenderer::default();
        let position = DVec3::new(-20.0, 70.0, 40.0);
        let camera = CameraState::new(position, 20.0, -90.0);

        let ctx = FrameContext::new(
            camera,
            0.25,
            Frustum::accept_all(),
            &mut host,
            Some(PlayerState { position, spectator: false }),
        );
        let _ = renderer.render_frame(ctx, &mut bridge).unwrap();

        assert_eq!(bridge.world_offset(), Some(CellCoord::new(-2, 2)));
        let view = bridge.transform(VIEW_SLOT).unwrap().matrix;
        assert_ne!(view, [0.0; 16]);

        FrameRenderer::<SimHost>::world_changed(&mut renderer, &mut bridge);
        assert_eq!(bridge.world_offset(), None);
    }
}
