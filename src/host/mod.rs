//! Host-engine facing types and capability traits

pub mod camera;
pub mod entity;
pub mod geometry;
pub mod world;
pub mod sim;

pub use camera::CameraState;
pub use entity::{EntityId, EntitySnapshot, PlayerState};
pub use geometry::{NullVertexSink, VertexSink};
pub use world::SceneHost;
