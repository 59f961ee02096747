//! Framelink - a frame-level bridge between a host voxel engine and an external renderer

pub mod core;
pub mod math;
pub mod host;
pub mod bridge;
pub mod frame;
