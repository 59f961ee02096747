//! Core type aliases and re-exports

pub use glam::{
    Vec3, Vec4,
    DVec3,
    Mat4,
};

/// Standard Result type for the bridge
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
