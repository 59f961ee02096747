//! Positionable view frustum
//!
//! The host hands the bridge either its live frustum or a captured (frozen)
//! one. A captured frustum keeps the plane set from the moment of capture
//! but must be re-homed to the captured position before visibility setup.

use crate::core::types::{DVec3, Mat4, Vec3, Vec4};

/// View frustum: six planes in `(normal, distance)` form packed as Vec4,
/// plus the world-space position the planes are tested relative to.
#[derive(Clone, Copy, Debug)]
pub struct Frustum {
    /// Near, far, left, right, top, bottom.
    planes: [Vec4; 6],
    position: DVec3,
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix, anchored at
    /// the given world position.
    pub fn from_view_projection(vp: &Mat4, position: DVec3) -> Self {
        let m = vp.to_cols_array_2d();
        let row = |i: usize| Vec4::new(m[0][i], m[1][i], m[2][i], m[3][i]);
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        let planes = [
            Self::normalize_plane(r3 + r2), // near
            Self::normalize_plane(r3 - r2), // far
            Self::normalize_plane(r3 + r0), // left
            Self::normalize_plane(r3 - r0), // right
            Self::normalize_plane(r3 - r1), // top
            Self::normalize_plane(r3 + r1), // bottom
        ];

        Self { planes, position }
    }

    /// A frustum that accepts every point, anchored at the origin.
    /// Useful before the host has produced a real projection.
    pub fn accept_all() -> Self {
        // Planes with zero normal and positive distance pass every test
        Self {
            planes: [Vec4::new(0.0, 0.0, 0.0, 1.0); 6],
            position: DVec3::ZERO,
        }
    }

    fn normalize_plane(plane: Vec4) -> Vec4 {
        let len = Vec3::new(plane.x, plane.y, plane.z).length();
        if len > 0.0 { plane / len } else { plane }
    }

    /// World-space position the frustum is tested from
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Re-home the frustum to a new world position without touching the
    /// plane set.
    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    /// Check whether a world-space point is inside the frustum
    pub fn contains_point(&self, point: DVec3) -> bool {
        let local = (point - self.position).as_vec3();
        self.planes
            .iter()
            .all(|p| p.x * local.x + p.y * local.y + p.z * local.z + p.w >= 0.0)
    }
}
