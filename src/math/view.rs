//! View transform construction
//!
//! Builds the view matrix the external renderer consumes from host camera
//! state. The composition order is load-bearing: pitch is applied about X
//! before yaw about Y, matching the host's own camera convention. Swapping
//! them produces a matrix that is subtly wrong at non-zero pitch.

use crate::core::config::CameraCalibration;
use crate::core::types::{DVec3, Mat4, Vec3};

/// Build the view matrix for the given camera state.
///
/// The matrix equals `Rx(pitch) * Ry(yaw + yaw_offset) * T(-position)`,
/// with the calibration's vertical bias subtracted from the Y translation.
/// Angles are in degrees. Pure function; recompute every frame rather than
/// mutating a cached matrix.
pub fn view_transform(position: DVec3, pitch: f32, yaw: f32, calib: &CameraCalibration) -> Mat4 {
    let rotation = Mat4::from_rotation_x(pitch.to_radians())
        * Mat4::from_rotation_y((yaw + calib.yaw_offset).to_radians());
    rotation * Mat4::from_translation(view_translation(position, calib))
}

/// Translation component of the view matrix: the negated camera position,
/// with the vertical bias applied. Precision drops to f32 here; the world
/// offset re-basing keeps the magnitudes small enough for that to be safe.
pub fn view_translation(position: DVec3, calib: &CameraCalibration) -> Vec3 {
    Vec3::new(
        (-position.x) as f32,
        (-position.y) as f32 - calib.vertical_bias,
        (-position.z) as f32,
    )
}

/// Serialize a matrix to the column-major f32 layout the renderer's
/// transform slots expect.
pub fn to_column_major(matrix: &Mat4) -> [f32; 16] {
    // glam stores Mat4 column-major already
    matrix.to_cols_array()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_mat_eq(a: &Mat4, b: &Mat4) {
        let (a, b) = (a.to_cols_array(), b.to_cols_array());
        for i in 0..16 {
            assert!((a[i] - b[i]).abs() < EPS, "element {}: {} vs {}", i, a[i], b[i]);
        }
    }

    #[test]
    fn test_origin_no_rotation() {
        // At the origin with zero pitch/yaw the result is the 180-degree
        // yaw-offset rotation composed with the pure vertical bias.
        let calib = CameraCalibration::default();
        let m = view_transform(DVec3::ZERO, 0.0, 0.0, &calib);

        let expected = Mat4::from_rotation_y(180f32.to_radians())
            * Mat4::from_translation(Vec3::new(0.0, -calib.vertical_bias, 0.0));
        assert_mat_eq(&m, &expected);
    }

    #[test]
    fn test_pitch_rotation_component() {
        // pitch 90, yaw 0: the rotation block must be Rx(90) * Ry(180),
        // independent of translation.
        let calib = CameraCalibration::default();
        let m = view_transform(DVec3::new(3.0, 4.0, 5.0), 90.0, 0.0, &calib);

        let rot = Mat4::from_rotation_x(90f32.to_radians())
            * Mat4::from_rotation_y(180f32.to_radians());
        let cols = m.to_cols_array_2d();
        let expected = rot.to_cols_array_2d();
        for c in 0..3 {
            for r in 0..3 {
                assert!((cols[c][r] - expected[c][r]).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_pitch_applied_before_yaw() {
        let calib = CameraCalibration { yaw_offset: 0.0, vertical_bias: 0.0 };
        let m = view_transform(DVec3::ZERO, 30.0, 45.0, &calib);
        let swapped = Mat4::from_rotation_y(45f32.to_radians())
            * Mat4::from_rotation_x(30f32.to_radians());
        // Composition order matters; the swapped product must differ.
        let diff: f32 = m
            .to_cols_array()
            .iter()
            .zip(swapped.to_cols_array().iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        assert!(diff > 0.01);
    }

    #[test]
    fn test_translation_bias() {
        let calib = CameraCalibration::default();
        let t = view_translation(DVec3::new(16.0, 70.0, -16.0), &calib);
        assert_eq!(t, Vec3::new(-16.0, -70.0 - 64.0, 16.0));
    }

    #[test]
    fn test_column_major_layout() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let out = to_column_major(&m);
        // Translation lands in the fourth column
        assert_eq!(&out[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(out[15], 1.0);
    }
}
