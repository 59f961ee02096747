//! Bridge configuration
//!
//! The two camera calibration values exist because the host engine and the
//! external renderer use independently chosen coordinate conventions. They
//! are alignment artifacts, not derivable quantities, so they live in config
//! rather than in the math.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::Result;

/// Calibration between the host camera convention and the external
/// renderer's view convention.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CameraCalibration {
    /// Added to the camera yaw (degrees) before building the view rotation.
    /// The renderer's forward axis is flipped relative to the host's.
    pub yaw_offset: f32,
    /// Subtracted from the Y translation component of the view matrix.
    /// Corrects the vertical origin offset between the two coordinate
    /// systems.
    pub vertical_bias: f32,
}

impl Default for CameraCalibration {
    fn default() -> Self {
        Self {
            yaw_offset: 180.0,
            vertical_bias: 64.0,
        }
    }
}

/// Top-level bridge configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Camera calibration values.
    #[serde(default)]
    pub calibration: CameraCalibration,
}

impl BridgeConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&data)?;
        Ok(config)
    }
}
