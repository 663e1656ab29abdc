use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera placement and control response.
pub struct CameraOptions {
    /// Initial camera position in world space.
    pub position: [f32; 3],
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Mouse look sensitivity multiplier.
    pub sensitivity: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            speed: 2.5,
            sensitivity: 0.05,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
