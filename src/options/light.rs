use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Point light placement and color behavior.
pub struct LightOptions {
    /// Light position in world space.
    pub position: [f32; 3],
    /// Specular highlight color.
    pub specular: [f32; 3],
    /// Whether the light color oscillates over time. When disabled the
    /// light is plain white.
    pub animate: bool,
}

impl Default for LightOptions {
    fn default() -> Self {
        Self {
            position: [1.2, 1.0, 2.0],
            specular: [1.0, 1.0, 1.0],
            animate: true,
        }
    }
}
