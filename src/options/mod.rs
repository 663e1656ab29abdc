//! Centralized runtime options with TOML support.
//!
//! All tweakable settings (window shape, camera response, light placement)
//! are consolidated here so a scene can be adjusted without recompiling.
//! Options deserialize from an optional `sceneview.toml` in the working
//! directory.

mod camera;
mod light;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use light::LightOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::SceneviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window shape and title.
    pub window: WindowOptions,
    /// Camera placement and control response.
    pub camera: CameraOptions,
    /// Point light placement and color behavior.
    pub light: LightOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SceneviewError::Io`] when the file cannot be read and
    /// [`SceneviewError::OptionsParse`] when it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, SceneviewError> {
        let content = std::fs::read_to_string(path).map_err(SceneviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SceneviewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file, falling back to the defaults when no
    /// file exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneviewError`] when a file exists but cannot be read or
    /// parsed. A missing file is not an error.
    pub fn load_or_default(path: &Path) -> Result<Self, SceneviewError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no options file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
speed = 10.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.speed, 10.0);
        // Everything else should be default
        assert_eq!(opts.camera.sensitivity, 0.05);
        assert_eq!(opts.window, WindowOptions::default());
        assert_eq!(opts.light, LightOptions::default());
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let opts: Options = toml::from_str("").unwrap();
        assert_eq!(opts, Options::default());
    }

    #[test]
    fn unknown_path_falls_back_to_defaults() {
        let opts =
            Options::load_or_default(Path::new("no-such-options.toml")).unwrap();
        assert_eq!(opts, Options::default());
    }
}
