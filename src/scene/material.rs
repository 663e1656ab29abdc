//! Per-mesh Phong material and texture semantics.
//!
//! Assimp materials are flat property lists keyed by strings like
//! `$clr.diffuse`. This module pulls out the Phong color set and the
//! texture file references the shading model needs; everything else in
//! the property list is ignored.

use glam::Vec3;
use russimp::material::{MaterialProperty, PropertyTypeInfo, TextureType};

const KEY_COLOR_AMBIENT: &str = "$clr.ambient";
const KEY_COLOR_DIFFUSE: &str = "$clr.diffuse";
const KEY_COLOR_SPECULAR: &str = "$clr.specular";
const KEY_SHININESS: &str = "$mat.shininess";
const KEY_TEXTURE_FILE: &str = "$tex.file";

/// Semantic role of a mesh texture, deciding its sampler uniform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    /// Color texture, sampled as `texture_diffuseN`.
    Diffuse,
    /// Specular map, sampled as `texture_specularN`.
    Specular,
}

impl TextureKind {
    /// Sampler uniform prefix; the per-kind ordinal is appended in
    /// binding order.
    #[must_use]
    pub fn sampler_prefix(self) -> &'static str {
        match self {
            Self::Diffuse => "texture_diffuse",
            Self::Specular => "texture_specular",
        }
    }

    fn semantic(self) -> TextureType {
        match self {
            Self::Diffuse => TextureType::Diffuse,
            Self::Specular => TextureType::Specular,
        }
    }
}

/// Phong shading constants, pulled once per mesh from the owning Assimp
/// material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient reflectance color.
    pub ambient: Vec3,
    /// Diffuse reflectance color.
    pub diffuse: Vec3,
    /// Specular reflectance color.
    pub specular: Vec3,
    /// Specular exponent.
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::ZERO,
            diffuse: Vec3::ZERO,
            specular: Vec3::ZERO,
            shininess: 0.0,
        }
    }
}

impl Material {
    /// Extract the Phong color set from an Assimp material's property
    /// list. A property the exporter left out is logged once and falls
    /// back to zero.
    #[must_use]
    pub fn from_properties(properties: &[MaterialProperty]) -> Self {
        Self {
            ambient: color_property(properties, KEY_COLOR_AMBIENT),
            diffuse: color_property(properties, KEY_COLOR_DIFFUSE),
            specular: color_property(properties, KEY_COLOR_SPECULAR),
            shininess: float_property(properties, KEY_SHININESS),
        }
    }
}

/// Texture file paths referenced by `properties` for the given kind, in
/// declaration order. Paths are returned as the exporter wrote them; the
/// loader resolves them relative to the working directory.
#[must_use]
pub fn texture_paths(
    properties: &[MaterialProperty],
    kind: TextureKind,
) -> Vec<String> {
    let semantic = kind.semantic();
    properties
        .iter()
        .filter(|p| p.key == KEY_TEXTURE_FILE && p.semantic == semantic)
        .filter_map(|p| match &p.data {
            PropertyTypeInfo::String(path) => Some(path.clone()),
            _ => None,
        })
        .collect()
}

fn color_property(properties: &[MaterialProperty], key: &str) -> Vec3 {
    let data = properties
        .iter()
        .find(|p| p.key == key && p.semantic == TextureType::None)
        .map(|p| &p.data);
    match data {
        Some(PropertyTypeInfo::FloatArray(values)) if values.len() >= 3 => {
            Vec3::new(values[0], values[1], values[2])
        }
        _ => {
            log::warn!("material property {key} missing, defaulting to zero");
            Vec3::ZERO
        }
    }
}

fn float_property(properties: &[MaterialProperty], key: &str) -> f32 {
    let data = properties
        .iter()
        .find(|p| p.key == key && p.semantic == TextureType::None)
        .map(|p| &p.data);
    match data {
        Some(PropertyTypeInfo::FloatArray(values)) if !values.is_empty() => {
            values[0]
        }
        _ => {
            log::warn!("material property {key} missing, defaulting to zero");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float_prop(key: &str, values: Vec<f32>) -> MaterialProperty {
        MaterialProperty {
            key: key.to_owned(),
            data: PropertyTypeInfo::FloatArray(values),
            index: 0,
            semantic: TextureType::None,
        }
    }

    fn texture_prop(path: &str, semantic: TextureType) -> MaterialProperty {
        MaterialProperty {
            key: KEY_TEXTURE_FILE.to_owned(),
            data: PropertyTypeInfo::String(path.to_owned()),
            index: 0,
            semantic,
        }
    }

    #[test]
    fn phong_colors_come_from_clr_properties() {
        let properties = vec![
            float_prop(KEY_COLOR_AMBIENT, vec![0.1, 0.2, 0.3]),
            float_prop(KEY_COLOR_DIFFUSE, vec![0.4, 0.5, 0.6]),
            float_prop(KEY_COLOR_SPECULAR, vec![0.7, 0.8, 0.9]),
            float_prop(KEY_SHININESS, vec![32.0]),
        ];
        let material = Material::from_properties(&properties);
        assert_eq!(material.ambient, Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(material.diffuse, Vec3::new(0.4, 0.5, 0.6));
        assert_eq!(material.specular, Vec3::new(0.7, 0.8, 0.9));
        assert_eq!(material.shininess, 32.0);
    }

    #[test]
    fn missing_properties_default_to_zero() {
        let material = Material::from_properties(&[]);
        assert_eq!(material, Material::default());
    }

    #[test]
    fn truncated_color_arrays_are_rejected() {
        let properties = vec![float_prop(KEY_COLOR_DIFFUSE, vec![0.4, 0.5])];
        let material = Material::from_properties(&properties);
        assert_eq!(material.diffuse, Vec3::ZERO);
    }

    #[test]
    fn texture_paths_filter_by_kind() {
        let properties = vec![
            texture_prop("wood.png", TextureType::Diffuse),
            texture_prop("gloss.png", TextureType::Specular),
            texture_prop("bricks.png", TextureType::Diffuse),
        ];
        let diffuse = texture_paths(&properties, TextureKind::Diffuse);
        assert_eq!(diffuse, ["wood.png", "bricks.png"]);
        let specular = texture_paths(&properties, TextureKind::Specular);
        assert_eq!(specular, ["gloss.png"]);
    }

    #[test]
    fn non_string_texture_entries_are_skipped() {
        let mut bogus = texture_prop("ignored", TextureType::Diffuse);
        bogus.data = PropertyTypeInfo::IntegerArray(vec![1, 2, 3]);
        let properties = vec![
            bogus,
            texture_prop("valid.png", TextureType::Diffuse),
        ];
        assert_eq!(
            texture_paths(&properties, TextureKind::Diffuse),
            ["valid.png"]
        );
    }
}
