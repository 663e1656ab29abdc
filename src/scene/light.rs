//! Point light with the animated color cycle.

use glam::Vec3;

use crate::options::LightOptions;

/// A single point light driving the Phong terms.
///
/// When animation is enabled the base color cycles through out-of-phase
/// sine waves over elapsed time; otherwise it stays white. Diffuse tracks
/// the base color at half strength and ambient at a fifth, while the
/// specular color stays fixed.
pub struct PointLight {
    /// Light position in world space.
    pub position: Vec3,
    /// Ambient contribution color.
    pub ambient: Vec3,
    /// Diffuse contribution color.
    pub diffuse: Vec3,
    /// Specular contribution color.
    pub specular: Vec3,
    animate: bool,
}

impl PointLight {
    /// Create a light from options, seeded with the color at time zero.
    #[must_use]
    pub fn new(options: &LightOptions) -> Self {
        let mut light = Self {
            position: Vec3::from(options.position),
            ambient: Vec3::ZERO,
            diffuse: Vec3::ZERO,
            specular: Vec3::from(options.specular),
            animate: options.animate,
        };
        light.update(0.0);
        light
    }

    /// Recompute the light color for `elapsed` seconds since startup.
    pub fn update(&mut self, elapsed: f32) {
        let color = if self.animate {
            Vec3::new(
                (elapsed * 2.0).sin(),
                (elapsed * 0.7).sin(),
                (elapsed * 1.3).sin(),
            )
        } else {
            Vec3::ONE
        };
        self.diffuse = color * 0.5;
        self.ambient = color * 0.2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_light_scales_white() {
        let mut light = PointLight::new(&LightOptions {
            animate: false,
            ..LightOptions::default()
        });
        light.update(123.0);
        assert_eq!(light.diffuse, Vec3::splat(0.5));
        assert_eq!(light.ambient, Vec3::splat(0.2));
        assert_eq!(light.specular, Vec3::ONE);
    }

    #[test]
    fn animated_color_starts_dark_and_follows_the_phases() {
        let mut light = PointLight::new(&LightOptions::default());
        assert_eq!(light.diffuse, Vec3::ZERO);
        assert_eq!(light.ambient, Vec3::ZERO);

        let t = std::f32::consts::FRAC_PI_4;
        light.update(t);
        assert!((light.diffuse.x - 0.5).abs() < 1e-6);
        assert!((light.diffuse.y - 0.5 * (t * 0.7).sin()).abs() < 1e-6);
        assert!((light.diffuse.z - 0.5 * (t * 1.3).sin()).abs() < 1e-6);
        assert!((light.ambient.x - 0.2).abs() < 1e-6);
    }

    #[test]
    fn position_and_specular_come_from_options() {
        let light = PointLight::new(&LightOptions::default());
        assert_eq!(light.position, Vec3::new(1.2, 1.0, 2.0));
        assert_eq!(light.specular, Vec3::ONE);
    }
}
