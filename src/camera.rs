//! Free-fly camera driven by yaw/pitch angles.
//!
//! The camera owns its orientation basis and rebuilds it from the angles
//! after every rotation, so `front`, `right`, and `up` stay orthonormal
//! no matter how much mouse input accumulates.

use glam::{Mat4, Vec3};

/// Default yaw in degrees, looking down -Z.
const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees.
const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in world units per second.
const DEFAULT_SPEED: f32 = 2.5;
/// Default mouse look sensitivity.
const DEFAULT_SENSITIVITY: f32 = 0.05;
/// Default zoom (vertical field of view) in degrees.
const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch bound in degrees; keeps the basis well-defined at the poles.
const PITCH_LIMIT: f32 = 89.0;
/// Zoom bounds in degrees.
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

/// Movement direction for keyboard-driven motion, relative to the camera's
/// own basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Against the right vector.
    Left,
    /// Along the right vector.
    Right,
}

/// Free-fly perspective camera defined by a position and yaw/pitch angles.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// View direction (unit length).
    pub front: Vec3,
    /// Camera-local up vector (unit length).
    pub up: Vec3,
    /// Camera-local right vector (unit length).
    pub right: Vec3,
    /// World up reference the basis is derived against.
    pub world_up: Vec3,
    /// Yaw angle in degrees.
    pub yaw: f32,
    /// Pitch angle in degrees, clamped to the pole limit.
    pub pitch: f32,
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Mouse look sensitivity multiplier.
    pub sensitivity: f32,
    /// Vertical field of view in degrees, narrowed by scrolling.
    pub zoom: f32,
}

impl Camera {
    /// Create a camera at `position` looking down -Z.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::ZERO,
            right: Vec3::ZERO,
            world_up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            speed: DEFAULT_SPEED,
            sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_basis();
        camera
    }

    /// Look-at view matrix for the current position and orientation.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Displace the camera along its basis. No bounds are applied; the
    /// camera flies freely.
    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = self.speed * dt;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Apply a mouse delta (in screen units) to yaw and pitch and rebuild
    /// the basis. Pitch is clamped so the view never flips over a pole.
    pub fn process_mouse_movement(&mut self, xoffset: f32, yoffset: f32) {
        self.yaw += xoffset * self.sensitivity;
        self.pitch += yoffset * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_basis();
    }

    /// Apply a scroll delta to the zoom: scrolling up narrows the field of
    /// view. Clamped to the zoom bounds.
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.zoom = (self.zoom - yoffset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Rebuild `front`, `right`, and `up` from the yaw/pitch angles.
    fn update_basis(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPSILON, "{a} != {b}");
    }

    #[test]
    fn default_orientation_looks_down_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        assert_close(camera.front, Vec3::NEG_Z);
        assert_close(camera.right, Vec3::X);
        assert_close(camera.up, Vec3::Y);
    }

    #[test]
    fn view_matrix_maps_origin_into_view_space() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
        let viewed = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert_close(viewed, Vec3::new(0.0, 0.0, -3.0));
    }

    #[test]
    fn basis_stays_orthonormal_under_mouse_input() {
        let mut camera = Camera::new(Vec3::ZERO);
        let offsets = [
            (120.0, -45.0),
            (-300.5, 200.0),
            (893.0, -1200.0),
            (0.25, 0.75),
            (-45.0, 30.0),
        ];
        for (dx, dy) in offsets {
            camera.process_mouse_movement(dx, dy);
            assert!((camera.front.length() - 1.0).abs() < EPSILON);
            assert!((camera.right.length() - 1.0).abs() < EPSILON);
            assert!((camera.up.length() - 1.0).abs() < EPSILON);
            assert!(camera.front.dot(camera.right).abs() < EPSILON);
            assert!(camera.front.dot(camera.up).abs() < EPSILON);
            assert!(camera.right.dot(camera.up).abs() < EPSILON);
        }
    }

    #[test]
    fn pitch_clamps_at_the_pole_limit() {
        let mut camera = Camera::new(Vec3::ZERO);
        for _ in 0..100 {
            camera.process_mouse_movement(0.0, 10_000.0);
        }
        assert!(camera.pitch <= 89.0);
        for _ in 0..100 {
            camera.process_mouse_movement(0.0, -10_000.0);
        }
        assert!(camera.pitch >= -89.0);
    }

    #[test]
    fn zoom_clamps_to_bounds() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_mouse_scroll(100.0);
        assert_eq!(camera.zoom, 1.0);
        camera.process_mouse_scroll(-500.0);
        assert_eq!(camera.zoom, 45.0);
    }

    #[test]
    fn forward_movement_scales_with_speed_and_dt() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_keyboard(CameraMovement::Forward, 0.5);
        let expected = camera.front * camera.speed * 0.5;
        assert_close(camera.position, expected);
    }

    #[test]
    fn left_and_right_cancel_out() {
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        camera.process_mouse_movement(250.0, -80.0);
        let before = camera.position;
        camera.process_keyboard(CameraMovement::Left, 0.25);
        camera.process_keyboard(CameraMovement::Right, 0.25);
        assert_close(camera.position, before);
    }
}
