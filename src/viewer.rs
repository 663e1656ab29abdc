//! Per-frame orchestration: GL state, uniform updates, and the draw pass.

use std::rc::Rc;
use std::time::Instant;

use glam::{Mat4, Vec3};
use glow::HasContext;
use winit::event::MouseButton;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::KeyCode;

use crate::camera::{Camera, CameraMovement};
use crate::error::SceneviewError;
use crate::gl::{GlContext, ShaderProgram};
use crate::input::InputState;
use crate::options::Options;
use crate::scene::{Model, PointLight};

const VERTEX_SHADER: &str = include_str!("shaders/scene.vert");
const FRAGMENT_SHADER: &str = include_str!("shaders/scene.frag");

/// The viewer: window, GL context, shader, model, camera, light, and
/// input state, advanced once per frame by the event loop.
pub struct Viewer {
    shader: ShaderProgram,
    model: Model,
    camera: Camera,
    light: PointLight,
    input: InputState,
    start: Instant,
    znear: f32,
    zfar: f32,
    // Dropped last so the GPU handles above release against a live
    // context.
    context: GlContext,
}

impl Viewer {
    /// Create the window and GL context, compile the scene shader, import
    /// the model at `model_path`, and seed camera and light state from
    /// `options`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneviewError`] when context creation or GPU object
    /// allocation fails. A model that fails to import is not an error; it
    /// renders as an empty scene.
    pub fn new(
        event_loop: &ActiveEventLoop,
        options: &Options,
        model_path: &str,
    ) -> Result<Self, SceneviewError> {
        let context = GlContext::new(event_loop, &options.window)?;
        let gl = Rc::clone(context.gl());
        unsafe {
            gl.enable(glow::DEPTH_TEST);
        }

        let shader =
            ShaderProgram::new(Rc::clone(&gl), VERTEX_SHADER, FRAGMENT_SHADER)?;
        let model = Model::load(&gl, model_path)?;

        let mut camera = Camera::new(Vec3::from(options.camera.position));
        camera.speed = options.camera.speed;
        camera.sensitivity = options.camera.sensitivity;

        Ok(Self {
            shader,
            model,
            camera,
            light: PointLight::new(&options.light),
            input: InputState::new(),
            start: Instant::now(),
            znear: options.camera.znear,
            zfar: options.camera.zfar,
            context,
        })
    }

    /// Ask the window for another frame.
    pub fn request_redraw(&self) {
        self.context.window().request_redraw();
    }

    /// Resize the surface and viewport; the projection aspect follows on
    /// the next frame.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    /// Record a key press or release for per-frame movement.
    pub fn key_event(&mut self, code: KeyCode, pressed: bool) {
        self.input.key_event(code, pressed);
    }

    /// Route an absolute cursor position into camera look. Ignored while
    /// the cursor is captured.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        if let Some((dx, dy)) = self.input.cursor_moved(x, y) {
            self.camera.process_mouse_movement(dx, dy);
        }
    }

    /// Route a raw device motion delta into camera look. Ignored while
    /// the cursor is free.
    pub fn mouse_motion(&mut self, delta: (f64, f64)) {
        if let Some((dx, dy)) = self.input.mouse_motion(delta.0, delta.1) {
            self.camera.process_mouse_movement(dx, dy);
        }
    }

    /// Route a scroll delta into camera zoom.
    pub fn mouse_wheel(&mut self, delta: f32) {
        self.camera.process_mouse_scroll(delta);
    }

    /// Left press captures the cursor for mouse look; right press
    /// releases it.
    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if !pressed {
            return;
        }
        match button {
            MouseButton::Left => self.set_captured(true),
            MouseButton::Right => self.set_captured(false),
            _ => {}
        }
    }

    /// Keep the window's grab state and the input routing in step.
    fn set_captured(&mut self, captured: bool) {
        self.context.set_cursor_captured(captured);
        self.input.set_captured(captured);
    }

    /// Advance camera movement and the light color by `dt` seconds. One
    /// movement direction applies per frame, W taking priority over S,
    /// then A, then D.
    pub fn advance(&mut self, dt: f32) {
        if self.input.is_held(KeyCode::KeyW) {
            self.camera.process_keyboard(CameraMovement::Forward, dt);
        } else if self.input.is_held(KeyCode::KeyS) {
            self.camera.process_keyboard(CameraMovement::Backward, dt);
        } else if self.input.is_held(KeyCode::KeyA) {
            self.camera.process_keyboard(CameraMovement::Left, dt);
        } else if self.input.is_held(KeyCode::KeyD) {
            self.camera.process_keyboard(CameraMovement::Right, dt);
        }

        self.light.update(self.start.elapsed().as_secs_f32());
    }

    /// Render one frame: clear, upload the frame uniforms, draw the
    /// model, and present. A failed present is logged and the frame is
    /// dropped.
    pub fn render(&self) {
        unsafe {
            let gl = self.context.gl();
            gl.clear_color(0.2, 0.3, 0.3, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        self.shader.bind();
        self.shader.set_vec3("lightPos", self.light.position);
        self.shader.set_vec3("viewPos", self.camera.position);
        self.shader.set_vec3("light.ambient", self.light.ambient);
        self.shader.set_vec3("light.diffuse", self.light.diffuse);
        self.shader.set_vec3("light.specular", self.light.specular);

        let projection = Mat4::perspective_rh_gl(
            self.camera.zoom.to_radians(),
            self.context.aspect_ratio(),
            self.znear,
            self.zfar,
        );
        self.shader.set_mat4("projection", &projection);
        self.shader.set_mat4("view", &self.camera.view_matrix());
        self.shader.set_mat4("model", &Mat4::IDENTITY);

        self.model.draw(&self.shader);

        if let Err(e) = self.context.swap_buffers() {
            log::error!("buffer swap failed: {e}");
        }
    }
}
