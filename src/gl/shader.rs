//! Shader program wrapper: compile, link, and typed uniform upload.

use std::rc::Rc;

use glam::{Mat4, Vec3};
use glow::HasContext;

use super::GlError;

/// A linked GLSL program.
///
/// Compile and link failures do not fail construction; the diagnostics are
/// logged and the program stays bindable, rendering nothing useful until
/// the sources are fixed. Uniform locations are resolved by name on every
/// set call, and a name the linker discarded is silently ignored.
pub struct ShaderProgram {
    gl: Rc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Compile `vertex_source` and `fragment_source` and link them into a
    /// program. Shader objects are detached and deleted once linked.
    ///
    /// # Errors
    ///
    /// Returns [`GlError`] only when the driver cannot allocate a shader
    /// or program object.
    pub fn new(
        gl: Rc<glow::Context>,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, GlError> {
        unsafe {
            let vertex =
                compile(&gl, glow::VERTEX_SHADER, vertex_source, "vertex")?;
            let fragment = compile(
                &gl,
                glow::FRAGMENT_SHADER,
                fragment_source,
                "fragment",
            )?;

            let id = gl.create_program().map_err(GlError::CreateProgram)?;
            gl.attach_shader(id, vertex);
            gl.attach_shader(id, fragment);
            gl.link_program(id);
            if !gl.get_program_link_status(id) {
                log::error!(
                    "program link failed: {}",
                    gl.get_program_info_log(id)
                );
            }

            gl.detach_shader(id, vertex);
            gl.detach_shader(id, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            Ok(Self { gl, id })
        }
    }

    /// Bind this program for subsequent uniform and draw calls.
    pub fn bind(&self) {
        unsafe { self.gl.use_program(Some(self.id)) }
    }

    /// Set a boolean uniform (uploaded as an integer).
    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_i32(name, i32::from(value));
    }

    /// Set an integer uniform. Also used for sampler unit bindings.
    pub fn set_i32(&self, name: &str, value: i32) {
        unsafe {
            self.gl.uniform_1_i32(self.location(name).as_ref(), value);
        }
    }

    /// Set a float uniform.
    pub fn set_f32(&self, name: &str, value: f32) {
        unsafe {
            self.gl.uniform_1_f32(self.location(name).as_ref(), value);
        }
    }

    /// Set a vec3 uniform.
    pub fn set_vec3(&self, name: &str, value: Vec3) {
        unsafe {
            self.gl.uniform_3_f32(
                self.location(name).as_ref(),
                value.x,
                value.y,
                value.z,
            );
        }
    }

    /// Set a mat4 uniform, column-major, without transposition.
    pub fn set_mat4(&self, name: &str, value: &Mat4) {
        unsafe {
            self.gl.uniform_matrix_4_f32_slice(
                self.location(name).as_ref(),
                false,
                &value.to_cols_array(),
            );
        }
    }

    fn location(&self, name: &str) -> Option<glow::UniformLocation> {
        unsafe { self.gl.get_uniform_location(self.id, name) }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.id) }
    }
}

/// Compile one shader stage, logging the info log on failure.
unsafe fn compile(
    gl: &glow::Context,
    stage: u32,
    source: &str,
    label: &str,
) -> Result<glow::Shader, GlError> {
    let shader = gl.create_shader(stage).map_err(GlError::CreateShader)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if !gl.get_shader_compile_status(shader) {
        log::error!(
            "{label} shader compile failed: {}",
            gl.get_shader_info_log(shader)
        );
    }
    Ok(shader)
}
