//! GPU mesh: buffer upload and the per-mesh draw call.

use std::rc::Rc;

use glow::HasContext;

use super::material::{Material, TextureKind};
use super::vertex::Vertex;
use crate::gl::{GlError, ShaderProgram, Texture2d};

/// A texture bound to a mesh together with its sampler semantics.
pub struct MeshTexture {
    /// Which sampler family this texture feeds.
    pub kind: TextureKind,
    /// Shared GPU texture; deduplicated across meshes by source path.
    pub texture: Rc<Texture2d>,
}

/// One drawable primitive group: vertex/index buffers, one material, and
/// the texture bindings, uploaded once at construction.
///
/// Dropping the mesh deletes its vertex array and both buffers.
pub struct Mesh {
    gl: Rc<glow::Context>,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: glow::Buffer,
    index_count: i32,
    material: Material,
    textures: Vec<MeshTexture>,
    sampler_names: Vec<String>,
}

impl Mesh {
    /// Upload `vertices` and `indices` into fresh GPU buffers and record
    /// the attribute layout in a vertex array object.
    ///
    /// # Errors
    ///
    /// Returns [`GlError`] when a buffer or vertex array allocation
    /// fails.
    pub fn new(
        gl: Rc<glow::Context>,
        vertices: &[Vertex],
        indices: &[u32],
        material: Material,
        textures: Vec<MeshTexture>,
    ) -> Result<Self, GlError> {
        let sampler_names = sampler_names(textures.iter().map(|t| t.kind));

        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(GlError::CreateVertexArray)?;
            let vbo = gl.create_buffer().map_err(GlError::CreateBuffer)?;
            let ebo = gl.create_buffer().map_err(GlError::CreateBuffer)?;

            gl.bind_vertex_array(Some(vao));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );

            gl.enable_vertex_attrib_array(0);
            gl.vertex_attrib_pointer_f32(
                0,
                3,
                glow::FLOAT,
                false,
                Vertex::STRIDE,
                0,
            );
            gl.enable_vertex_attrib_array(1);
            gl.vertex_attrib_pointer_f32(
                1,
                3,
                glow::FLOAT,
                false,
                Vertex::STRIDE,
                Vertex::NORMAL_OFFSET,
            );
            gl.enable_vertex_attrib_array(2);
            gl.vertex_attrib_pointer_f32(
                2,
                2,
                glow::FLOAT,
                false,
                Vertex::STRIDE,
                Vertex::TEX_COORDS_OFFSET,
            );

            gl.bind_vertex_array(None);

            Ok(Self {
                gl,
                vao,
                vbo,
                ebo,
                index_count: indices.len() as i32,
                material,
                textures,
                sampler_names,
            })
        }
    }

    /// Issue one indexed draw: bind each texture to a sequential unit,
    /// upload the material constants once, and draw the index range as
    /// triangles. The program behind `shader` must already be bound.
    pub fn draw(&self, shader: &ShaderProgram) {
        for (unit, (mesh_texture, name)) in
            self.textures.iter().zip(&self.sampler_names).enumerate()
        {
            shader.set_i32(name, unit as i32);
            mesh_texture.texture.bind(unit as u32);
        }

        shader.set_vec3("material.ambient", self.material.ambient);
        shader.set_vec3("material.diffuse", self.material.diffuse);
        shader.set_vec3("material.specular", self.material.specular);
        shader.set_f32("material.shininess", self.material.shininess);

        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl.draw_elements(
                glow::TRIANGLES,
                self.index_count,
                glow::UNSIGNED_INT,
                0,
            );
            self.gl.bind_vertex_array(None);
        }
    }

    /// Number of indices in the element buffer.
    #[must_use]
    pub fn index_count(&self) -> i32 {
        self.index_count
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_buffer(self.ebo);
        }
    }
}

/// Derive sampler uniform names (`texture_diffuse1`, `texture_specular1`,
/// ...) with per-kind ordinals counted from 1 in binding order.
fn sampler_names(kinds: impl Iterator<Item = TextureKind>) -> Vec<String> {
    let mut diffuse = 0u32;
    let mut specular = 0u32;
    kinds
        .map(|kind| {
            let ordinal = match kind {
                TextureKind::Diffuse => {
                    diffuse += 1;
                    diffuse
                }
                TextureKind::Specular => {
                    specular += 1;
                    specular
                }
            };
            format!("{}{ordinal}", kind.sampler_prefix())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampler_ordinals_count_per_kind_from_one() {
        let kinds = [
            TextureKind::Diffuse,
            TextureKind::Specular,
            TextureKind::Diffuse,
            TextureKind::Diffuse,
            TextureKind::Specular,
        ];
        let names = sampler_names(kinds.into_iter());
        assert_eq!(names.len(), 5);
        assert_eq!(names[0], "texture_diffuse1");
        assert_eq!(names[1], "texture_specular1");
        assert_eq!(names[2], "texture_diffuse2");
        assert_eq!(names[3], "texture_diffuse3");
        assert_eq!(names[4], "texture_specular2");
    }

    #[test]
    fn no_textures_yield_no_sampler_names() {
        assert!(sampler_names(std::iter::empty()).is_empty());
    }
}
