//! Scene import and traversal into drawable meshes.
//!
//! Assimp hands back a node hierarchy where each node references meshes
//! by index. The loader walks that hierarchy depth-first, converts every
//! referenced mesh into a GPU [`Mesh`], and deduplicates textures by
//! source path so a file shared across materials is decoded once.

use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use russimp::material::MaterialProperty;
use russimp::node::Node;
use russimp::scene::{PostProcess, Scene};

use super::material::{self, Material, TextureKind};
use super::mesh::{Mesh, MeshTexture};
use super::vertex::Vertex;
use crate::gl::{GlError, ShaderProgram, Texture2d};

/// An imported model: the scene graph flattened into drawable meshes in
/// depth-first node order.
///
/// Import failures are not fatal. The error is logged and the model is
/// left empty, so the viewer keeps running with nothing to draw.
pub struct Model {
    meshes: Vec<Mesh>,
}

impl Model {
    /// Import the file at `path` with triangulation and UV flipping,
    /// uploading every mesh the scene's node hierarchy references.
    ///
    /// Texture paths referenced by the materials are used as written,
    /// resolved against the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`GlError`] only when GPU object allocation fails;
    /// importer failures produce an empty model instead.
    pub fn load(gl: &Rc<glow::Context>, path: &str) -> Result<Self, GlError> {
        Self::from_scene(gl, Scene::from_file(path, post_processing()), path)
    }

    /// Import a scene from an in-memory buffer. `hint` is the file
    /// extension Assimp should assume (e.g. `"dae"`); it may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`GlError`] only when GPU object allocation fails.
    pub fn from_memory(
        gl: &Rc<glow::Context>,
        bytes: &[u8],
        hint: &str,
    ) -> Result<Self, GlError> {
        Self::from_scene(
            gl,
            Scene::from_buffer(bytes, post_processing(), hint),
            "<memory>",
        )
    }

    fn from_scene(
        gl: &Rc<glow::Context>,
        imported: Result<Scene, russimp::RussimpError>,
        source: &str,
    ) -> Result<Self, GlError> {
        let Some(scene) = imported_scene(imported, source) else {
            return Ok(Self::empty());
        };
        let Some(root) = &scene.root else {
            log::error!("imported scene has no root node ({source})");
            return Ok(Self::empty());
        };

        let mut loader = SceneLoader {
            gl,
            scene: &scene,
            textures: TextureCache::new(),
            meshes: Vec::new(),
        };
        loader.visit(root)?;

        log::info!("loaded {} meshes from {source}", loader.meshes.len());
        Ok(Self {
            meshes: loader.meshes,
        })
    }

    /// Draw every mesh in load order. The program behind `shader` must
    /// already be bound.
    pub fn draw(&self, shader: &ShaderProgram) {
        for mesh in &self.meshes {
            mesh.draw(shader);
        }
    }

    /// Whether the import produced any drawable meshes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Number of drawable meshes.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// The fallback model: no meshes, draws nothing.
    fn empty() -> Self {
        Self { meshes: Vec::new() }
    }
}

fn post_processing() -> Vec<PostProcess> {
    vec![PostProcess::Triangulate, PostProcess::FlipUVs]
}

/// Unwrap an import result, logging and discarding the failure. `None`
/// means the caller falls back to the empty model.
fn imported_scene(
    imported: Result<Scene, russimp::RussimpError>,
    source: &str,
) -> Option<Scene> {
    match imported {
        Ok(scene) => Some(scene),
        Err(e) => {
            log::error!("scene import failed ({source}): {e}");
            None
        }
    }
}

/// Walks the node hierarchy depth-first, converting every referenced mesh
/// and sharing textures through the path-keyed cache.
struct SceneLoader<'a> {
    gl: &'a Rc<glow::Context>,
    scene: &'a Scene,
    textures: TextureCache<Texture2d>,
    meshes: Vec<Mesh>,
}

impl SceneLoader<'_> {
    fn visit(&mut self, node: &Node) -> Result<(), GlError> {
        let scene = self.scene;
        for &mesh_index in &node.meshes {
            if let Some(mesh) = scene.meshes.get(mesh_index as usize) {
                let converted = self.convert_mesh(mesh)?;
                self.meshes.push(converted);
            }
        }
        for child in node.children.borrow().iter() {
            self.visit(child)?;
        }
        Ok(())
    }

    fn convert_mesh(
        &mut self,
        mesh: &russimp::mesh::Mesh,
    ) -> Result<Mesh, GlError> {
        let uv_channel = mesh.texture_coords.first().and_then(Option::as_ref);
        let mut vertices = Vec::with_capacity(mesh.vertices.len());
        for (i, position) in mesh.vertices.iter().enumerate() {
            let normal = mesh
                .normals
                .get(i)
                .map_or([0.0; 3], |n| [n.x, n.y, n.z]);
            let tex_coords = uv_channel
                .and_then(|uvs| uvs.get(i))
                .map_or([0.0, 0.0], |uv| [uv.x, uv.y]);
            vertices.push(Vertex {
                position: [position.x, position.y, position.z],
                normal,
                tex_coords,
            });
        }

        let mut indices = Vec::new();
        for face in &mesh.faces {
            indices.extend_from_slice(&face.0);
        }

        let properties = self
            .scene
            .materials
            .get(mesh.material_index as usize)
            .map(|m| m.properties.as_slice())
            .unwrap_or_default();
        let phong = Material::from_properties(properties);

        let mut textures =
            self.resolve_textures(properties, TextureKind::Diffuse)?;
        textures
            .extend(self.resolve_textures(properties, TextureKind::Specular)?);

        Mesh::new(Rc::clone(self.gl), &vertices, &indices, phong, textures)
    }

    fn resolve_textures(
        &mut self,
        properties: &[MaterialProperty],
        kind: TextureKind,
    ) -> Result<Vec<MeshTexture>, GlError> {
        let gl = self.gl;
        let mut resolved = Vec::new();
        for path in material::texture_paths(properties, kind) {
            let texture = self
                .textures
                .resolve_with(&path, || Texture2d::load(gl, Path::new(&path)))?;
            resolved.push(MeshTexture { kind, texture });
        }
        Ok(resolved)
    }
}

/// Model-lifetime texture cache keyed by source path.
///
/// The first load wins: later requests for the same path share the
/// original entry and never invoke the loader again.
struct TextureCache<T> {
    loaded: HashMap<String, Rc<T>>,
}

impl<T> TextureCache<T> {
    fn new() -> Self {
        Self {
            loaded: HashMap::new(),
        }
    }

    /// Return the cached entry for `path`, or insert the result of
    /// `load`. A failed load is not cached.
    fn resolve_with<E>(
        &mut self,
        path: &str,
        load: impl FnOnce() -> Result<T, E>,
    ) -> Result<Rc<T>, E> {
        if let Some(existing) = self.loaded.get(path) {
            return Ok(Rc::clone(existing));
        }
        let loaded = Rc::new(load()?);
        let _ = self.loaded.insert(path.to_owned(), Rc::clone(&loaded));
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_returns_the_first_loaded_entry() {
        let mut cache = TextureCache::new();
        let mut loads = 0;
        let first = cache
            .resolve_with("bricks.png", || {
                loads += 1;
                Ok::<u32, ()>(7)
            })
            .unwrap();
        let second = cache
            .resolve_with("bricks.png", || {
                loads += 1;
                Ok::<u32, ()>(99)
            })
            .unwrap();
        assert_eq!(loads, 1);
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(*second, 7);
    }

    #[test]
    fn distinct_paths_load_separately() {
        let mut cache = TextureCache::new();
        let mut loads = 0;
        let _ = cache
            .resolve_with("a.png", || {
                loads += 1;
                Ok::<u32, ()>(1)
            })
            .unwrap();
        let _ = cache
            .resolve_with("b.png", || {
                loads += 1;
                Ok::<u32, ()>(2)
            })
            .unwrap();
        assert_eq!(loads, 2);
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let mut cache: TextureCache<u32> = TextureCache::new();
        assert!(cache
            .resolve_with("missing.png", || Err::<u32, &str>("nope"))
            .is_err());
        let retried = cache
            .resolve_with("missing.png", || Ok::<u32, &str>(5))
            .unwrap();
        assert_eq!(*retried, 5);
    }

    #[test]
    fn import_failure_yields_an_empty_model() {
        let imported = Scene::from_file("does-not-exist.dae", post_processing());
        assert!(imported_scene(imported, "does-not-exist.dae").is_none());

        let fallback = Model::empty();
        assert!(fallback.is_empty());
        assert_eq!(fallback.mesh_count(), 0);
    }

    #[test]
    fn garbage_memory_buffer_yields_an_empty_model() {
        let imported =
            Scene::from_buffer(b"not a scene at all", post_processing(), "dae");
        assert!(imported_scene(imported, "<memory>").is_none());
        assert!(Model::empty().is_empty());
    }
}
