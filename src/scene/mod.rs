//! Imported scene data: vertices, materials, meshes, models, and the
//! point light feeding the Phong terms.

/// Point light with the animated color cycle.
pub mod light;
/// Per-mesh Phong material and texture semantics.
pub mod material;
/// GPU mesh: buffer upload and the per-mesh draw call.
pub mod mesh;
/// Scene import and traversal into drawable meshes.
pub mod model;
/// Vertex layout shared by every mesh.
pub mod vertex;

pub use light::PointLight;
pub use material::{Material, TextureKind};
pub use mesh::{Mesh, MeshTexture};
pub use model::Model;
pub use vertex::Vertex;
