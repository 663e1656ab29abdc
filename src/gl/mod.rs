//! OpenGL plumbing: context creation, shader programs, texture upload.

use std::fmt;

/// Window, GL context, and surface creation.
pub mod context;
/// Shader program compilation, linking, and uniform upload.
pub mod shader;
/// Image decoding and 2D texture upload.
pub mod texture;

pub use context::GlContext;
pub use shader::ShaderProgram;
pub use texture::{PixelFormat, Texture2d, TextureError};

/// GPU object handle allocation failure.
///
/// Raised when the driver refuses to create a shader, program, buffer,
/// vertex array, or texture object. Compile, link, and decode failures are
/// not errors at this level; they are logged and rendering continues
/// degraded.
#[derive(Debug)]
pub enum GlError {
    /// Shader object allocation failed.
    CreateShader(String),
    /// Program object allocation failed.
    CreateProgram(String),
    /// Buffer object allocation failed.
    CreateBuffer(String),
    /// Vertex array object allocation failed.
    CreateVertexArray(String),
    /// Texture object allocation failed.
    CreateTexture(String),
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateShader(msg) => {
                write!(f, "failed to create shader object: {msg}")
            }
            Self::CreateProgram(msg) => {
                write!(f, "failed to create program object: {msg}")
            }
            Self::CreateBuffer(msg) => {
                write!(f, "failed to create buffer object: {msg}")
            }
            Self::CreateVertexArray(msg) => {
                write!(f, "failed to create vertex array object: {msg}")
            }
            Self::CreateTexture(msg) => {
                write!(f, "failed to create texture object: {msg}")
            }
        }
    }
}

impl std::error::Error for GlError {}
