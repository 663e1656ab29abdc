//! Crate-level error types.

use std::fmt;

use crate::gl::context::GlContextError;
use crate::gl::GlError;

/// Top-level error for viewer initialization and configuration.
///
/// Per-frame failures (shader diagnostics, texture decode problems, swap
/// errors) are logged and rendering continues degraded; only failures that
/// leave the viewer without a usable window, context, or GPU object
/// surface here.
#[derive(Debug)]
pub enum SceneviewError {
    /// Window or GL context initialization failed.
    Context(GlContextError),
    /// A GPU object allocation failed.
    Gl(GlError),
    /// A file could not be read or written.
    Io(std::io::Error),
    /// An options file could not be parsed.
    OptionsParse(String),
}

impl fmt::Display for SceneviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Context(e) => write!(f, "context initialization failed: {e}"),
            Self::Gl(e) => write!(f, "GPU object allocation failed: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => write!(f, "options parse error: {msg}"),
        }
    }
}

impl std::error::Error for SceneviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Context(e) => Some(e),
            Self::Gl(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<GlContextError> for SceneviewError {
    fn from(e: GlContextError) -> Self {
        Self::Context(e)
    }
}

impl From<GlError> for SceneviewError {
    fn from(e: GlError) -> Self {
        Self::Gl(e)
    }
}

impl From<std::io::Error> for SceneviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
