// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]

//! Minimal 3D scene viewer built on OpenGL 3.3 core.
//!
//! Sceneview opens a window, imports a model file through Assimp, uploads
//! the geometry once, and renders it every frame with a single point light
//! and ambient/diffuse/specular (Phong) shading while a free-fly camera
//! follows keyboard and mouse input.
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - owns the GL context and the per-frame draw path
//! - [`scene::Model`] - imported scene graph flattened to drawable meshes
//! - [`camera::Camera`] - yaw/pitch free-fly camera
//! - [`options::Options`] - runtime configuration (window, camera, light)
//!
//! # Architecture
//!
//! Everything runs single-threaded: the winit event loop feeds input state
//! and drives one redraw per frame. GPU resources are created once at load
//! time; each handle is owned by a wrapper that releases it on drop, and
//! textures deduplicated across meshes are shared through `Rc` so they are
//! released exactly once.

pub mod camera;
pub mod error;
pub mod frame;
pub mod gl;
pub mod input;
pub mod options;
pub mod scene;
pub mod viewer;
