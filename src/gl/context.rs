//! Window and OpenGL context creation on top of winit and glutin.
//!
//! Builds the window together with a matching framebuffer config, creates
//! an OpenGL 3.3 core context for it, makes the context current, and loads
//! the function table. The context stays current on the main thread for
//! the lifetime of the viewer.

use std::fmt;
use std::num::NonZeroU32;
use std::rc::Rc;

use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{
    GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface,
};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{CursorGrabMode, Window};

use crate::options::WindowOptions;

/// Errors raised while creating the window and its GL context.
#[derive(Debug)]
pub enum GlContextError {
    /// The GL display could not be built or no framebuffer config matched.
    Display(String),
    /// The display builder did not produce a window.
    MissingWindow,
    /// A raw window handle could not be obtained.
    WindowHandle(raw_window_handle::HandleError),
    /// GL context creation failed.
    ContextCreation(glutin::error::Error),
    /// Window surface creation failed.
    SurfaceCreation(glutin::error::Error),
    /// Making the GL context current failed.
    MakeCurrent(glutin::error::Error),
}

impl fmt::Display for GlContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display(msg) => {
                write!(f, "failed to build GL display: {msg}")
            }
            Self::MissingWindow => {
                write!(f, "display builder produced no window")
            }
            Self::WindowHandle(e) => {
                write!(f, "failed to obtain window handle: {e}")
            }
            Self::ContextCreation(e) => {
                write!(f, "failed to create GL context: {e}")
            }
            Self::SurfaceCreation(e) => {
                write!(f, "failed to create window surface: {e}")
            }
            Self::MakeCurrent(e) => {
                write!(f, "failed to make GL context current: {e}")
            }
        }
    }
}

impl std::error::Error for GlContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WindowHandle(e) => Some(e),
            Self::ContextCreation(e)
            | Self::SurfaceCreation(e)
            | Self::MakeCurrent(e) => Some(e),
            Self::Display(_) | Self::MissingWindow => None,
        }
    }
}

/// Owns the window, its GL surface, the current context, and the glow
/// function table.
pub struct GlContext {
    gl: Rc<glow::Context>,
    window: Window,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    size: (u32, u32),
}

impl GlContext {
    /// Create a window and a current OpenGL 3.3 core context for it.
    ///
    /// # Errors
    ///
    /// Returns [`GlContextError`] when the display, window, context, or
    /// surface cannot be created, or the context cannot be made current.
    pub fn new(
        event_loop: &ActiveEventLoop,
        options: &WindowOptions,
    ) -> Result<Self, GlContextError> {
        let attributes = Window::default_attributes()
            .with_title(options.title.as_str())
            .with_inner_size(LogicalSize::new(options.width, options.height));

        let template = ConfigTemplateBuilder::new().with_depth_size(24);
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes))
            .build(event_loop, template, pick_config)
            .map_err(|e| GlContextError::Display(e.to_string()))?;
        let window = window.ok_or(GlContextError::MissingWindow)?;

        let raw_handle = window
            .window_handle()
            .map_err(GlContextError::WindowHandle)?
            .as_raw();
        let display = gl_config.display();

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_handle));
        let not_current =
            unsafe { display.create_context(&gl_config, &context_attributes) }
                .map_err(GlContextError::ContextCreation)?;

        let surface_attributes = window
            .build_surface_attributes(SurfaceAttributesBuilder::default())
            .map_err(GlContextError::WindowHandle)?;
        let surface = unsafe {
            display.create_window_surface(&gl_config, &surface_attributes)
        }
        .map_err(GlContextError::SurfaceCreation)?;

        let context = not_current
            .make_current(&surface)
            .map_err(GlContextError::MakeCurrent)?;

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| {
                display.get_proc_address(name)
            })
        };

        let size = window.inner_size();
        log::info!(
            "created GL 3.3 core context, {}x{} surface",
            size.width,
            size.height
        );

        Ok(Self {
            gl: Rc::new(gl),
            window,
            surface,
            context,
            size: (size.width, size.height),
        })
    }

    /// Shared glow function table for this context.
    #[must_use]
    pub fn gl(&self) -> &Rc<glow::Context> {
        &self.gl
    }

    /// The underlying winit window.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Width over height of the current framebuffer.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.size;
        if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        }
    }

    /// Resize the surface and viewport. Zero-sized dimensions (minimized
    /// window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height))
        else {
            return;
        };
        self.surface.resize(&self.context, w, h);
        unsafe {
            self.gl.viewport(0, 0, width as i32, height as i32);
        }
        self.size = (width, height);
    }

    /// Present the back buffer.
    ///
    /// # Errors
    ///
    /// Returns the platform error when the swap fails (e.g. surface lost).
    pub fn swap_buffers(&self) -> Result<(), glutin::error::Error> {
        self.surface.swap_buffers(&self.context)
    }

    /// Grab and hide the cursor, or release and show it. The lock mode is
    /// preferred; confinement is the fallback on platforms without pointer
    /// lock. Grab failures are logged, not fatal.
    pub fn set_cursor_captured(&self, captured: bool) {
        if captured {
            if let Err(e) = self
                .window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined))
            {
                log::warn!("cursor grab unavailable: {e}");
            }
            self.window.set_cursor_visible(false);
        } else {
            if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
                log::warn!("cursor release failed: {e}");
            }
            self.window.set_cursor_visible(true);
        }
    }
}

/// Prefer configs without multisampling; the scene is drawn aliased.
// The iterator is never empty when `DisplayBuilder::build` succeeds.
#[allow(clippy::unwrap_used)]
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, candidate| {
            if candidate.num_samples() < best.num_samples() {
                candidate
            } else {
                best
            }
        })
        .unwrap()
}
