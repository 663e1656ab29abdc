//! Binary entry point: wires the viewer into the winit application
//! callbacks and keeps frames flowing with a continuous redraw request.

use std::path::Path;

use sceneview::frame::FrameTiming;
use sceneview::options::Options;
use sceneview::viewer::Viewer;
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

/// Options file looked up in the working directory.
const OPTIONS_PATH: &str = "sceneview.toml";
/// Model loaded when no path is given on the command line.
const DEFAULT_MODEL_PATH: &str = "multi.dae";

struct ViewerApp {
    viewer: Option<Viewer>,
    options: Options,
    model_path: String,
    timing: FrameTiming,
}

impl ViewerApp {
    fn new(options: Options, model_path: String) -> Self {
        Self {
            viewer: None,
            options,
            model_path,
            timing: FrameTiming::new(),
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.viewer.is_none() {
            match Viewer::new(event_loop, &self.options, &self.model_path) {
                Ok(viewer) => {
                    viewer.request_redraw();
                    self.viewer = Some(viewer);
                }
                Err(e) => {
                    log::error!("initialization failed: {e}");
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        let Some(viewer) = self.viewer.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                viewer.resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                let dt = self.timing.tick();
                viewer.advance(dt);
                viewer.render();
                viewer.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if code == KeyCode::Escape {
                        if event.state.is_pressed() {
                            event_loop.exit();
                        }
                    } else {
                        viewer.key_event(code, event.state.is_pressed());
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                viewer.cursor_moved(position.x, position.y);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                viewer.mouse_wheel(dy);
            }

            WindowEvent::MouseInput { button, state, .. } => {
                viewer.mouse_button(button, state.is_pressed());
            }

            _ => (),
        }
    }

    // Raw motion keeps mouse look alive while the cursor is captured;
    // a locked cursor stops emitting `CursorMoved`.
    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let Some(viewer) = self.viewer.as_mut() else {
            return;
        };
        if let DeviceEvent::MouseMotion { delta } = event {
            viewer.mouse_motion(delta);
        }
    }
}

fn main() {
    env_logger::init();

    let model_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_owned());

    let options = match Options::load_or_default(Path::new(OPTIONS_PATH)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("event loop creation failed: {e}");
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(options, model_path);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {e}");
        std::process::exit(1);
    }
}
