//! Gesture tracking demo.
//!
//! Opens a window and routes its touch events into a `TransformGesture`,
//! logging the composed transform while a gesture is in progress. Mouse
//! press/drag/release is emulated as a single touch so the demo works on
//! machines without a touchscreen (run with `RUST_LOG=debug` for per-move
//! output).

use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use tactum_input::coords::Vec2;
use tactum_input::gesture::{GesturePhase, TransformGesture};
use tactum_input::input::platform::winit::{to_logical_vec2, translate_window_event};
use tactum_input::input::{TouchEvent, TouchId, TouchPhase};
use tactum_input::logging::{LoggingConfig, init_logging};

/// Touch id for the mouse emulation. Platform touch ids are small
/// monotonically assigned numbers; the max value cannot collide.
const MOUSE_TOUCH_ID: TouchId = TouchId(u64::MAX);

struct DemoApp {
    window: Option<Window>,
    gesture: TransformGesture,
    cursor: Vec2,
    mouse_held: bool,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            window: None,
            gesture: TransformGesture::new(),
            cursor: Vec2::zero(),
            mouse_held: false,
        }
    }

    fn feed(&mut self, event: TouchEvent) {
        if let Some(phase) = self.gesture.apply_event(event) {
            log::info!("gesture {phase}");

            // Fold a finished gesture into the starting transform so the
            // next one continues manipulating from where this one ended.
            if phase == GesturePhase::Ended {
                self.gesture.set_starting_transform(self.gesture.transform());
            }
        }

        if self.gesture.phase().is_active() {
            let t = self.gesture.transform();
            log::debug!(
                "scale {:.3}  rotation {:.3} rad  translation ({:.1}, {:.1})",
                t.scale,
                t.rotation,
                t.translation.x,
                t.translation.y,
            );
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("tactum gesture demo")
            .with_inner_size(LogicalSize::new(800.0, 600.0));

        match event_loop.create_window(attrs) {
            Ok(window) => self.window = Some(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else {
            return;
        };

        if let Some(touch_event) = translate_window_event(window, &event) {
            self.feed(touch_event);
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = to_logical_vec2(window, position);
                if self.mouse_held {
                    self.feed(TouchEvent::new(MOUSE_TOUCH_ID, TouchPhase::Moved, self.cursor));
                }
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let phase = match state {
                    ElementState::Pressed => {
                        self.mouse_held = true;
                        TouchPhase::Started
                    }
                    ElementState::Released => {
                        self.mouse_held = false;
                        TouchPhase::Ended
                    }
                };
                self.feed(TouchEvent::new(MOUSE_TOUCH_ID, phase, self.cursor));
            }

            _ => {}
        }
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = DemoApp::new();
    event_loop
        .run_app(&mut app)
        .context("winit event loop terminated with error")?;

    Ok(())
}
