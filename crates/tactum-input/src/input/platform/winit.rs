use winit::dpi::PhysicalPosition;
use winit::event::{Touch as WinitTouch, TouchPhase as WinitTouchPhase, WindowEvent};
use winit::window::Window;

use crate::coords::Vec2;
use crate::input::{TouchEvent, TouchId, TouchPhase};

/// Translates a winit `WindowEvent` into an engine `TouchEvent`.
///
/// Returns `None` for events not represented by the input subsystem.
pub fn translate_window_event(window: &Window, event: &WindowEvent) -> Option<TouchEvent> {
    match event {
        WindowEvent::Touch(touch) => Some(translate_touch(window, touch)),
        _ => None,
    }
}

/// Translates a single winit touch, converting to logical pixels.
///
/// winit's `Touch::id` is stable for the lifetime of the contact, which is
/// exactly the guarantee `TouchId` requires.
pub fn translate_touch(window: &Window, touch: &WinitTouch) -> TouchEvent {
    let position = to_logical_vec2(window, touch.location);
    let phase = match touch.phase {
        WinitTouchPhase::Started => TouchPhase::Started,
        WinitTouchPhase::Moved => TouchPhase::Moved,
        WinitTouchPhase::Ended => TouchPhase::Ended,
        WinitTouchPhase::Cancelled => TouchPhase::Cancelled,
    };
    TouchEvent::new(TouchId(touch.id), phase, position)
}

/// Converts a physical window position to logical pixels.
///
/// Also useful to hosts that synthesize touch events from other pointer
/// input (e.g. mouse emulation).
pub fn to_logical_vec2(window: &Window, pos: PhysicalPosition<f64>) -> Vec2 {
    let scale = window.scale_factor();
    let logical = pos.to_logical::<f64>(scale);
    Vec2::new(logical.x as f32, logical.y as f32)
}
