//! Continuous gesture recognition.
//!
//! [`TransformGesture`] is the one recognizer provided: it tracks up to two
//! live touches and derives a composed translation / rotation / scale from
//! them, with continuity when fingers are added or removed mid-gesture.

mod phase;
mod transform_gesture;

pub use phase::GesturePhase;
pub use transform_gesture::TransformGesture;
