//! Tactum input crate.
//!
//! Platform-agnostic touch events plus a transformation-gesture tracker that
//! turns one or two live touches into a composed pan / pinch / rotate
//! transform. Hosts translate their window-system events into `TouchEvent`s
//! (a winit adapter is provided) and read the composed transform back.

pub mod coords;
pub mod gesture;
pub mod input;

pub mod logging;
