//! Adapters translating window-system events into engine touch events.

pub mod winit;
