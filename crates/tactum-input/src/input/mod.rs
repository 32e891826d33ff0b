//! Touch input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Host code is responsible for translating window-system events into
//! `TouchEvent`s; an adapter for winit lives in `platform`.

mod state;
mod types;

pub mod platform;

pub use state::TouchState;
pub use types::{Touch, TouchEvent, TouchId, TouchPhase};
