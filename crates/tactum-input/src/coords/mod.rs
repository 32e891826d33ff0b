//! Coordinate and transform value types shared across the crate.
//!
//! Canonical space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//! - Rotations in radians, positive clockwise in this space
//!
//! Platform adapters convert physical coordinates before events enter here.

mod transform;
mod vec2;

pub use transform::Transform;
pub use vec2::Vec2;
