use super::Vec2;

/// A 2D similarity transform: uniform scale, rotation, and translation.
///
/// Immutable value type. Gesture tracking produces one of these per frame;
/// hosts apply it to whatever object is being manipulated, either through
/// [`Transform::apply`] or by reading the components directly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    /// Uniform scale factor.
    pub scale: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// Translation in logical pixels.
    pub translation: Vec2,
}

impl Transform {
    /// The neutral transform: scale 1, rotation 0, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation: 0.0,
        translation: Vec2::zero(),
    };

    #[inline]
    pub const fn new(scale: f32, rotation: f32, translation: Vec2) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.scale.is_finite() && self.rotation.is_finite() && self.translation.is_finite()
    }

    /// Maps a point: rotates and scales about the origin, then translates.
    pub fn apply(self, p: Vec2) -> Vec2 {
        let (sin, cos) = self.rotation.sin_cos();
        let rotated = Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
        rotated * self.scale + self.translation
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn identity_maps_points_to_themselves() {
        let p = Vec2::new(3.0, -7.5);
        assert_eq!(Transform::IDENTITY.apply(p), p);
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform::default(), Transform::IDENTITY);
    }

    #[test]
    fn apply_rotates_then_translates() {
        // Quarter turn maps +X onto +Y (top-left origin, +Y down).
        let t = Transform::new(1.0, FRAC_PI_2, Vec2::new(5.0, 0.0));
        assert!(close(t.apply(Vec2::new(1.0, 0.0)), Vec2::new(5.0, 1.0)));
    }

    #[test]
    fn apply_scales_about_origin() {
        let t = Transform::new(2.0, 0.0, Vec2::zero());
        assert!(close(t.apply(Vec2::new(3.0, 4.0)), Vec2::new(6.0, 8.0)));
    }
}
