use std::collections::BTreeMap;

use crate::coords::Vec2;

use super::types::{Touch, TouchId};

/// The set of currently-active touches, keyed by stable identifier.
///
/// Membership is a set: inserting an id that is already present only updates
/// its position. Iteration order is identifier order, which is what keeps
/// "point A" and "point B" of a two-finger gesture from swapping between
/// frames — identity, not screen position, decides which finger is which.
#[derive(Debug, Default, Clone)]
pub struct TouchState {
    touches: BTreeMap<TouchId, Vec2>,
}

impl TouchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or repositions a touch. Returns true if the id was new.
    pub fn upsert(&mut self, touch: Touch) -> bool {
        self.touches.insert(touch.id, touch.position).is_none()
    }

    /// Removes a touch. Returns true if it was present.
    pub fn remove(&mut self, id: TouchId) -> bool {
        self.touches.remove(&id).is_some()
    }

    pub fn clear(&mut self) {
        self.touches.clear();
    }

    pub fn len(&self) -> usize {
        self.touches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    pub fn contains(&self, id: TouchId) -> bool {
        self.touches.contains_key(&id)
    }

    pub fn position(&self, id: TouchId) -> Option<Vec2> {
        self.touches.get(&id).copied()
    }

    /// The positions of the first two touches, in identifier order.
    ///
    /// Touches beyond the second are tracked but never contribute to
    /// gesture parameters.
    pub fn primary_points(&self) -> (Option<Vec2>, Option<Vec2>) {
        let mut it = self.touches.values().copied();
        (it.next(), it.next())
    }

    /// Unweighted average of the first two touch positions.
    pub fn centroid(&self) -> Option<Vec2> {
        match self.primary_points() {
            (Some(a), Some(b)) => Some((a + b) / 2.0),
            (Some(a), None) => Some(a),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(id: u64, x: f32, y: f32) -> Touch {
        Touch::new(TouchId(id), Vec2::new(x, y))
    }

    #[test]
    fn upsert_is_set_membership() {
        let mut s = TouchState::new();
        assert!(s.upsert(touch(1, 0.0, 0.0)));
        assert!(!s.upsert(touch(1, 5.0, 5.0)));
        assert_eq!(s.len(), 1);
        assert_eq!(s.position(TouchId(1)), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut s = TouchState::new();
        s.upsert(touch(1, 0.0, 0.0));
        assert!(!s.remove(TouchId(2)));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn primary_points_follow_identifier_order() {
        let mut s = TouchState::new();
        // Inserted high id first; identifier order must win regardless.
        s.upsert(touch(7, 100.0, 0.0));
        s.upsert(touch(3, 0.0, 0.0));
        let (a, b) = s.primary_points();
        assert_eq!(a, Some(Vec2::new(0.0, 0.0)));
        assert_eq!(b, Some(Vec2::new(100.0, 0.0)));
    }

    #[test]
    fn primary_points_ignore_third_touch() {
        let mut s = TouchState::new();
        s.upsert(touch(1, 0.0, 0.0));
        s.upsert(touch(2, 10.0, 0.0));
        s.upsert(touch(3, 500.0, 500.0));
        let (a, b) = s.primary_points();
        assert_eq!(a, Some(Vec2::new(0.0, 0.0)));
        assert_eq!(b, Some(Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn centroid_of_one_touch_is_that_touch() {
        let mut s = TouchState::new();
        s.upsert(touch(1, 4.0, 6.0));
        assert_eq!(s.centroid(), Some(Vec2::new(4.0, 6.0)));
    }

    #[test]
    fn centroid_of_two_touches_is_midpoint() {
        let mut s = TouchState::new();
        s.upsert(touch(1, 0.0, 0.0));
        s.upsert(touch(2, 10.0, 20.0));
        assert_eq!(s.centroid(), Some(Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn centroid_empty_is_none() {
        assert_eq!(TouchState::new().centroid(), None);
    }
}
