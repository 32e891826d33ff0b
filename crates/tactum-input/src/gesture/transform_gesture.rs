use std::f32::consts::PI;

use log::trace;

use crate::coords::{Transform, Vec2};
use crate::input::{Touch, TouchEvent, TouchPhase, TouchState};

use super::phase::GesturePhase;

/// Tracks one or two live touches and derives a composed 2D transform
/// (translation, rotation, uniform scale) from them.
///
/// The tracker is driven by the host's touch lifecycle — either the
/// `touches_began` / `touches_moved` / `touches_ended` handlers with batches
/// of touches, or [`apply_event`](Self::apply_event) with single events.
/// It owns no resources and performs no work outside those calls; call it
/// from whatever thread delivers input events.
///
/// Set [`set_starting_transform`](Self::set_starting_transform) before a
/// gesture begins to continue manipulating an already-transformed object;
/// read [`transform`](Self::transform) for the composed result.
///
/// Only the first two touches in identifier order contribute to the derived
/// parameters. All not-yet-known values fall back to neutral defaults
/// (scale 1, rotation 0, zero translation); no operation can fail.
#[derive(Debug, Clone)]
pub struct TransformGesture {
    starting_transform: Transform,
    phase: GesturePhase,
    touches: TouchState,

    /// Correction subtracted from the raw touch centroid so the reported
    /// location does not jump when the active touch count changes.
    pan_offset: Vec2,

    starting_distance: Option<f32>,
    starting_rotation: Option<f32>,
    starting_location: Option<Vec2>,

    current_distance: Option<f32>,
    current_rotation: Option<f32>,
    current_location: Option<Vec2>,

    /// Rotation / scale carried over from before the second finger lifted,
    /// so re-applying a finger resumes where the gesture left off.
    finger_lift_rotation: f32,
    finger_lift_scale: f32,

    last_touch_count: usize,
}

impl TransformGesture {
    pub fn new() -> Self {
        Self::with_starting_transform(Transform::IDENTITY)
    }

    pub fn with_starting_transform(starting_transform: Transform) -> Self {
        Self {
            starting_transform,
            phase: GesturePhase::Possible,
            touches: TouchState::new(),
            pan_offset: Vec2::zero(),
            starting_distance: None,
            starting_rotation: None,
            starting_location: None,
            current_distance: None,
            current_rotation: None,
            current_location: None,
            finger_lift_rotation: 0.0,
            finger_lift_scale: 1.0,
            last_touch_count: 0,
        }
    }

    /// The transform the gesture composes onto. Takes effect at the start
    /// of the next gesture when changed mid-gesture.
    pub fn starting_transform(&self) -> Transform {
        self.starting_transform
    }

    pub fn set_starting_transform(&mut self, transform: Transform) {
        self.starting_transform = transform;
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Net translation of the gesture, zero until known.
    pub fn translation(&self) -> Vec2 {
        self.current_location.unwrap_or(Vec2::zero())
            - self.starting_location.unwrap_or(Vec2::zero())
    }

    /// Net rotation of the gesture in radians, including carry-over from
    /// any earlier two-finger stretch of the same gesture.
    pub fn rotation(&self) -> f32 {
        self.current_rotation.unwrap_or(0.0) - self.starting_rotation.unwrap_or(0.0)
            + self.finger_lift_rotation
    }

    /// Net scale factor of the gesture. Defaults keep this total: with no
    /// second finger both distances read as 1, so there is no division by
    /// zero and the factor stays at the carried-over value.
    pub fn scale(&self) -> f32 {
        (self.current_distance.unwrap_or(1.0) / self.starting_distance.unwrap_or(1.0))
            * self.finger_lift_scale
    }

    /// The gesture's deltas composed onto the starting transform.
    pub fn transform(&self) -> Transform {
        Transform::new(
            self.starting_transform.scale * self.scale(),
            self.starting_transform.rotation + self.rotation(),
            self.starting_transform.translation + self.translation(),
        )
    }

    /// Handles new touches landing.
    ///
    /// The first touch after the tracker was empty starts a fresh gesture
    /// (prior state is reset) and returns `Some(GesturePhase::Began)`,
    /// exactly once per gesture.
    pub fn touches_began(&mut self, new_touches: &[Touch]) -> Option<GesturePhase> {
        let fresh = self.touches.is_empty();
        if fresh {
            self.reset();
        }

        for touch in new_touches {
            self.touches.upsert(*touch);
        }

        // If the touch count changed, remember where the gesture was so the
        // pan offset can absorb the centroid shift the extra finger causes.
        let last_location = if self.last_touch_count != self.touches.len() {
            self.current_location
        } else {
            None
        };

        self.find_parameters();

        if let (Some(last), Some(centroid)) = (last_location, self.touches.centroid()) {
            self.pan_offset = centroid - last;
        }

        self.init_starting_values();

        if fresh {
            self.phase = GesturePhase::Began;
            trace!("gesture began");
            Some(GesturePhase::Began)
        } else {
            None
        }
    }

    /// Handles touch movement and returns the updated composed transform.
    ///
    /// Touches not seen before are added here too; a second finger that
    /// first shows up in a move event still initializes the pinch/rotate
    /// starting values.
    pub fn touches_moved(&mut self, moved_touches: &[Touch]) -> Transform {
        for touch in moved_touches {
            self.touches.upsert(*touch);
        }

        self.find_parameters();
        self.init_starting_values();

        if self.phase.is_active() {
            self.phase = GesturePhase::Changed;
        }

        self.transform()
    }

    /// Handles touches lifting.
    ///
    /// When exactly one touch remains, the current rotation and scale are
    /// frozen into carry-over values and the two-finger parameters are
    /// cleared, so a re-applied second finger resumes from them. Returns
    /// `Some(GesturePhase::Ended)` when the last touch lifts (unless the
    /// gesture had already failed).
    pub fn touches_ended(&mut self, ended_touches: &[Touch]) -> Option<GesturePhase> {
        for touch in ended_touches {
            self.touches.remove(touch.id);
        }

        if self.touches.len() == 1 {
            let (remaining, _) = self.touches.primary_points();
            if let (Some(remaining), Some(current)) = (remaining, self.current_location) {
                // Anchor the pan to the finger still on screen.
                self.pan_offset = remaining - current;

                self.finger_lift_rotation = self.rotation();
                self.finger_lift_scale = self.scale();

                self.current_rotation = None;
                self.starting_rotation = None;
                self.current_distance = None;
                self.starting_distance = None;
            }
        }

        if self.touches.is_empty() && self.phase != GesturePhase::Failed {
            self.phase = GesturePhase::Ended;
            trace!("gesture ended");
            return Some(GesturePhase::Ended);
        }
        None
    }

    /// Single-event entry point; dispatches on the event's phase and
    /// returns the gesture phase transition it caused, if any.
    pub fn apply_event(&mut self, event: TouchEvent) -> Option<GesturePhase> {
        match event.phase {
            TouchPhase::Started => self.touches_began(&[event.touch]),
            TouchPhase::Moved => {
                self.touches_moved(&[event.touch]);
                None
            }
            TouchPhase::Ended => self.touches_ended(&[event.touch]),
            TouchPhase::Cancelled => {
                if self.phase == GesturePhase::Failed {
                    None
                } else {
                    self.cancel();
                    Some(GesturePhase::Failed)
                }
            }
        }
    }

    /// Host-driven cancellation: clears all state and parks the phase at
    /// `Failed` until the next gesture begins from zero touches.
    pub fn cancel(&mut self) {
        self.reset();
        self.phase = GesturePhase::Failed;
        trace!("gesture failed");
    }

    /// Clears all tracking state back to the at-rest defaults.
    pub fn reset(&mut self) {
        self.touches.clear();

        self.starting_distance = None;
        self.starting_rotation = None;
        self.starting_location = None;

        self.current_distance = None;
        self.current_rotation = None;
        self.current_location = None;

        self.finger_lift_rotation = 0.0;
        self.finger_lift_scale = 1.0;

        self.pan_offset = Vec2::zero();
        self.last_touch_count = 0;

        self.phase = GesturePhase::Possible;
    }

    /// Recomputes the derived parameters from the first two active touches.
    fn find_parameters(&mut self) {
        if let Some(centroid) = self.touches.centroid() {
            self.current_location = Some(centroid - self.pan_offset);
        }

        if let (Some(a), Some(b)) = self.touches.primary_points() {
            self.current_distance = Some(a.distance_to(b));

            let previous = self.current_rotation.unwrap_or(0.0);
            let raw = a.angle_to(b);
            self.current_rotation = Some(continuous_rotation(raw, previous));
        }

        self.last_touch_count = self.touches.len();
    }

    /// Starting values are captured lazily, from whichever event first made
    /// the corresponding current value available.
    fn init_starting_values(&mut self) {
        if self.starting_distance.is_none() {
            self.starting_distance = self.current_distance;
        }
        if self.starting_rotation.is_none() {
            self.starting_rotation = self.current_rotation;
        }
        if self.starting_location.is_none() {
            self.starting_location = self.current_location;
        }
    }
}

impl Default for TransformGesture {
    fn default() -> Self {
        Self::new()
    }
}

/// Unwraps `raw` onto the revolution closest to the previous frame's
/// rotation, keeping the reported angle continuous across the atan2 ±π
/// wrap instead of snapping back by a full turn.
///
/// Identifier ordering means the measured angle spans the full (−π, π] and
/// is never ambiguous by π, so the only equivalent representations are 2π
/// apart. Per-frame rotation faster than π still aliases.
fn continuous_rotation(raw: f32, previous: f32) -> f32 {
    let candidates = [raw, raw + 2.0 * PI, raw - 2.0 * PI];
    let mut best = candidates[0];
    for &candidate in &candidates[1..] {
        if (candidate - previous).abs() < (best - previous).abs() {
            best = candidate;
        }
    }
    best
}
