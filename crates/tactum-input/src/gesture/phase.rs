use std::fmt;

/// State of a continuous gesture.
///
/// `Possible → Began → Changed → Ended` is the normal path; `Failed` is the
/// terminal state after host-driven cancellation and holds until the next
/// gesture begins from zero touches.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GesturePhase {
    /// At rest; no touches tracked.
    Possible,
    /// First touch of a fresh gesture landed.
    Began,
    /// At least one tracked touch has moved since `Began`.
    Changed,
    /// The last touch lifted cleanly.
    Ended,
    /// The host cancelled the gesture.
    Failed,
}

impl GesturePhase {
    /// True while the gesture is in progress (`Began` or `Changed`).
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, GesturePhase::Began | GesturePhase::Changed)
    }
}

impl fmt::Display for GesturePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
