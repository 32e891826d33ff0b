use crate::coords::Vec2;

/// Stable identifier for one finger over its whole contact lifetime.
///
/// The host must guarantee the id does not change between the touch's
/// `Started` and `Ended`/`Cancelled` events. Window systems expose this
/// directly (winit's `Touch::id`, evdev tracking ids, browser
/// `Touch.identifier`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TouchId(pub u64);

/// Lifecycle phase of a single touch event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    /// The system took the touch away (e.g. a window-manager gesture).
    Cancelled,
}

/// One finger's identity and position in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Touch {
    pub id: TouchId,
    pub position: Vec2,
}

impl Touch {
    #[inline]
    pub const fn new(id: TouchId, position: Vec2) -> Self {
        Self { id, position }
    }
}

/// Platform-agnostic touch event emitted by the host.
///
/// `Cancelled` events carry the last known position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchEvent {
    pub touch: Touch,
    pub phase: TouchPhase,
}

impl TouchEvent {
    #[inline]
    pub const fn new(id: TouchId, phase: TouchPhase, position: Vec2) -> Self {
        Self {
            touch: Touch::new(id, position),
            phase,
        }
    }
}
