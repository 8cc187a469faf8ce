//! Per-gesture drag phase tracking.
//!
//! # Responsibility
//! - Model the transient phase of one drag gesture from start to
//!   drop-or-cancel.
//!
//! # Invariants
//! - Phase state never outlives the gesture; drop and cancel both return
//!   to `Idle`.
//! - Events that are invalid for the current phase leave it unchanged.

/// Phase of the current drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging, pointer not over a drop target.
    Dragging,
    /// Dragging, pointer over an accepting drop target.
    OverTarget,
}

/// Observed gesture events, as reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragGestureEvent {
    /// Drag started on a source row.
    Started,
    /// Pointer entered an accepting drop target.
    EnteredTarget,
    /// Pointer left the drop target.
    LeftTarget,
    /// Payload was dropped.
    Dropped,
    /// Gesture was cancelled by the platform.
    Cancelled,
}

/// Phase tracker for one gesture at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragGesture {
    phase: DragPhase,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Applies one gesture event and returns the resulting phase.
    pub fn apply(&mut self, event: DragGestureEvent) -> DragPhase {
        self.phase = match (self.phase, event) {
            (DragPhase::Idle, DragGestureEvent::Started) => DragPhase::Dragging,
            (DragPhase::Dragging, DragGestureEvent::EnteredTarget) => DragPhase::OverTarget,
            (DragPhase::OverTarget, DragGestureEvent::LeftTarget) => DragPhase::Dragging,
            (
                DragPhase::Dragging | DragPhase::OverTarget,
                DragGestureEvent::Dropped | DragGestureEvent::Cancelled,
            ) => DragPhase::Idle,
            // Invalid for the current phase: keep it.
            (phase, _) => phase,
        };
        self.phase
    }
}
