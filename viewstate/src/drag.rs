//! The drag-to-contact gesture on the hero section.
//!
//! The hero shows a handle the visitor can drag horizontally. The offset is
//! clamped to `0..=MAX_DRAG`; dragging it all the way and letting go is the
//! "take me to the contact section" gesture. Whatever the outcome, release
//! snaps the handle back to the start. A hint label next to the handle fades
//! out linearly as the handle travels.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

/// Horizontal travel of the drag handle, in pixels. Releasing at this offset
/// triggers the scroll to the contact section.
pub const MAX_DRAG: f64 = 100.0;

/// State of the drag gesture between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Current handle offset in `0.0..=MAX_DRAG`.
    pub offset: f64,
    /// A pointer-down has been seen and pointer-up has not.
    pub dragging: bool,
}

impl DragState {
    /// Start tracking a drag. The offset keeps its current value; movement
    /// is applied relative to it.
    pub fn begin(&mut self) {
        self.dragging = true;
    }

    /// Apply a pointer movement delta. Ignored unless a drag is in progress;
    /// the resulting offset is clamped to `0.0..=MAX_DRAG`.
    pub fn move_by(&mut self, dx: f64) {
        if self.dragging {
            self.offset = (self.offset + dx).clamp(0.0, MAX_DRAG);
        }
    }

    /// End the drag. Returns `true` when the handle was released at full
    /// travel (`offset >= MAX_DRAG`). The offset snaps back to zero whether
    /// or not the gesture triggered. A release with no drag in progress is
    /// a no-op.
    pub fn release(&mut self) -> bool {
        if !self.dragging {
            return false;
        }
        let triggered = self.offset >= MAX_DRAG;
        self.offset = 0.0;
        self.dragging = false;
        triggered
    }

    /// Opacity of the hint label: fades from 1.0 at rest to 0.0 at full travel.
    #[must_use]
    pub fn hint_opacity(self) -> f64 {
        1.0 - self.offset / MAX_DRAG
    }
}
