//! The top-level view-state machine.
//!
//! [`ViewState`] holds everything the page needs to render: the active
//! section, the menu, the drag gesture, and the experience browser. Event
//! handlers call the named transitions below; transitions that require the
//! host to touch the DOM return an [`Action`] for it to carry out.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::drag::DragState;
use crate::experience::{Experience, ExperienceTab};
use crate::section::SectionId;

/// Scroll offset (px) past which the navbar draws its scrolled backdrop.
pub const NAVBAR_SHADE_Y: f64 = 50.0;

/// Actions returned from transitions for the host to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do.
    None,
    /// Smooth-scroll the viewport to a section's anchor element.
    ScrollTo(SectionId),
}

/// Complete view state of the page.
///
/// All fields are plain data; the struct is cheap to clone into a reactive
/// signal and carries no DOM handles, so every transition is testable
/// natively.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// Section currently on screen, per the scroll-spy. Drives the navbar
    /// headline. Defaults to the first section.
    pub active: SectionId,
    /// The window has scrolled past [`NAVBAR_SHADE_Y`].
    pub scrolled: bool,
    /// The dropdown navigation menu is open.
    pub menu_open: bool,
    /// Drag-to-contact gesture state.
    pub drag: DragState,
    /// Which experience tab is showing.
    pub tab: ExperienceTab,
    /// Experience open in the detail modal, if any. At most one.
    pub selected: Option<Experience>,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Scroll-spy ---

    /// A section crossed into the observer's active band. When one callback
    /// batch reports several sections, callers apply entries in delivery
    /// order, so the last one reported wins.
    pub fn section_entered(&mut self, section: SectionId) {
        self.active = section;
    }

    /// The navbar headline for the active section.
    #[must_use]
    pub fn active_title(&self) -> &'static str {
        self.active.title()
    }

    /// Track window scroll for the navbar backdrop.
    pub fn window_scrolled(&mut self, y: f64) {
        self.scrolled = y > NAVBAR_SHADE_Y;
    }

    // --- Navigation menu ---

    /// Open the menu if closed, close it if open.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the menu. No-op when already closed.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A menu entry was chosen. The menu always closes; if the label names
    /// a section the host is asked to scroll to it, otherwise (unknown
    /// labels, non-scroll entries) nothing further happens.
    pub fn select_destination(&mut self, label: &str) -> Action {
        self.menu_open = false;
        match SectionId::from_label(label) {
            Some(section) => Action::ScrollTo(section),
            None => Action::None,
        }
    }

    // --- Drag gesture ---

    /// Pointer-down on the drag handle.
    pub fn drag_start(&mut self) {
        self.drag.begin();
    }

    /// Pointer movement while the handle is held.
    pub fn drag_move(&mut self, dx: f64) {
        self.drag.move_by(dx);
    }

    /// Pointer-up: at full travel this is the shortcut to the contact
    /// section. The handle snaps back either way.
    pub fn drag_release(&mut self) -> Action {
        if self.drag.release() {
            Action::ScrollTo(SectionId::Contact)
        } else {
            Action::None
        }
    }

    /// Opacity for the "Contact Me" hint next to the drag handle.
    #[must_use]
    pub fn cta_opacity(&self) -> f64 {
        self.drag.hint_opacity()
    }

    // --- Experience browser ---

    /// Switch the visible experience tab.
    pub fn select_tab(&mut self, tab: ExperienceTab) {
        self.tab = tab;
    }

    /// Open the detail modal for a record, replacing any open one.
    pub fn open_experience(&mut self, experience: Experience) {
        self.selected = Some(experience);
    }

    /// Close the detail modal. No-op when none is open.
    pub fn close_experience(&mut self) {
        self.selected = None;
    }
}
