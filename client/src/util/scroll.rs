//! Smooth scrolling to section anchors and engine action dispatch.

use viewstate::engine::Action;
use viewstate::section::SectionId;

/// Carry out an action returned by a view-state transition.
pub fn apply(action: Action) {
    match action {
        Action::None => {}
        Action::ScrollTo(section) => scroll_to(section),
    }
}

/// Smooth-scroll the viewport to a section's anchor element.
///
/// No-op on the server; logs and returns when the anchor is missing from
/// the document.
pub fn scroll_to(section: SectionId) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.anchor()))
        else {
            leptos::logging::warn!("scroll target missing: #{}", section.anchor());
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
    }
}
