//! View-state engine for the portfolio single-page app.
//!
//! This crate is the browser-free core of the site: every stateful behavior
//! the page has (scroll-spy section tracking, the dropdown navigation menu,
//! the drag-to-contact gesture, the experience browser and its modal) is
//! modeled here as plain data plus named transitions. The host crate wires
//! DOM events to these transitions and carries out the [`engine::Action`]s
//! they return; nothing in here touches `web-sys`, so the whole state machine
//! is tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::ViewState`] and the transition API |
//! | [`section`] | Page sections: ordering, anchors, menu labels, titles |
//! | [`drag`] | The drag-to-contact gesture state and clamping rules |
//! | [`experience`] | Experience records, tabs, and the modal selection |

pub mod drag;
pub mod engine;
pub mod experience;
pub mod section;
