//! # client
//!
//! Leptos + WASM frontend for the portfolio single-page site.
//!
//! This crate contains the page, section components, shared reactive state,
//! the contact-form network call, and the DOM glue (scroll-spy observer,
//! scoped event listeners, smooth scrolling). All view-state logic lives in
//! the browser-free `viewstate` crate; components call its transitions and
//! carry out the actions they return.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
