//! Fixed navbar: brand, active-section headline, and the dropdown menu.
//!
//! The navbar owns two scoped listeners: a window scroll listener (backdrop
//! shading) that lives as long as the component, and a document
//! pointerdown listener (outside-click close) that is attached only while
//! the menu is open.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

use viewstate::engine::{Action, ViewState};
use viewstate::section::SectionId;

use crate::content;
#[cfg(feature = "hydrate")]
use crate::util::listener::{EventListener, event_hits};
use crate::util::scroll;

/// Selector for the menu root; pointerdowns inside it never count as
/// outside clicks.
#[cfg(feature = "hydrate")]
const MENU_SELECTOR: &str = ".navbar-menu";

#[component]
pub fn Navbar() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();

    #[cfg(feature = "hydrate")]
    {
        // Window scroll shading, attached once on mount.
        let scroll_slot: Rc<RefCell<Option<EventListener>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&scroll_slot);
        Effect::new(move || {
            if slot.borrow().is_some() {
                return;
            }
            *slot.borrow_mut() = EventListener::window("scroll", move |_| {
                let y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or_default();
                state.update(|s| s.window_scrolled(y));
            });
        });
        let cleanup = Rc::clone(&scroll_slot);
        on_cleanup(move || {
            cleanup.borrow_mut().take();
        });

        // Outside-click close, attached only while the menu is open.
        let outside_slot: Rc<RefCell<Option<EventListener>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&outside_slot);
        Effect::new(move || {
            if state.with(|s| s.menu_open) {
                if slot.borrow().is_some() {
                    return;
                }
                *slot.borrow_mut() = EventListener::document("pointerdown", move |ev| {
                    if !event_hits(&ev, MENU_SELECTOR) {
                        state.update(|s| s.close_menu());
                    }
                });
            } else {
                slot.borrow_mut().take();
            }
        });
        let cleanup = Rc::clone(&outside_slot);
        on_cleanup(move || {
            cleanup.borrow_mut().take();
        });
    }

    let on_toggle = move |_| state.update(|s| s.toggle_menu());
    let on_select = move |label: &'static str| {
        let mut action = Action::None;
        state.update(|s| action = s.select_destination(label));
        scroll::apply(action);
    };

    view! {
        <section class="navbar" class:scrolled=move || state.with(|s| s.scrolled)>
            <div class="navbar-name">
                <span class="navbar-dot"></span>
                <h1>"CICUUUT"</h1>
            </div>
            <div class="navbar-section-title">
                <h2>{move || state.with(|s| s.active_title())}</h2>
            </div>
            <div class="navbar-menu-section">
                <div class="navbar-menu">
                    <button class="navbar-menu-button" on:click=on_toggle>
                        "Menu"
                    </button>
                    <Show when=move || state.with(|s| s.menu_open)>
                        <ul class="dropdown-menu">
                            {SectionId::ALL
                                .iter()
                                .map(|section| {
                                    let label = section.label();
                                    view! { <li on:click=move |_| on_select(label)>{label}</li> }
                                })
                                .collect::<Vec<_>>()}
                            <li class="download-cv">
                                <a href=content::CV_HREF download="cv">
                                    "Download CV"
                                </a>
                            </li>
                        </ul>
                    </Show>
                </div>
            </div>
        </section>
    }
}
