//! Landing hero: intro copy, the drag-to-contact handle, portrait, animated
//! figures, and the four service blurbs.
//!
//! The drag handle arms on pointerdown; window pointermove/pointerup
//! listeners are attached only while a drag is in progress and are dropped
//! when it ends, so a handle at rest costs nothing.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use viewstate::engine::ViewState;
#[cfg(feature = "hydrate")]
use viewstate::engine::Action;
use viewstate::section::SectionId;

use crate::components::count_up::CountUp;
use crate::content;
#[cfg(feature = "hydrate")]
use crate::util::listener::EventListener;
#[cfg(feature = "hydrate")]
use crate::util::scroll;

#[component]
pub fn HeroSection() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();

    #[cfg(feature = "hydrate")]
    {
        // Move/up listeners live only while a drag is in progress.
        let drag_slot: Rc<RefCell<Option<(EventListener, EventListener)>>> =
            Rc::new(RefCell::new(None));
        let slot = Rc::clone(&drag_slot);
        Effect::new(move || {
            if state.with(|s| s.drag.dragging) {
                if slot.borrow().is_some() {
                    return;
                }
                let on_move = EventListener::window("pointermove", move |ev| {
                    let ev = ev.unchecked_into::<web_sys::PointerEvent>();
                    state.update(|s| s.drag_move(f64::from(ev.movement_x())));
                });
                let on_up = EventListener::window("pointerup", move |_| {
                    let mut action = Action::None;
                    state.update(|s| action = s.drag_release());
                    scroll::apply(action);
                });
                if let (Some(on_move), Some(on_up)) = (on_move, on_up) {
                    *slot.borrow_mut() = Some((on_move, on_up));
                }
            } else {
                slot.borrow_mut().take();
            }
        });
        let cleanup = Rc::clone(&drag_slot);
        on_cleanup(move || {
            cleanup.borrow_mut().take();
        });
    }

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        state.update(|s| s.drag_start());
    };
    let handle_style = move || format!("transform: translateX({}px)", state.with(|s| s.drag.offset));
    let hint_style = move || format!("opacity: {}", state.with(|s| s.cta_opacity()));
    let dragging = move || state.with(|s| s.drag.dragging);

    view! {
        <section class="home" id=SectionId::Home.anchor()>
            <div class="home-1">
                <div class="home-about-me">
                    <h1>
                        "Hi, " <span class="home-about-me-name">
                            "I'm " <span class="home-about-me-cica">"Cica"</span>
                        </span>
                    </h1>
                    <p>
                        "A passionate " <span class="home-about-web-dev">"Web Developer"</span>
                        " and " <b>"Informatics undergraduate"</b>
                        " focused on building intuitive and " <b>"creative web"</b> " and "
                        <b>"mobile apps"</b> ". My coursework in " <b>"cybersecurity"</b>
                        " also gives me a strong foundation in building apps that are not only "
                        "engaging but also secure."
                    </p>
                    <div class="home-about-me-tagline">
                        <p>
                            "Always learning, always exploring. Let's connect and create "
                            "something meaningful!"
                        </p>
                        <div class="home-about-me-contact-me">
                            <button
                                class="drag-handle"
                                class:grabbing=dragging
                                style=handle_style
                                on:pointerdown=on_pointer_down
                                aria-label="Drag right to jump to the contact section"
                            >
                                "\u{2192}"
                            </button>
                            <span class="contact-me-text" style=hint_style>
                                "Contact Me"
                            </span>
                        </div>
                    </div>
                </div>

                <div class="home-image">
                    <img src=content::SELF_IMAGE class="self-image" alt="Portrait of Cica"/>
                </div>

                <div class="home-numbers">
                    {content::counters()
                        .into_iter()
                        .map(|figure| {
                            let label = figure.label;
                            view! {
                                <div>
                                    <h4>
                                        <CountUp target=figure.target decimals=figure.decimals/>
                                    </h4>
                                    <p>{label}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="about-me-works">
                <div class="web-development">
                    <h2>"Web Development"</h2>
                    <p>
                        "build responsive, secure, and user-centric web applications, turning "
                        "complex ideas into clean, functional, and scalable code."
                    </p>
                </div>
                <div class="mobile-development">
                    <h2>"Mobile Development"</h2>
                    <p>
                        "create high-performance, intuitive mobile apps for Android, focusing on "
                        "a clean UI and a seamless user experience."
                    </p>
                </div>
                <div class="risk-assessment">
                    <h2>"Risk Assessment"</h2>
                    <p>
                        "identify, analyze, and mitigate digital threats. Find system "
                        "vulnerabilities and provide clear strategies to strengthen security."
                    </p>
                </div>
                <div class="digital-forensic">
                    <h2>"Digital Forensic"</h2>
                    <p>
                        "investigate security incidents to find the \"what, where, and how.\" "
                        "Trace breaches and analyze digital evidence to provide clear answers."
                    </p>
                </div>
            </div>
        </section>
    }
}
