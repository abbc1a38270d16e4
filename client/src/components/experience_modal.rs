//! Detail modal for the currently selected experience.
//!
//! Rendered once near the app root so at most one modal exists. Clicking
//! the backdrop or the close button, or pressing Escape with the dialog
//! focused, clears the selection.

use leptos::prelude::*;

use viewstate::engine::ViewState;
use viewstate::experience::display_src;

#[component]
pub fn ExperienceModal() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();

    let close = move || state.update(|s| s.close_experience());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    move || {
        state.with(|s| s.selected.clone()).map(|experience| {
            view! {
                <div class="modal-backdrop" on:click=move |_| close()>
                    <div
                        class="modal-content"
                        tabindex="0"
                        on:click=|ev| ev.stop_propagation()
                        on:keydown=on_keydown
                    >
                        <button class="modal-close-btn" aria-label="Close" on:click=move |_| close()>
                            "\u{d7}"
                        </button>
                        <h3 class="modal-title">{experience.position.clone()}</h3>
                        <p class="modal-subtitle">{experience.subtitle()}</p>
                        <div class="modal-description-section">
                            <p class="modal-description-text">{experience.description.clone()}</p>
                        </div>
                        <div class="modal-images-grid">
                            {experience
                                .images
                                .iter()
                                .enumerate()
                                .map(|(i, url)| {
                                    let alt = format!("{} photo {}", experience.position, i + 1);
                                    view! {
                                        <div class="modal-image-item">
                                            <img
                                                class="modal-image"
                                                src=display_src(url).to_owned()
                                                alt=alt
                                                on:error=swap_broken_image
                                            />
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            }
        })
    }
}

/// Replaces an image that failed to load with the broken-image placeholder.
/// Leaves the placeholder alone if it is the one that failed, so a dead
/// placeholder host cannot retrigger the handler forever.
#[cfg(feature = "hydrate")]
fn swap_broken_image(ev: leptos::ev::ErrorEvent) {
    use wasm_bindgen::JsCast;

    use viewstate::experience::BROKEN_IMAGE_SRC;

    let Some(img) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
    else {
        return;
    };
    if img.src() != BROKEN_IMAGE_SRC {
        img.set_src(BROKEN_IMAGE_SRC);
    }
}

#[cfg(not(feature = "hydrate"))]
fn swap_broken_image(ev: leptos::ev::ErrorEvent) {
    let _ = ev;
}
