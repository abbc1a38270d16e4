//! Single experience entry, clickable to open the detail modal.

use leptos::prelude::*;

use viewstate::engine::ViewState;
use viewstate::experience::Experience;

#[component]
pub fn ExperienceCard(experience: Experience) -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();

    let on_click = {
        let record = experience.clone();
        move |_| state.update(|s| s.open_experience(record.clone()))
    };
    let on_keydown = {
        let record = experience.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" || ev.key() == " " {
                ev.prevent_default();
                state.update(|s| s.open_experience(record.clone()));
            }
        }
    };

    view! {
        <div
            class="experience-card"
            role="button"
            tabindex="0"
            on:click=on_click
            on:keydown=on_keydown
        >
            <h4 class="experience-card-title">{experience.position.clone()}</h4>
            <h5 class="experience-card-subtitle">
                {experience.organization.clone()}
                ", "
                <span class="experience-card-year">{experience.year.clone()}</span>
            </h5>
            <p class="experience-card-desc">{experience.description.clone()}</p>
        </div>
    }
}
