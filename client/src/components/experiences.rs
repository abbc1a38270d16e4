//! Tabbed experience browser.

use leptos::prelude::*;

use viewstate::engine::ViewState;
use viewstate::experience::ExperienceTab;
use viewstate::section::SectionId;

use crate::components::experience_card::ExperienceCard;
use crate::content;

#[component]
pub fn ExperiencesSection() -> impl IntoView {
    let state = expect_context::<RwSignal<ViewState>>();

    let tab_item = move |tab: ExperienceTab| {
        let is_active = move || state.with(|s| s.tab == tab);
        view! {
            <li class:active=is_active on:click=move |_| state.update(|s| s.select_tab(tab))>
                {tab.label()}
            </li>
        }
    };

    view! {
        <section class="experiences" id=SectionId::Experiences.anchor()>
            <div class="experiences-navbar">
                <ul>
                    {tab_item(ExperienceTab::Organization)}
                    {tab_item(ExperienceTab::Professional)}
                </ul>
            </div>

            <div class="experiences-content">
                {move || {
                    content::experiences_for(state.with(|s| s.tab))
                        .into_iter()
                        .map(|record| view! { <ExperienceCard experience=record/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
