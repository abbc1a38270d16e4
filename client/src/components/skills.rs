//! Technology grid and soft-skill hashtags.

use leptos::prelude::*;

use viewstate::section::SectionId;

use crate::content;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section class="skills" id=SectionId::Skills.anchor()>
            <div class="skills-image">
                {content::SKILLS
                    .into_iter()
                    .map(|skill| {
                        view! {
                            <div class="skill-item" title=skill.title>
                                <img src=skill.image alt=format!("{} logo", skill.title)/>
                                <p class="skill-title">{skill.title}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <h1>"Soft Skills"</h1>
            <div class="soft-skills">
                {content::SOFT_SKILLS
                    .into_iter()
                    .enumerate()
                    .map(|(i, tag)| {
                        let tone = if i % 2 == 0 { "soft-skills-a" } else { "soft-skills-b" };
                        view! { <h4 class=tone>{tag}</h4> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
