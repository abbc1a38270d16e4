//! Project showcase cards with a hover/tap detail overlay.

use leptos::prelude::*;

use viewstate::section::SectionId;

use crate::content::{self, Project};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section class="projects" id=SectionId::Projects.anchor()>
            <div class="projects-showcase">
                {content::PROJECTS
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

/// One showcase card. The detail overlay shows while hovered, and a tap
/// toggles it where hover does not exist.
#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let hovered = RwSignal::new(false);

    view! {
        <div
            class="work"
            class:hover=move || hovered.get()
            on:click=move |_| hovered.update(|h| *h = !*h)
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div class="project">
                <img src=project.image alt=project.title class="project-img"/>
                <div class="project-brief">
                    <h3>{project.title}</h3>
                    <p>{project.brief}</p>
                </div>
                <div class="detail">
                    <h3>{project.title}</h3>
                    <p class="project-desc">{project.description}</p>
                    <a
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=move |ev| ev.stop_propagation()
                    >
                        "View on GitHub"
                    </a>
                </div>
            </div>
        </div>
    }
}
