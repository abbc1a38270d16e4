//! The single portfolio page.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use viewstate::engine::ViewState;

use crate::components::contact::ContactSection;
use crate::components::experience_modal::ExperienceModal;
use crate::components::experiences::ExperiencesSection;
use crate::components::footer::Footer;
use crate::components::hero::HeroSection;
use crate::components::navbar::Navbar;
use crate::components::projects::ProjectsSection;
use crate::components::skills::SkillsSection;
#[cfg(feature = "hydrate")]
use crate::util::observer::SectionObserver;

/// Portfolio page: fixed navbar, five observed sections in scroll order,
/// footer, and the experience modal hosted at the root so only one can
/// ever be open.
#[component]
pub fn HomePage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let state = expect_context::<RwSignal<ViewState>>();

        // Section observer, attached once the sections are in the DOM.
        let observer_slot: Rc<RefCell<Option<SectionObserver>>> = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&observer_slot);
        Effect::new(move || {
            if slot.borrow().is_some() {
                return;
            }
            *slot.borrow_mut() = SectionObserver::observe(move |section| {
                state.update(|s| s.section_entered(section));
            });
        });
        let cleanup = Rc::clone(&observer_slot);
        on_cleanup(move || {
            cleanup.borrow_mut().take();
        });
    }

    view! {
        <ExperienceModal/>
        <Navbar/>
        <HeroSection/>
        <SkillsSection/>
        <ProjectsSection/>
        <ExperiencesSection/>
        <ContactSection/>
        <Footer/>
    }
}
