//! Page sections: the fixed, ordered set of scroll targets.
//!
//! The page is a single column of five sections. Each section has a DOM
//! anchor (the element id the scroll-spy observes and `scroll_to` targets),
//! a label (the text of its navigation menu entry), and a title (what the
//! navbar headline shows while the section is on screen). The set is known
//! at compile time, so the registry is an enum rather than a runtime table.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use serde::{Deserialize, Serialize};

/// One of the page's five scroll sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    /// Landing hero with the drag-to-contact gesture.
    #[default]
    Home,
    /// Technology / skills grid.
    Skills,
    /// Project showcase cards.
    Projects,
    /// Experience browser (tabs + modal).
    Experiences,
    /// Contact form and social links; the footer.
    Contact,
}

impl SectionId {
    /// All sections in the order they appear on the page.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experiences,
        SectionId::Contact,
    ];

    /// The DOM element id this section is anchored to.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experiences => "experiences",
            SectionId::Contact => "contact-me",
        }
    }

    /// The navigation menu entry text for this section.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experiences => "Experiences",
            SectionId::Contact => "Contact me",
        }
    }

    /// The navbar headline shown while this section is active.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "Hi, I'm Cica",
            SectionId::Skills => "Technologies I've Worked With",
            SectionId::Projects => "Projects Showcase",
            SectionId::Experiences => "Where I've Made Impact",
            SectionId::Contact => "Where Can You Found Me?",
        }
    }

    /// Look a section up by its DOM anchor id.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// Look a section up by its menu label.
    ///
    /// Labels are matched exactly; entries that are not scroll destinations
    /// (e.g. the CV download link) have no section and return `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|s| s.label() == label)
    }
}
