//! Experience records and the tabbed browser that shows them.
//!
//! Experiences come in two flavors, organization and professional, shown
//! under two mutually exclusive tabs. Clicking a card opens a detail modal;
//! the modal is exclusive, so opening one record replaces any other. Both
//! flavors share one record shape.

#[cfg(test)]
#[path = "experience_test.rs"]
mod experience_test;

use serde::{Deserialize, Serialize};

/// Gallery source used when a record lists an image with an empty URL.
pub const MISSING_IMAGE_SRC: &str = "/placeholder.svg";

/// Gallery source swapped in when an image fails to load.
pub const BROKEN_IMAGE_SRC: &str =
    "https://placehold.co/600x400/cccccc/000000?text=Image+Not+Available";

/// Which experience list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceTab {
    /// Volunteer and committee work.
    #[default]
    Organization,
    /// Paid and titled roles.
    Professional,
}

impl ExperienceTab {
    /// The tab button text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ExperienceTab::Organization => "Organization Experiences",
            ExperienceTab::Professional => "Professional Experiences",
        }
    }
}

/// One experience entry, as shown on a card and in the detail modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// Stable id, unique across both tabs.
    pub id: u32,
    /// Role title, e.g. "Vice Project Manager".
    pub position: String,
    /// Organization or company the role was held in.
    pub organization: String,
    /// Year or year range, free-form (e.g. "2023-2024", "2025 - Present").
    pub year: String,
    /// Long-form description shown in the modal.
    pub description: String,
    /// Gallery image URLs shown in the modal.
    pub images: Vec<String>,
}

impl Experience {
    /// `"{organization} ({year})"`, the modal subtitle line.
    #[must_use]
    pub fn subtitle(&self) -> String {
        format!("{} ({})", self.organization, self.year)
    }
}

/// Resolve a gallery URL to a displayable `src`, substituting the
/// missing-image placeholder for empty URLs.
#[must_use]
pub fn display_src(url: &str) -> &str {
    if url.is_empty() { MISSING_IMAGE_SRC } else { url }
}
