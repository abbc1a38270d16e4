//! Section components for the single-page portfolio.

pub mod contact;
pub mod count_up;
pub mod experience_card;
pub mod experience_modal;
pub mod experiences;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;
