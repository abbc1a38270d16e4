#![allow(clippy::float_cmp)]

use super::*;
use crate::drag::MAX_DRAG;

fn vs() -> ViewState {
    ViewState::new()
}

fn exp(id: u32, position: &str) -> Experience {
    Experience {
        id,
        position: position.into(),
        organization: "PUMA IT".into(),
        year: "2024".into(),
        description: "desc".into(),
        images: vec!["/a.jpg".into()],
    }
}

/// Drive a full gesture: begin, one move of `dx`, release.
fn drag_once(state: &mut ViewState, dx: f64) -> Action {
    state.drag_start();
    state.drag_move(dx);
    state.drag_release()
}

// --- Defaults ---

#[test]
fn starts_on_first_section() {
    let s = vs();
    assert_eq!(s.active, SectionId::Home);
    assert_eq!(s.active_title(), "Hi, I'm Cica");
}

#[test]
fn starts_with_menu_closed_and_no_modal() {
    let s = vs();
    assert!(!s.menu_open);
    assert!(s.selected.is_none());
    assert_eq!(s.tab, ExperienceTab::Organization);
    assert!(!s.scrolled);
}

// --- Scroll-spy ---

#[test]
fn entering_a_section_activates_it() {
    let mut s = vs();
    s.section_entered(SectionId::Projects);
    assert_eq!(s.active, SectionId::Projects);
    assert_eq!(s.active_title(), "Projects Showcase");
}

#[test]
fn there_is_always_exactly_one_active_section() {
    let mut s = vs();
    for section in SectionId::ALL {
        s.section_entered(section);
        assert_eq!(s.active, section);
    }
}

#[test]
fn last_entered_section_wins_within_a_batch() {
    // An observer callback can report several intersecting sections at
    // once; applying them in delivery order leaves the last one active.
    let mut s = vs();
    s.section_entered(SectionId::Skills);
    s.section_entered(SectionId::Experiences);
    assert_eq!(s.active, SectionId::Experiences);
}

#[test]
fn navbar_shades_only_past_threshold() {
    let mut s = vs();
    s.window_scrolled(NAVBAR_SHADE_Y);
    assert!(!s.scrolled);
    s.window_scrolled(NAVBAR_SHADE_Y + 1.0);
    assert!(s.scrolled);
    s.window_scrolled(0.0);
    assert!(!s.scrolled);
}

// --- Navigation menu ---

#[test]
fn toggle_opens_then_closes() {
    let mut s = vs();
    s.toggle_menu();
    assert!(s.menu_open);
    s.toggle_menu();
    assert!(!s.menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut s = vs();
    s.close_menu();
    assert!(!s.menu_open);
    s.toggle_menu();
    s.close_menu();
    s.close_menu();
    assert!(!s.menu_open);
}

#[test]
fn selecting_a_destination_closes_and_scrolls() {
    let mut s = vs();
    s.toggle_menu();
    let action = s.select_destination("Projects");
    assert_eq!(action, Action::ScrollTo(SectionId::Projects));
    assert!(!s.menu_open);
}

#[test]
fn selecting_contact_me_scrolls_to_contact() {
    let mut s = vs();
    let action = s.select_destination("Contact me");
    assert_eq!(action, Action::ScrollTo(SectionId::Contact));
}

#[test]
fn unknown_destination_still_closes_the_menu() {
    let mut s = vs();
    s.toggle_menu();
    let action = s.select_destination("Download CV");
    assert_eq!(action, Action::None);
    assert!(!s.menu_open);
}

// --- Drag gesture ---

#[test]
fn full_travel_release_scrolls_to_contact() {
    let mut s = vs();
    assert_eq!(drag_once(&mut s, MAX_DRAG), Action::ScrollTo(SectionId::Contact));
}

#[test]
fn overshoot_is_clamped_and_still_triggers() {
    let mut s = vs();
    assert_eq!(drag_once(&mut s, MAX_DRAG * 10.0), Action::ScrollTo(SectionId::Contact));
}

#[test]
fn short_release_does_nothing() {
    let mut s = vs();
    assert_eq!(drag_once(&mut s, MAX_DRAG - 1.0), Action::None);
}

#[test]
fn handle_snaps_back_after_any_release() {
    let mut s = vs();
    drag_once(&mut s, 40.0);
    assert_eq!(s.drag.offset, 0.0);
    drag_once(&mut s, MAX_DRAG);
    assert_eq!(s.drag.offset, 0.0);
}

#[test]
fn release_does_not_change_the_active_section() {
    // The scroll is an Action for the host; the scroll-spy updates
    // `active` once the viewport actually arrives at the section.
    let mut s = vs();
    drag_once(&mut s, MAX_DRAG);
    assert_eq!(s.active, SectionId::Home);
}

#[test]
fn moves_without_a_drag_in_progress_are_ignored() {
    let mut s = vs();
    s.drag_move(30.0);
    assert_eq!(s.drag.offset, 0.0);
    drag_once(&mut s, 10.0);
    s.drag_move(30.0);
    assert_eq!(s.drag.offset, 0.0);
}

#[test]
fn cta_fades_with_travel() {
    let mut s = vs();
    assert_eq!(s.cta_opacity(), 1.0);
    s.drag_start();
    s.drag_move(MAX_DRAG / 4.0);
    assert_eq!(s.cta_opacity(), 0.75);
    s.drag_move(MAX_DRAG);
    assert_eq!(s.cta_opacity(), 0.0);
}

// --- Experience browser ---

#[test]
fn switching_tabs() {
    let mut s = vs();
    s.select_tab(ExperienceTab::Professional);
    assert_eq!(s.tab, ExperienceTab::Professional);
    s.select_tab(ExperienceTab::Organization);
    assert_eq!(s.tab, ExperienceTab::Organization);
}

#[test]
fn opening_a_card_selects_it() {
    let mut s = vs();
    s.open_experience(exp(3, "Liaison Officer Staff"));
    assert_eq!(s.selected.as_ref().map(|e| e.id), Some(3));
}

#[test]
fn opening_another_card_replaces_the_modal() {
    let mut s = vs();
    s.open_experience(exp(3, "Liaison Officer Staff"));
    s.open_experience(exp(14, "Vice of External Relation"));
    assert_eq!(s.selected.as_ref().map(|e| e.id), Some(14));
}

#[test]
fn closing_the_modal_clears_the_selection() {
    let mut s = vs();
    s.open_experience(exp(3, "Liaison Officer Staff"));
    s.close_experience();
    assert!(s.selected.is_none());
    s.close_experience();
    assert!(s.selected.is_none());
}

#[test]
fn tab_switch_leaves_the_modal_alone() {
    let mut s = vs();
    s.open_experience(exp(3, "Liaison Officer Staff"));
    s.select_tab(ExperienceTab::Professional);
    assert_eq!(s.selected.as_ref().map(|e| e.id), Some(3));
}

#[test]
fn menu_and_modal_are_independent() {
    let mut s = vs();
    s.toggle_menu();
    s.open_experience(exp(1, "Guard Staff"));
    assert!(s.menu_open);
    s.close_experience();
    assert!(s.menu_open);
}
