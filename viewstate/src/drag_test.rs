#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Defaults ---

#[test]
fn default_is_at_rest() {
    let d = DragState::default();
    assert_eq!(d.offset, 0.0);
    assert!(!d.dragging);
}

// --- move_by ---

#[test]
fn move_ignored_before_begin() {
    let mut d = DragState::default();
    d.move_by(30.0);
    assert_eq!(d.offset, 0.0);
}

#[test]
fn move_accumulates_while_dragging() {
    let mut d = DragState::default();
    d.begin();
    d.move_by(30.0);
    d.move_by(20.0);
    assert_eq!(d.offset, 50.0);
}

#[test]
fn move_clamps_at_max() {
    let mut d = DragState::default();
    d.begin();
    d.move_by(MAX_DRAG + 500.0);
    assert_eq!(d.offset, MAX_DRAG);
}

#[test]
fn move_clamps_at_zero() {
    let mut d = DragState::default();
    d.begin();
    d.move_by(40.0);
    d.move_by(-200.0);
    assert_eq!(d.offset, 0.0);
}

#[test]
fn offset_stays_in_range_under_any_delta_sequence() {
    let mut d = DragState::default();
    d.begin();
    for dx in [500.0, -1e9, 3.25, -0.5, 1e9, -42.0, 7.0] {
        d.move_by(dx);
        assert!(d.offset >= 0.0);
        assert!(d.offset <= MAX_DRAG);
    }
}

// --- release ---

#[test]
fn release_below_max_does_not_trigger() {
    let mut d = DragState::default();
    d.begin();
    d.move_by(MAX_DRAG - 1.0);
    assert!(!d.release());
}

#[test]
fn release_at_max_triggers() {
    let mut d = DragState::default();
    d.begin();
    d.move_by(MAX_DRAG);
    assert!(d.release());
}

#[test]
fn release_resets_offset_either_way() {
    let mut d = DragState::default();
    d.begin();
    d.move_by(60.0);
    d.release();
    assert_eq!(d.offset, 0.0);

    d.begin();
    d.move_by(MAX_DRAG);
    d.release();
    assert_eq!(d.offset, 0.0);
}

#[test]
fn release_without_begin_is_noop() {
    let mut d = DragState::default();
    assert!(!d.release());
    assert_eq!(d.offset, 0.0);
}

#[test]
fn move_after_release_is_ignored() {
    let mut d = DragState::default();
    d.begin();
    d.move_by(50.0);
    d.release();
    d.move_by(25.0);
    assert_eq!(d.offset, 0.0);
}

#[test]
fn second_drag_starts_from_rest() {
    let mut d = DragState::default();
    d.begin();
    d.move_by(MAX_DRAG);
    assert!(d.release());
    d.begin();
    d.move_by(10.0);
    assert_eq!(d.offset, 10.0);
    assert!(!d.release());
}

// --- hint_opacity ---

#[test]
fn opacity_full_at_rest() {
    let d = DragState::default();
    assert!(approx_eq(d.hint_opacity(), 1.0));
}

#[test]
fn opacity_half_at_half_travel() {
    let mut d = DragState::default();
    d.begin();
    d.move_by(MAX_DRAG / 2.0);
    assert!(approx_eq(d.hint_opacity(), 0.5));
}

#[test]
fn opacity_zero_at_full_travel() {
    let mut d = DragState::default();
    d.begin();
    d.move_by(MAX_DRAG);
    assert!(approx_eq(d.hint_opacity(), 0.0));
}
