use super::*;

fn sample() -> Experience {
    Experience {
        id: 7,
        position: "Crowd Control Staff".into(),
        organization: "Student and Work Abroad Festival".into(),
        year: "2024".into(),
        description: "Managed large crowds and guided attendee movement.".into(),
        images: vec!["/swaf-1.png".into(), "/swaf-2.jpg".into()],
    }
}

// --- Tabs ---

#[test]
fn default_tab_is_organization() {
    assert_eq!(ExperienceTab::default(), ExperienceTab::Organization);
}

#[test]
fn tab_labels() {
    assert_eq!(ExperienceTab::Organization.label(), "Organization Experiences");
    assert_eq!(ExperienceTab::Professional.label(), "Professional Experiences");
}

#[test]
fn tab_serializes_lowercase() {
    let json = serde_json::to_string(&ExperienceTab::Professional).unwrap();
    assert_eq!(json, "\"professional\"");
}

// --- Records ---

#[test]
fn subtitle_joins_organization_and_year() {
    let e = sample();
    assert_eq!(e.subtitle(), "Student and Work Abroad Festival (2024)");
}

#[test]
fn record_round_trips_through_json() {
    let e = sample();
    let json = serde_json::to_string(&e).unwrap();
    let back: Experience = serde_json::from_str(&json).unwrap();
    assert_eq!(e, back);
}

// --- Image sources ---

#[test]
fn display_src_passes_real_urls_through() {
    assert_eq!(display_src("/swaf-1.png"), "/swaf-1.png");
}

#[test]
fn display_src_substitutes_placeholder_for_empty() {
    assert_eq!(display_src(""), MISSING_IMAGE_SRC);
}

#[test]
fn broken_image_fallback_is_absolute() {
    assert!(BROKEN_IMAGE_SRC.starts_with("https://"));
}
