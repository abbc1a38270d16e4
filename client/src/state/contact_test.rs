use super::*;

fn filled() -> ContactForm {
    ContactForm {
        name: "Cica".to_owned(),
        email: "005cica@gmail.com".to_owned(),
        phone: "087805801599".to_owned(),
        subject: "Opportunity".to_owned(),
        message: "Hi!".to_owned(),
        status: SubmitStatus::Idle,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_form_is_empty_and_idle() {
    let form = ContactForm::default();
    assert!(form.name.is_empty());
    assert!(form.message.is_empty());
    assert_eq!(form.status, SubmitStatus::Idle);
    assert!(!form.is_complete());
}

// =============================================================
// Completeness
// =============================================================

#[test]
fn filled_form_is_complete() {
    assert!(filled().is_complete());
}

#[test]
fn any_blank_field_is_incomplete() {
    let mut form = filled();
    form.subject = String::new();
    assert!(!form.is_complete());
}

#[test]
fn whitespace_only_counts_as_blank() {
    let mut form = filled();
    form.message = "   ".to_owned();
    assert!(!form.is_complete());
}

// =============================================================
// Submit cycle
// =============================================================

#[test]
fn begin_send_marks_sending() {
    let mut form = filled();
    form.begin_send();
    assert_eq!(form.status, SubmitStatus::Sending);
    assert_eq!(form.status_line(), Some("Sending...."));
}

#[test]
fn mark_sent_resets_the_fields() {
    let mut form = filled();
    form.begin_send();
    form.mark_sent();
    assert_eq!(form.status, SubmitStatus::Sent);
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.phone.is_empty());
    assert!(form.subject.is_empty());
    assert!(form.message.is_empty());
}

#[test]
fn mark_failed_keeps_the_fields() {
    let mut form = filled();
    form.begin_send();
    form.mark_failed();
    assert_eq!(form.status, SubmitStatus::Failed);
    assert_eq!(form.status_line(), Some("Error"));
    assert_eq!(form.name, "Cica");
    assert_eq!(form.message, "Hi!");
}

#[test]
fn dismiss_returns_to_idle() {
    let mut form = filled();
    form.begin_send();
    form.mark_sent();
    form.dismiss_result();
    assert_eq!(form.status, SubmitStatus::Idle);
    assert_eq!(form.status_line(), None);
}

#[test]
fn sent_has_no_inline_status_line() {
    // Success is a dialog, not an inline line.
    let mut form = filled();
    form.mark_sent();
    assert_eq!(form.status_line(), None);
}
