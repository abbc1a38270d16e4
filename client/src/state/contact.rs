#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Where the contact form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Nothing in flight; the form is editable.
    #[default]
    Idle,
    /// Submission is in flight.
    Sending,
    /// The last submission was accepted; the success dialog is showing.
    Sent,
    /// The last submission was rejected or the request failed.
    Failed,
}

/// Contact form fields plus submit status.
///
/// Inputs are controlled: each field mirrors one input element, and the
/// submit flow drives `status` through [`SubmitStatus`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub status: SubmitStatus,
}

impl ContactForm {
    /// Every field has non-whitespace content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.phone, &self.subject, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// A submission left for the wire.
    pub fn begin_send(&mut self) {
        self.status = SubmitStatus::Sending;
    }

    /// The endpoint accepted the submission. Clears the fields (the form
    /// resets) and shows the success dialog.
    pub fn mark_sent(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.subject.clear();
        self.message.clear();
        self.status = SubmitStatus::Sent;
    }

    /// The submission failed. Fields are kept so the visitor can retry.
    pub fn mark_failed(&mut self) {
        self.status = SubmitStatus::Failed;
    }

    /// Close the success dialog / clear the error line.
    pub fn dismiss_result(&mut self) {
        self.status = SubmitStatus::Idle;
    }

    /// Inline status text under the submit button, if any.
    #[must_use]
    pub fn status_line(&self) -> Option<&'static str> {
        match self.status {
            SubmitStatus::Sending => Some("Sending...."),
            SubmitStatus::Failed => Some("Error"),
            SubmitStatus::Idle | SubmitStatus::Sent => None,
        }
    }
}
