//! Contact form submission to the web3forms relay.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error; the form only submits from
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<(), String>` instead of panics so a failed or
//! rejected submission degrades to the form's error line.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

use crate::state::contact::ContactForm;

/// Form relay endpoint; accepted submissions land in the site owner's inbox.
pub const SUBMIT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Public site key identifying this form to the relay.
pub const ACCESS_KEY: &str = "6ce12080-4092-4f43-ab4d-4275178314cd";

/// JSON body of one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    /// Build the wire payload from the current form fields.
    #[must_use]
    pub fn from_form(form: &ContactForm) -> Self {
        Self {
            access_key: ACCESS_KEY.to_owned(),
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            subject: form.subject.clone(),
            message: form.message.clone(),
        }
    }
}

/// Relay response envelope; `message` carries the rejection reason.
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

/// Submit the contact form.
///
/// # Errors
///
/// Returns an error string when the request fails, the response is not
/// parseable, or the relay reports `success: false`.
pub async fn send_message(payload: &ContactPayload) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SUBMIT_ENDPOINT)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("submit failed: {}", resp.status()));
        }
        let body: SubmitResponse = resp.json().await.map_err(|e| e.to_string())?;
        if body.success {
            Ok(())
        } else if body.message.is_empty() {
            Err("submission rejected".to_owned())
        } else {
            Err(body.message)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}
