//! Shared client-side state modules.
//!
//! Most page state lives in the `viewstate` crate and is provided as one
//! `RwSignal<ViewState>` context. What remains here is state that belongs
//! to the client alone, currently the contact form.

pub mod contact;
