//! Network calls made by the client.

pub mod contact;
