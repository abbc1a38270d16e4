//! DOM glue utilities shared by the section components.

pub mod listener;
pub mod observer;
pub mod scroll;
