//! Network helpers for the form submission API.

pub mod api;
