//! Leptos components.

pub mod site_header;
