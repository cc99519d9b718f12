//! Leptos components.

pub mod page_effects;
