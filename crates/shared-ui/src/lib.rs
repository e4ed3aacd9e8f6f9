//! Reusable Dioxus components for the notices admin.

pub mod components;

pub use components::*;
