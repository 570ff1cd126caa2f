//! Shared application state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs held in `RwSignal`s at the app root. Pages and components
//! read them with `expect_context`; keeping them free of view code makes the
//! transitions unit-testable.

pub mod auth;
pub mod filters;
pub mod toasts;
