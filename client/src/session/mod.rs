//! Mock session layer: identity model, persisted session slot, and the
//! session service pages talk to.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend. Sign-in/up/out are simulated locally with fixed
//! latency, and the only durable state is one serialized user record in the
//! browser's per-origin storage. The service is constructed once at the app
//! root and handed to pages via context.

pub mod error;
pub mod service;
pub mod store;
pub mod user;
