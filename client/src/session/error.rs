//! Typed failures surfaced by session operations.
//!
//! ERROR HANDLING
//! ==============
//! Missing-field validation is not an error (operations report it as a
//! `false` success flag); this enum covers the paths the UI must surface as
//! notifications. Display strings are user-facing.

use thiserror::Error;

/// Failure raised by a session operation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Sign-up attempted with the reserved admin address.
    #[error("This email is already in use")]
    EmailInUse,
    /// Another sign-in or sign-up is already in flight.
    #[error("Another authentication request is in progress")]
    Busy,
    /// The caller tore down before the operation settled.
    #[error("The request was cancelled")]
    Cancelled,
    /// The social provider handshake failed.
    #[error("{0}")]
    Provider(String),
}
