//! Auth-session state for the current visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate sign-in
//! redirects and identity-dependent rendering. While `loading` is true no
//! page may render anything authoritative.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::user::{Role, User};

/// Authentication state tracking the current user and loading status.
///
/// Starts loading; the session service transitions it exactly once after
/// restoring the persisted record, and never back.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// True once loading has settled with a signed-in user.
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    /// True once loading has settled with an admin user.
    pub fn is_admin(&self) -> bool {
        !self.loading && self.user.as_ref().is_some_and(|user| user.role == Role::Admin)
    }
}
