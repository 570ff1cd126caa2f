//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated routes should apply identical unauthenticated redirect
//! behavior. Pages with extra policy (admin role, toasts) install their own
//! effects instead.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Redirect to `/signin` whenever auth has settled with no user present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/signin", NavigateOptions::default());
        }
    });
}
