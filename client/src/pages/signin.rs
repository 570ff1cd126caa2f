//! Sign-in page with user/admin tabs, credential form, and social sign-in.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures surface inline under the form; policy and transport
//! errors surface as destructive toasts. The session service owns the
//! actual rules; this page only renders outcomes.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::components::social_sign_in::SocialSignIn;
#[cfg(feature = "hydrate")]
use crate::session::error::AuthError;
use crate::session::service::{CancelToken, SessionService};
use crate::state::toasts::{ToastState, ToastVariant};

/// Which credential tab is active. The admin tab changes form copy only;
/// role assignment is entirely up to the session service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum CredentialTab {
    #[default]
    User,
    Admin,
}

impl CredentialTab {
    /// The flag forwarded to the session service. It never elevates a role.
    fn admin_attempt(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Sign-in page.
#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let tab = RwSignal::new(CredentialTab::User);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let cancel = cancel.clone();
            leptos::task::spawn_local(async move {
                let admin_attempt = tab.get_untracked().admin_attempt();
                match session
                    .sign_in(&email_value, &password_value, admin_attempt, &cancel)
                    .await
                {
                    Ok(true) => {
                        crate::state::toasts::notify(
                            toasts,
                            "Signed in",
                            "Welcome back to the prompt library.",
                            ToastVariant::Info,
                        );
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Ok(false) => info.set("Enter both email and password.".to_owned()),
                    // The form is gone; touch nothing.
                    Err(AuthError::Cancelled) => return,
                    Err(e) => {
                        crate::state::toasts::notify(
                            toasts,
                            "Sign in failed",
                            &e.to_string(),
                            ToastVariant::Destructive,
                        );
                    }
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="auth-page">
            <SiteHeader/>
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign in"</h1>
                <div class="auth-tabs">
                    <button
                        class="auth-tab"
                        class:auth-tab--active=move || tab.get() == CredentialTab::User
                        on:click=move |_| tab.set(CredentialTab::User)
                    >
                        "User"
                    </button>
                    <button
                        class="auth-tab"
                        class:auth-tab--active=move || tab.get() == CredentialTab::Admin
                        on:click=move |_| tab.set(CredentialTab::Admin)
                    >
                        "Admin"
                    </button>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>

                <div class="auth-divider"></div>
                <SocialSignIn/>
                <p class="auth-alt">
                    "No account? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
