//! Sign-up page: name/email/password plus social sign-in.

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::components::social_sign_in::SocialSignIn;
#[cfg(feature = "hydrate")]
use crate::session::error::AuthError;
use crate::session::service::{CancelToken, SessionService};
use crate::state::toasts::{ToastState, ToastVariant};

/// Sign-up page.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
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
        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let cancel = cancel.clone();
            leptos::task::spawn_local(async move {
                match session
                    .sign_up(&name_value, &email_value, &password_value, &cancel)
                    .await
                {
                    Ok(true) => {
                        crate::state::toasts::notify(
                            toasts,
                            "Account created",
                            "Welcome to the prompt library.",
                            ToastVariant::Info,
                        );
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Ok(false) => info.set("All fields are required.".to_owned()),
                    // The form is gone; touch nothing.
                    Err(AuthError::Cancelled) => return,
                    Err(e) => {
                        crate::state::toasts::notify(
                            toasts,
                            "Sign up failed",
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
                <h1 class="auth-card__title">"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Name"
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Your display name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
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
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>

                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>

                <div class="auth-divider"></div>
                <SocialSignIn/>
                <p class="auth-alt">
                    "Already registered? "
                    <a href="/signin">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
