//! Social sign-in buttons shared by the sign-in and sign-up pages.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::session::error::AuthError;
use crate::session::service::{CancelToken, SessionService};
use crate::session::user::SocialProvider;
use crate::state::toasts::{self, ToastState, ToastVariant};

/// Google/Apple sign-in buttons with per-provider busy state.
///
/// `callback_url` is where a successful handshake lands.
#[component]
pub fn SocialSignIn(#[prop(into, default = String::from("/"))] callback_url: String) -> impl IntoView {
    let session = expect_context::<SessionService>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let pending = RwSignal::new(None::<SocialProvider>);

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let start = Callback::new(move |provider: SocialProvider| {
        if pending.get_untracked().is_some() {
            return;
        }
        pending.set(Some(provider));

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let cancel = cancel.clone();
            let callback_url = callback_url.clone();
            leptos::task::spawn_local(async move {
                match session.sign_in_with_social(provider, &cancel).await {
                    Ok(true) => {
                        toasts::notify(
                            toasts,
                            "Sign in successful",
                            &format!("You've successfully signed in with {}.", provider.display_name()),
                            ToastVariant::Info,
                        );
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&callback_url);
                        }
                    }
                    Ok(false) => {}
                    // The buttons are gone; touch nothing.
                    Err(AuthError::Cancelled) => return,
                    Err(e) => {
                        toasts::notify(
                            toasts,
                            "Sign in failed",
                            &format!(
                                "There was a problem signing in with {}: {e}",
                                provider.display_name()
                            ),
                            ToastVariant::Destructive,
                        );
                    }
                }
                pending.set(None);
            });
        }
    });

    let provider_button = move |provider: SocialProvider| {
        view! {
            <button
                class="btn social-button"
                type="button"
                disabled=move || pending.get().is_some()
                on:click=move |_| start.run(provider)
            >
                {move || {
                    if pending.get() == Some(provider) {
                        "Connecting...".to_owned()
                    } else {
                        provider.display_name().to_owned()
                    }
                }}
            </button>
        }
    };

    view! {
        <div class="social-sign-in">
            {provider_button(SocialProvider::Google)}
            {provider_button(SocialProvider::Apple)}
        </div>
    }
}
