//! Top navigation shared by every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders anonymous (sign-in/up links) or authenticated (profile, admin,
//! sign-out) chrome from the shared auth state. Signing out from an admin
//! route also navigates home, since the admin page is no longer accessible.

use leptos::prelude::*;

use crate::session::service::SessionService;
use crate::state::auth::AuthState;
use crate::state::filters::FilterState;

/// Site-wide header with nav links, search, and session controls.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<SessionService>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let filters = expect_context::<RwSignal<FilterState>>();

    let on_sign_out = Callback::new(move |()| {
        session.sign_out();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let on_admin_page = window
                    .location()
                    .pathname()
                    .map(|path| path.starts_with("/admin"))
                    .unwrap_or(false);
                if on_admin_page {
                    let _ = window.location().set_href("/");
                }
            }
        }
    });

    let display_name = move || auth.get().user.map(|user| user.name).unwrap_or_default();
    let initial = move || {
        display_name()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase().to_string())
            .unwrap_or_default()
    };

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <div class="site-header__nav">
                    <a class="site-header__brand" href="/">
                        "Prompt Library"
                    </a>
                    <nav class="site-header__links">
                        <a href="/">"Browse"</a>
                        <a href="/submit">"Submit"</a>
                    </nav>
                </div>

                <div class="site-header__actions">
                    <input
                        class="search-input search-input--header"
                        type="search"
                        placeholder="Search prompts..."
                        prop:value=move || filters.get().query
                        on:input=move |ev| {
                            filters.update(|f| f.query = event_target_value(&ev));
                        }
                    />
                    <Show
                        when=move || auth.get().user.is_some()
                        fallback=move || {
                            view! {
                                <a class="btn site-header__signin" href="/signin">
                                    "Sign in"
                                </a>
                                <a class="btn btn--primary site-header__signup" href="/signup">
                                    "Sign up"
                                </a>
                            }
                        }
                    >
                        <span class="site-header__avatar" aria-hidden="true">
                            {initial}
                        </span>
                        <a class="site-header__user" href="/profile">
                            {display_name}
                        </a>
                        <Show when=move || auth.get().is_admin()>
                            <a class="btn site-header__admin" href="/admin">
                                "Admin"
                            </a>
                        </Show>
                        <button class="btn site-header__signout" on:click=move |_| on_sign_out.run(())>
                            "Sign out"
                        </button>
                    </Show>
                </div>
            </div>
        </header>
    }
}
