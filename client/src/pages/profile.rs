//! Profile page: the signed-in user's submissions and favorites.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::catalog::sample;
use crate::catalog::types::Prompt;
use crate::components::prompt_card::PromptCard;
use crate::components::site_header::SiteHeader;
use crate::session::user::{Role, User};
use crate::state::auth::AuthState;
use crate::util::guard::install_unauth_redirect;

/// Tabs available on the profile page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ProfileTab {
    #[default]
    Submissions,
    Favorites,
}

/// Admins see every submission; regular users only their own (matched by
/// author name — the sample data has no author ids).
fn visible_submissions(all: &[Prompt], user: &User) -> Vec<Prompt> {
    if user.role == Role::Admin {
        all.to_vec()
    } else {
        all.iter()
            .filter(|prompt| prompt.author == user.name)
            .cloned()
            .collect()
    }
}

/// Profile page. Redirects to `/signin` when not signed in.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let tab = RwSignal::new(ProfileTab::Submissions);

    let submissions = move || {
        auth.get()
            .user
            .map(|user| visible_submissions(&sample::user_submissions(), &user))
            .unwrap_or_default()
    };
    let favorites = sample::favorite_prompts;

    let display_name = move || auth.get().user.map(|user| user.name).unwrap_or_default();
    let display_email = move || auth.get().user.map(|user| user.email).unwrap_or_default();
    let initial = move || {
        display_name()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase().to_string())
            .unwrap_or_default()
    };

    let card_grid = move |prompts: Vec<Prompt>| {
        view! {
            <div class="prompt-grid">
                {prompts
                    .into_iter()
                    .map(|prompt| view! { <PromptCard prompt=prompt/> })
                    .collect::<Vec<_>>()}
            </div>
        }
    };

    view! {
        <div class="profile-page">
            <SiteHeader/>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=move || {
                    view! {
                        <p class="page-loading">
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to sign in..." }
                            }}
                        </p>
                    }
                }
            >
                <div class="page-container">
                    <div class="profile-header">
                        <span class="profile-header__avatar" aria-hidden="true">
                            {initial}
                        </span>
                        <div>
                            <h1 class="profile-header__name">{display_name}</h1>
                            <p class="profile-header__email">{display_email}</p>
                            <Show when=move || auth.get().is_admin()>
                                <span class="badge badge--outline">"Admin"</span>
                            </Show>
                        </div>
                    </div>

                    <div class="profile-tabs">
                        <button
                            class="profile-tab"
                            class:profile-tab--active=move || tab.get() == ProfileTab::Submissions
                            on:click=move |_| tab.set(ProfileTab::Submissions)
                        >
                            "My Submissions"
                        </button>
                        <button
                            class="profile-tab"
                            class:profile-tab--active=move || tab.get() == ProfileTab::Favorites
                            on:click=move |_| tab.set(ProfileTab::Favorites)
                        >
                            "Favorites"
                        </button>
                    </div>

                    <Show when=move || tab.get() == ProfileTab::Submissions>
                        <Show
                            when=move || !submissions().is_empty()
                            fallback=move || {
                                view! {
                                    <div class="profile-empty">
                                        <h2>"No submissions yet"</h2>
                                        <p>"You haven't submitted any prompts yet."</p>
                                        <a class="btn btn--primary" href="/submit">
                                            "Submit your first prompt"
                                        </a>
                                    </div>
                                }
                            }
                        >
                            {move || card_grid(submissions())}
                        </Show>
                    </Show>

                    <Show when=move || tab.get() == ProfileTab::Favorites>
                        <Show
                            when=move || !favorites().is_empty()
                            fallback=move || {
                                view! {
                                    <div class="profile-empty">
                                        <h2>"No favorites yet"</h2>
                                        <p>"You haven't saved any prompts as favorites yet."</p>
                                        <a class="btn btn--primary" href="/">
                                            "Browse prompts"
                                        </a>
                                    </div>
                                }
                            }
                        >
                            {move || card_grid(favorites())}
                        </Show>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
