//! Prompt submission form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated route. There is no backend: submission simulates a round
//! trip, reports the outcome as a toast (admins publish directly, users go
//! to review), and returns home.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::catalog::sample;
use crate::components::site_header::SiteHeader;
#[cfg(any(test, feature = "hydrate"))]
use crate::session::user::Role;
use crate::state::auth::AuthState;
use crate::state::toasts::{self, ToastState, ToastVariant};

/// Simulated round-trip latency for a submission, in milliseconds.
#[cfg(feature = "hydrate")]
const SUBMIT_LATENCY_MS: u64 = 1_500;

/// Draft form values for a new prompt submission.
#[derive(Clone, Debug, Default, PartialEq)]
struct SubmissionDraft {
    title: String,
    description: String,
    category: String,
    tags: String,
    template: String,
}

/// Split a comma-separated tag list into trimmed, non-empty tags.
fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

/// All fields are required, and the tag list must contain at least one tag.
fn validate_submission(draft: &SubmissionDraft) -> Result<(), &'static str> {
    if draft.title.trim().is_empty()
        || draft.description.trim().is_empty()
        || draft.category.trim().is_empty()
        || draft.template.trim().is_empty()
        || parse_tags(&draft.tags).is_empty()
    {
        return Err("All fields are required.");
    }
    Ok(())
}

/// Toast copy after a successful submission, by role.
#[cfg(any(test, feature = "hydrate"))]
fn submitted_message(role: Role) -> &'static str {
    match role {
        Role::Admin => "Your prompt has been published successfully.",
        Role::User => "Your prompt has been submitted successfully and is pending review.",
    }
}

/// Submission page. Redirects to `/signin` when not signed in.
#[component]
pub fn SubmitPromptPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Redirect signed-out visitors to the sign-in page.
    let navigate_signin = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            toasts::notify(
                toasts,
                "Authentication required",
                "You must be signed in to submit a prompt.",
                ToastVariant::Destructive,
            );
            navigate_signin("/signin", NavigateOptions::default());
        }
    });

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let template = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = SubmissionDraft {
            title: title.get_untracked(),
            description: description.get_untracked(),
            category: category.get_untracked(),
            tags: tags.get_untracked(),
            template: template.get_untracked(),
        };
        if let Err(message) = validate_submission(&draft) {
            info.set(message.to_owned());
            return;
        }
        info.set(String::new());
        submitting.set(true);
        let role = auth
            .get_untracked()
            .user
            .map(|user| user.role)
            .unwrap_or_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::session::service::simulated_latency(SUBMIT_LATENCY_MS).await;
            toasts::notify(toasts, "Prompt submitted", submitted_message(role), ToastVariant::Info);
            submitting.set(false);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = role;
        }
    };

    let categories = sample::categories();

    view! {
        <div class="submit-page">
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
                <div class="page-container page-container--narrow">
                    <a class="back-link" href="/">
                        "← Back to Library"
                    </a>
                    <h1>"Submit a Prompt"</h1>
                    <p class="submit-page__subtitle">
                        {move || {
                            if auth.get().is_admin() {
                                "Create and publish a new prompt"
                            } else {
                                "Share your prompt with the community"
                            }
                        }}
                    </p>

                    <form class="submit-form" on:submit=on_submit>
                        <label class="submit-form__label">
                            "Title"
                            <input
                                class="submit-form__input"
                                type="text"
                                placeholder="Enter a descriptive title"
                                prop:value=move || title.get()
                                on:input=move |ev| title.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="submit-form__label">
                            "Description"
                            <textarea
                                class="submit-form__input"
                                rows="2"
                                placeholder="Briefly describe what your prompt does"
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="submit-form__label">
                            "Category"
                            <select
                                class="submit-form__input"
                                prop:value=move || category.get()
                                on:change=move |ev| category.set(event_target_value(&ev))
                            >
                                <option value="">"Select a category"</option>
                                {categories
                                    .iter()
                                    .map(|c| {
                                        view! { <option value=c.slug.clone()>{c.name.clone()}</option> }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="submit-form__label">
                            "Tags"
                            <input
                                class="submit-form__input"
                                type="text"
                                placeholder="Enter tags separated by commas (e.g., creative, story, fiction)"
                                prop:value=move || tags.get()
                                on:input=move |ev| tags.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="submit-form__label">
                            "Prompt"
                            <textarea
                                class="submit-form__input submit-form__input--mono"
                                rows="6"
                                placeholder="Enter your prompt. Use {placeholders} for variables."
                                prop:value=move || template.get()
                                on:input=move |ev| template.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <p class="submit-form__hint">
                            "Use curly braces for variables, e.g., {topic}, {character}, etc."
                        </p>

                        <Show when=move || !info.get().is_empty()>
                            <p class="auth-message">{move || info.get()}</p>
                        </Show>

                        <div class="submit-form__actions">
                            <a class="btn" href="/">
                                "Cancel"
                            </a>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || submitting.get()
                            >
                                {move || {
                                    if submitting.get() {
                                        "Submitting..."
                                    } else if auth.get().is_admin() {
                                        "Publish Prompt"
                                    } else {
                                        "Submit Prompt"
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
