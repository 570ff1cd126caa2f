//! Prompt detail page: full template, example, comments, and author info.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog::sample;
use crate::components::prompt_card::favorite_toast;
use crate::components::site_header::SiteHeader;
use crate::state::toasts::{self, ToastState, ToastVariant};
use crate::util::clipboard;

/// Detail page for `/prompt/:id`. Unknown ids fall back to the first sample
/// prompt.
#[component]
pub fn PromptDetailPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let favorited = RwSignal::new(false);

    let prompt = move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        sample::resolve_detail(&id)
    };

    let on_copy = move |_| {
        clipboard::copy_text(&prompt().template);
        toasts::notify(
            toasts,
            "Prompt copied",
            "The prompt has been copied to your clipboard.",
            ToastVariant::Info,
        );
    };

    let on_favorite = move |_| {
        let now_favorited = !favorited.get_untracked();
        favorited.set(now_favorited);
        let (title, description) = favorite_toast(now_favorited);
        toasts::notify(toasts, title, description, ToastVariant::Info);
    };

    let on_share = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(href) = window.location().href() {
                    clipboard::copy_text(&href);
                }
            }
        }
        toasts::notify(
            toasts,
            "Link copied",
            "A link to this prompt has been copied to your clipboard.",
            ToastVariant::Info,
        );
    };

    let comments = sample::comments();
    let comment_count = comments.len();
    let similar = sample::similar_prompts();

    view! {
        <div class="detail-page">
            <SiteHeader/>
            <div class="page-container page-container--detail">
                <a class="back-link" href="/">
                    "← Back to Library"
                </a>

                <div class="detail-layout">
                    <div class="detail-main">
                        <h1 class="detail-main__title">{move || prompt().title}</h1>
                        <p class="detail-main__description">{move || prompt().description}</p>

                        <div class="detail-main__badges">
                            <span class="badge badge--category">{move || prompt().category}</span>
                            {move || {
                                prompt()
                                    .tags
                                    .into_iter()
                                    .map(|tag| view! { <span class="badge badge--outline">{tag}</span> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>

                        <div class="detail-template">
                            <div class="detail-template__header">
                                <h3>"Prompt"</h3>
                                <button class="btn" on:click=on_copy>
                                    "Copy"
                                </button>
                            </div>
                            <pre class="detail-template__text">{move || prompt().template}</pre>
                            <p class="detail-template__hint">
                                "Replace the placeholders (text in curly braces) with your own content."
                            </p>
                        </div>

                        <div class="detail-example">
                            <h3>"Example Usage"</h3>
                            <p>
                                {move || {
                                    prompt()
                                        .example
                                        .unwrap_or_else(|| {
                                            "No example provided for this prompt.".to_owned()
                                        })
                                }}
                            </p>
                        </div>

                        <div class="detail-comments">
                            <h3>{format!("Comments ({comment_count})")}</h3>
                            {comments
                                .into_iter()
                                .map(|comment| {
                                    view! {
                                        <div class="comment">
                                            <span class="comment__avatar" aria-hidden="true">
                                                {comment.author.chars().next().map(String::from).unwrap_or_default()}
                                            </span>
                                            <div>
                                                <p class="comment__meta">
                                                    <span class="comment__author">{comment.author}</span>
                                                    <span class="comment__date">{comment.date}</span>
                                                </p>
                                                <p class="comment__content">{comment.content}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <aside class="detail-sidebar">
                        <div class="detail-panel">
                            <p class="detail-panel__author">{move || prompt().author}</p>
                            <p class="detail-panel__author-role">"Prompt Creator"</p>
                        </div>

                        <div class="detail-panel">
                            <h3>"Prompt Stats"</h3>
                            <dl class="detail-stats">
                                <dt>"Created"</dt>
                                <dd>"March 15, 2023"</dd>
                                <dt>"Updated"</dt>
                                <dd>"June 22, 2023"</dd>
                                <dt>"Favorites"</dt>
                                <dd>{move || prompt().favorites}</dd>
                                <dt>"Uses"</dt>
                                <dd>{move || prompt().uses}</dd>
                            </dl>
                        </div>

                        <div class="detail-panel">
                            <h3>"Actions"</h3>
                            <button class="btn detail-action" on:click=on_favorite>
                                {move || {
                                    if favorited.get() { "Remove from Favorites" } else { "Save to Favorites" }
                                }}
                            </button>
                            <button class="btn detail-action" on:click=on_copy>
                                "Copy Prompt"
                            </button>
                            <button class="btn detail-action" on:click=on_share>
                                "Share Prompt"
                            </button>
                        </div>

                        <div class="detail-panel">
                            <h3>"Similar Prompts"</h3>
                            {similar
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <a class="similar-link" href=format!("/prompt/{}", entry.id)>
                                            <span class="similar-link__title">{entry.title}</span>
                                            <span class="similar-link__description">{entry.description}</span>
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </aside>
                </div>
            </div>
        </div>
    }
}
