//! Reusable card component for prompt list items.
//!
//! DESIGN
//! ======
//! Keeps prompt presentation consistent between the home grid and the
//! profile tabs. Favoriting is local component state; the catalog is static
//! sample data.

#[cfg(test)]
#[path = "prompt_card_test.rs"]
mod prompt_card_test;

use leptos::prelude::*;

use crate::catalog::types::Prompt;
use crate::state::toasts::{self, ToastState, ToastVariant};
use crate::util::clipboard;

/// A prompt card with favorite toggle and a details dialog.
#[component]
pub fn PromptCard(prompt: Prompt) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let favorited = RwSignal::new(false);
    let show_details = RwSignal::new(false);

    let detail_href = format!("/prompt/{}", prompt.id);
    let tags_preview: Vec<String> = prompt.tags.iter().take(2).cloned().collect();
    let hidden_tags = hidden_tag_count(&prompt.tags);

    let dialog_title = prompt.title.clone();
    let dialog_description = prompt.description.clone();
    let dialog_category = prompt.category.clone();
    let dialog_tags = prompt.tags.clone();
    let dialog_template = prompt.template.clone();
    let dialog_author = prompt.author.clone();
    let favorites = prompt.favorites;
    let uses = prompt.uses;

    let template_copy = prompt.template.clone();
    let on_copy = Callback::new(move |()| {
        clipboard::copy_text(&template_copy);
        toasts::notify(
            toasts,
            "Prompt copied",
            "The prompt has been copied to your clipboard.",
            ToastVariant::Info,
        );
    });

    let on_favorite = move |_| {
        let now_favorited = !favorited.get_untracked();
        favorited.set(now_favorited);
        let (title, description) = favorite_toast(now_favorited);
        toasts::notify(toasts, title, description, ToastVariant::Info);
    };

    view! {
        <div class="prompt-card">
            <div class="prompt-card__header">
                <a class="prompt-card__title" href=detail_href>
                    {prompt.title}
                </a>
                <button
                    class="prompt-card__favorite"
                    class:prompt-card__favorite--on=move || favorited.get()
                    on:click=on_favorite
                    title=move || {
                        if favorited.get() { "Remove from favorites" } else { "Add to favorites" }
                    }
                >
                    "★"
                </button>
            </div>
            <p class="prompt-card__description">{prompt.description}</p>
            <div class="prompt-card__badges">
                <span class="badge badge--category">{prompt.category}</span>
                {tags_preview
                    .into_iter()
                    .map(|tag| view! { <span class="badge badge--outline">{tag}</span> })
                    .collect::<Vec<_>>()}
                {hidden_tags
                    .map(|n| view! { <span class="badge badge--outline">{format!("+{n}")}</span> })}
            </div>
            <p class="prompt-card__template">{prompt.template}</p>
            <div class="prompt-card__footer">
                <span class="prompt-card__stat" title="Favorites">
                    "★ "
                    {favorites}
                </span>
                <span class="prompt-card__stat" title="Uses">
                    "⟳ "
                    {uses}
                </span>
                <button class="btn prompt-card__details" on:click=move |_| show_details.set(true)>
                    "View Details"
                </button>
            </div>

            <Show when=move || show_details.get()>
                <div class="dialog-backdrop" on:click=move |_| show_details.set(false)>
                    <div class="dialog dialog--prompt" on:click=move |ev| ev.stop_propagation()>
                        <h2>{dialog_title.clone()}</h2>
                        <p class="dialog__description">{dialog_description.clone()}</p>
                        <h4>"Category"</h4>
                        <span class="badge badge--category">{dialog_category.clone()}</span>
                        <h4>"Tags"</h4>
                        <div class="dialog__tags">
                            {dialog_tags
                                .iter()
                                .map(|tag| {
                                    view! { <span class="badge badge--outline">{tag.clone()}</span> }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <h4>"Prompt"</h4>
                        <div class="dialog__template">{dialog_template.clone()}</div>
                        <h4>"Author"</h4>
                        <p class="dialog__author">{dialog_author.clone()}</p>
                        <div class="dialog__stats">
                            <span>{format!("★ {favorites} favorites")}</span>
                            <span>{format!("⟳ {uses} uses")}</span>
                        </div>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_details.set(false)>
                                "Close"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| on_copy.run(())>
                                "Copy Prompt"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Tags beyond the first two collapse into a `+n` badge.
fn hidden_tag_count(tags: &[String]) -> Option<usize> {
    (tags.len() > 2).then(|| tags.len() - 2)
}

/// Toast copy for a favorite toggle, shared with the detail page.
pub(crate) fn favorite_toast(now_favorited: bool) -> (&'static str, &'static str) {
    if now_favorited {
        ("Added to favorites", "The prompt has been added to your favorites.")
    } else {
        ("Removed from favorites", "The prompt has been removed from your favorites.")
    }
}
