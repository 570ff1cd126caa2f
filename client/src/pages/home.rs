//! Home page: the browsable prompt catalog.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public landing route. Composes the search box, the filter sidebar, and
//! the Popular/Recent/Favorites tabs over the static sample catalog.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::catalog::types::Prompt;
use crate::catalog::{filter, sample};
use crate::components::category_filter::CategoryFilter;
use crate::components::prompt_card::PromptCard;
use crate::components::site_header::SiteHeader;
use crate::state::filters::{FilterState, HomeTab};

/// Source prompts for a home tab, before filtering.
fn prompts_for_tab(tab: HomeTab) -> Vec<Prompt> {
    match tab {
        HomeTab::Popular => sample::popular_prompts(),
        HomeTab::Recent => sample::recent_prompts(),
        HomeTab::Favorites => sample::favorite_prompts(),
    }
}

/// Home page with tabbed, filterable prompt grid.
#[component]
pub fn HomePage() -> impl IntoView {
    let filters = expect_context::<RwSignal<FilterState>>();
    let tab = RwSignal::new(HomeTab::Popular);

    let visible = move || filter::apply(&prompts_for_tab(tab.get()), &filters.get());

    let tab_button = move |target: HomeTab, label: &'static str| {
        view! {
            <button
                class="home-tab"
                class:home-tab--active=move || tab.get() == target
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="home-page">
            <SiteHeader/>
            <div class="page-container">
                <header class="home-hero">
                    <div>
                        <h1 class="home-hero__title">"Prompt Library"</h1>
                        <p class="home-hero__subtitle">
                            "Discover and use powerful prompts for your AI projects"
                        </p>
                    </div>
                    <div class="home-hero__actions">
                        <input
                            class="search-input"
                            type="search"
                            placeholder="Search prompts..."
                            prop:value=move || filters.get().query
                            on:input=move |ev| {
                                filters.update(|f| f.query = event_target_value(&ev));
                            }
                        />
                        <a class="btn btn--primary" href="/submit">
                            "Submit Prompt"
                        </a>
                    </div>
                </header>

                <div class="home-layout">
                    <aside class="home-sidebar">
                        <CategoryFilter/>
                    </aside>
                    <main>
                        <div class="home-tabs">
                            {tab_button(HomeTab::Popular, "Popular")}
                            {tab_button(HomeTab::Recent, "Recent")}
                            {tab_button(HomeTab::Favorites, "Favorites")}
                        </div>
                        <Show
                            when=move || !visible().is_empty()
                            fallback=move || {
                                view! {
                                    <p class="home-empty">
                                        "No prompts match the current filters."
                                    </p>
                                }
                            }
                        >
                            <div class="prompt-grid">
                                {move || {
                                    visible()
                                        .into_iter()
                                        .map(|prompt| view! { <PromptCard prompt=prompt/> })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </Show>
                    </main>
                </div>
            </div>
        </div>
    }
}
