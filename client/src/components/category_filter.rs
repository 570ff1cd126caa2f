//! Sidebar filter panel: category and tag checkboxes plus a clear action.

use leptos::prelude::*;

use crate::catalog::sample;
use crate::state::filters::FilterState;

/// Checkbox filters over the shared [`FilterState`].
#[component]
pub fn CategoryFilter() -> impl IntoView {
    let filters = expect_context::<RwSignal<FilterState>>();
    let categories = sample::categories();
    let tags = sample::popular_tags();

    view! {
        <div class="filter-panel">
            <button class="btn filter-panel__clear" on:click=move |_| filters.update(FilterState::clear)>
                "Clear Filters"
            </button>

            <div class="filter-group">
                <h3 class="filter-group__title">"Categories"</h3>
                {categories
                    .into_iter()
                    .map(|category| {
                        let name = category.name.clone();
                        let name_toggle = category.name.clone();
                        view! {
                            <label class="filter-row">
                                <input
                                    type="checkbox"
                                    prop:checked=move || filters.get().category_selected(&name)
                                    on:change=move |_| {
                                        filters.update(|f| f.toggle_category(&name_toggle));
                                    }
                                />
                                <span class="filter-row__name">{category.name}</span>
                                <span class="filter-row__count">{category.count}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="filter-group">
                <h3 class="filter-group__title">"Popular Tags"</h3>
                {tags
                    .into_iter()
                    .map(|tag| {
                        let name = tag.name.clone();
                        let name_toggle = tag.name.clone();
                        view! {
                            <label class="filter-row">
                                <input
                                    type="checkbox"
                                    prop:checked=move || filters.get().tag_selected(&name)
                                    on:change=move |_| {
                                        filters.update(|f| f.toggle_tag(&name_toggle));
                                    }
                                />
                                <span class="filter-row__name">{tag.name}</span>
                                <span class="filter-row__count">{tag.count}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
