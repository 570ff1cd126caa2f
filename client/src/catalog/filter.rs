//! Pure filtering over the sample catalog.
//!
//! DESIGN
//! ======
//! Matching is case-insensitive and additive: every active filter must
//! hold. Category and tag selections are any-of within their group.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::state::filters::FilterState;

use super::types::Prompt;

/// Apply the active filters to a prompt list, preserving order.
pub fn apply(prompts: &[Prompt], filter: &FilterState) -> Vec<Prompt> {
    prompts
        .iter()
        .filter(|prompt| matches(prompt, filter))
        .cloned()
        .collect()
}

/// True when the prompt satisfies every active filter.
pub fn matches(prompt: &Prompt, filter: &FilterState) -> bool {
    matches_query(prompt, &filter.query)
        && matches_categories(prompt, &filter.categories)
        && matches_tags(prompt, &filter.tags)
}

fn matches_query(prompt: &Prompt, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    prompt.title.to_lowercase().contains(&query)
        || prompt.description.to_lowercase().contains(&query)
        || prompt.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
}

fn matches_categories(prompt: &Prompt, selected: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|name| name == &prompt.category)
}

fn matches_tags(prompt: &Prompt, selected: &[String]) -> bool {
    selected.is_empty() || prompt.tags.iter().any(|tag| selected.contains(tag))
}
