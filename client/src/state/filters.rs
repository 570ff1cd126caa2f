//! Catalog filter state shared by the header search box and the sidebar.
//!
//! DESIGN
//! ======
//! Filters live outside any single page so the header search keeps working
//! wherever it is rendered, and so the matching logic stays pure and
//! testable in `catalog::filter`.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

/// Tab selection on the home page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HomeTab {
    #[default]
    Popular,
    Recent,
    Favorites,
}

/// Active catalog filters: free-text query plus any-of category and tag
/// selections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl FilterState {
    /// Add or remove a category from the selection.
    pub fn toggle_category(&mut self, name: &str) {
        toggle(&mut self.categories, name);
    }

    /// Add or remove a tag from the selection.
    pub fn toggle_tag(&mut self, name: &str) {
        toggle(&mut self.tags, name);
    }

    pub fn category_selected(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    pub fn tag_selected(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }

    /// Drop every active filter, including the query.
    pub fn clear(&mut self) {
        self.query.clear();
        self.categories.clear();
        self.tags.clear();
    }

    /// True when no filter is active.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.categories.is_empty() && self.tags.is_empty()
    }
}

fn toggle(selection: &mut Vec<String>, name: &str) {
    if let Some(pos) = selection.iter().position(|s| s == name) {
        selection.remove(pos);
    } else {
        selection.push(name.to_owned());
    }
}
