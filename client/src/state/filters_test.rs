use super::*;

#[test]
fn default_state_has_no_active_filters() {
    let state = FilterState::default();
    assert!(state.is_empty());
    assert!(!state.category_selected("Programming"));
}

#[test]
fn toggle_category_adds_then_removes() {
    let mut state = FilterState::default();
    state.toggle_category("Programming");
    assert!(state.category_selected("Programming"));
    assert!(!state.is_empty());

    state.toggle_category("Programming");
    assert!(!state.category_selected("Programming"));
    assert!(state.is_empty());
}

#[test]
fn toggle_tag_adds_then_removes() {
    let mut state = FilterState::default();
    state.toggle_tag("story");
    assert!(state.tag_selected("story"));
    state.toggle_tag("story");
    assert!(!state.tag_selected("story"));
}

#[test]
fn selections_are_independent() {
    let mut state = FilterState::default();
    state.toggle_category("Business");
    state.toggle_tag("email");
    state.toggle_category("Business");
    assert!(state.tag_selected("email"));
    assert!(!state.category_selected("Business"));
}

#[test]
fn clear_resets_everything() {
    let mut state = FilterState {
        query: "email".to_owned(),
        categories: vec!["Business".to_owned()],
        tags: vec!["email".to_owned()],
    };
    state.clear();
    assert_eq!(state, FilterState::default());
}

#[test]
fn whitespace_query_counts_as_empty() {
    let state = FilterState {
        query: "   ".to_owned(),
        ..FilterState::default()
    };
    assert!(state.is_empty());
}

#[test]
fn home_tab_default_is_popular() {
    assert_eq!(HomeTab::default(), HomeTab::Popular);
}
