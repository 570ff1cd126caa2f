use super::*;
use crate::catalog::sample;

fn filter() -> FilterState {
    FilterState::default()
}

#[test]
fn empty_filter_keeps_everything() {
    let prompts = sample::popular_prompts();
    assert_eq!(apply(&prompts, &filter()).len(), prompts.len());
}

#[test]
fn query_matches_title_case_insensitively() {
    let prompts = sample::popular_prompts();
    let found = apply(
        &prompts,
        &FilterState {
            query: "EMAIL".to_owned(),
            ..filter()
        },
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Email Composer");
}

#[test]
fn query_matches_description_and_tags() {
    let prompts = sample::popular_prompts();
    let by_description = apply(
        &prompts,
        &FilterState {
            query: "ingredients".to_owned(),
            ..filter()
        },
    );
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].title, "Recipe Creator");

    let by_tag = apply(
        &prompts,
        &FilterState {
            query: "fiction".to_owned(),
            ..filter()
        },
    );
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].id, "1");
}

#[test]
fn whitespace_query_is_ignored() {
    let prompts = sample::popular_prompts();
    let found = apply(
        &prompts,
        &FilterState {
            query: "   ".to_owned(),
            ..filter()
        },
    );
    assert_eq!(found.len(), prompts.len());
}

#[test]
fn category_selection_is_any_of() {
    let prompts = sample::popular_prompts();
    let found = apply(
        &prompts,
        &FilterState {
            categories: vec!["Business".to_owned(), "Food".to_owned()],
            ..filter()
        },
    );
    let titles: Vec<&str> = found.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Email Composer", "Recipe Creator"]);
}

#[test]
fn tag_selection_is_any_of() {
    let prompts = sample::popular_prompts();
    let found = apply(
        &prompts,
        &FilterState {
            tags: vec!["code".to_owned()],
            ..filter()
        },
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "2");
}

#[test]
fn filters_combine_conjunctively() {
    let prompts = sample::popular_prompts();
    let found = apply(
        &prompts,
        &FilterState {
            query: "professional".to_owned(),
            categories: vec!["Business".to_owned()],
            tags: vec!["email".to_owned()],
        },
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Email Composer");

    let none = apply(
        &prompts,
        &FilterState {
            query: "professional".to_owned(),
            categories: vec!["Food".to_owned()],
            tags: vec!["email".to_owned()],
        },
    );
    assert!(none.is_empty());
}

#[test]
fn unmatched_query_yields_empty() {
    let prompts = sample::popular_prompts();
    let found = apply(
        &prompts,
        &FilterState {
            query: "quantum chromodynamics".to_owned(),
            ..filter()
        },
    );
    assert!(found.is_empty());
}
