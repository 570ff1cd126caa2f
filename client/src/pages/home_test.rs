use super::*;

#[test]
fn popular_tab_sources_popular_prompts() {
    let prompts = prompts_for_tab(HomeTab::Popular);
    assert_eq!(prompts.len(), 6);
    assert_eq!(prompts[0].title, "Creative Story Generator");
}

#[test]
fn recent_tab_sources_recent_prompts() {
    let prompts = prompts_for_tab(HomeTab::Recent);
    assert_eq!(prompts.len(), 6);
    assert_eq!(prompts[0].title, "Social Media Post Generator");
}

#[test]
fn favorites_tab_sources_bookmarked_prompts() {
    let ids: Vec<String> = prompts_for_tab(HomeTab::Favorites)
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, ["1", "3", "5"]);
}
