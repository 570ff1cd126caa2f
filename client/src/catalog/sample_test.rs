use super::*;

#[test]
fn popular_tab_has_six_entries_sorted_by_favorites() {
    let prompts = popular_prompts();
    assert_eq!(prompts.len(), 6);
    assert!(prompts.windows(2).all(|w| w[0].favorites >= w[1].favorites));
}

#[test]
fn recent_tab_has_six_entries() {
    assert_eq!(recent_prompts().len(), 6);
}

#[test]
fn favorites_are_the_bookmarked_popular_entries() {
    let ids: Vec<String> = favorite_prompts().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, ["1", "3", "5"]);
}

#[test]
fn all_prompt_ids_are_unique() {
    let all = all_prompts();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a.id, b.id, "duplicate id {}", a.id);
        }
    }
}

#[test]
fn find_prompt_resolves_known_ids() {
    let prompt = find_prompt("2").unwrap();
    assert_eq!(prompt.title, "Code Explainer");
    assert!(prompt.example.is_some());

    assert_eq!(find_prompt("999"), None);
}

#[test]
fn resolve_detail_falls_back_to_first_entry() {
    assert_eq!(resolve_detail("999").title, "Creative Story Generator");
    assert_eq!(resolve_detail("8").title, "Interview Question Preparer");
}

#[test]
fn categories_cover_the_submission_form() {
    let categories = categories();
    assert_eq!(categories.len(), 8);
    assert!(categories.iter().any(|c| c.slug == "creative-writing"));
    assert!(categories.iter().all(|c| !c.name.is_empty() && c.count > 0));
}

#[test]
fn admin_tables_are_seeded() {
    assert_eq!(prompt_rows().len(), 5);
    assert_eq!(pending_rows().len(), 3);
    assert_eq!(user_rows().len(), 4);
    assert!(
        user_rows()
            .iter()
            .any(|u| u.role == Role::Admin && u.email == "cpnow2@yahoo.com")
    );
}

#[test]
fn detail_page_extras_are_seeded() {
    assert_eq!(comments().len(), 3);
    assert_eq!(similar_prompts().len(), 4);
    assert_eq!(popular_tags().len(), 8);
}

#[test]
fn user_submissions_belong_to_current_user() {
    let submissions = user_submissions();
    assert_eq!(submissions.len(), 2);
    assert!(submissions.iter().all(|p| p.author == "Current User"));
}
