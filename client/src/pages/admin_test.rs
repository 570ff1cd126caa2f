use super::*;

#[test]
fn default_tab_is_prompts() {
    assert_eq!(AdminTab::default(), AdminTab::Prompts);
    assert_eq!(AdminTab::Pending.label(), "pending");
}

#[test]
fn approve_moves_row_into_published_list() {
    let mut pending = sample::pending_rows();
    let mut prompts = sample::prompt_rows();
    let before_pending = pending.len();
    let before_prompts = prompts.len();

    assert!(approve_pending(&mut pending, &mut prompts, "p2"));

    assert_eq!(pending.len(), before_pending - 1);
    assert!(pending.iter().all(|row| row.id != "p2"));
    assert_eq!(prompts.len(), before_prompts + 1);

    let published = prompts.iter().find(|row| row.id == "p2").unwrap();
    assert_eq!(published.title, "Technical Documentation Writer");
    assert_eq!(published.status, PromptStatus::Published);
    assert_eq!(published.date, "2023-08-14");
}

#[test]
fn approve_unknown_id_changes_nothing() {
    let mut pending = sample::pending_rows();
    let mut prompts = sample::prompt_rows();
    assert!(!approve_pending(&mut pending, &mut prompts, "nope"));
    assert_eq!(pending.len(), 3);
    assert_eq!(prompts.len(), 5);
}

#[test]
fn reject_drops_the_row() {
    let mut pending = sample::pending_rows();
    assert!(reject_pending(&mut pending, "p1"));
    assert_eq!(pending.len(), 2);
    assert!(!reject_pending(&mut pending, "p1"));
}

#[test]
fn delete_drops_the_prompt() {
    let mut prompts = sample::prompt_rows();
    assert!(delete_prompt(&mut prompts, "3"));
    assert!(prompts.iter().all(|row| row.id != "3"));
    assert!(!delete_prompt(&mut prompts, "3"));
}

#[test]
fn row_matches_is_case_insensitive_and_any_field() {
    assert!(row_matches("EMAIL", &["Email Composer", "Business"]));
    assert!(row_matches("busi", &["Email Composer", "Business"]));
    assert!(!row_matches("fitness", &["Email Composer", "Business"]));
}

#[test]
fn empty_or_whitespace_query_matches_everything() {
    assert!(row_matches("", &["anything"]));
    assert!(row_matches("   ", &["anything"]));
}
