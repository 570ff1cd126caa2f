use super::*;
use crate::catalog::sample;

#[test]
fn default_tab_is_submissions() {
    assert_eq!(ProfileTab::default(), ProfileTab::Submissions);
}

#[test]
fn admin_sees_every_submission() {
    let all = sample::user_submissions();
    let visible = visible_submissions(&all, &User::admin());
    assert_eq!(visible, all);
}

#[test]
fn regular_user_sees_only_their_own() {
    let all = sample::user_submissions();

    let alice = User::from_email("alice@example.com");
    assert!(visible_submissions(&all, &alice).is_empty());

    let current = User::from_signup("Current User", "current@example.com");
    assert_eq!(visible_submissions(&all, &current).len(), 2);
}
