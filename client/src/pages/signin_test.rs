use super::*;

#[test]
fn default_tab_is_user() {
    assert_eq!(CredentialTab::default(), CredentialTab::User);
}

#[test]
fn only_admin_tab_sets_admin_attempt() {
    assert!(!CredentialTab::User.admin_attempt());
    assert!(CredentialTab::Admin.admin_attempt());
}
