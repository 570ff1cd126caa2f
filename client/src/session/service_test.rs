use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::session::store::MemoryStore;
use crate::session::user::Role;

fn service_with_store() -> (SessionService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (SessionService::new(store.clone()), store)
}

fn current_user(service: &SessionService) -> Option<User> {
    service.state().get_untracked().user
}

#[test]
fn starts_in_loading_state() {
    let (service, _) = service_with_store();
    let state = service.state().get_untracked();
    assert!(state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn restore_without_record_lands_anonymous() {
    let (service, _) = service_with_store();
    service.restore();
    let state = service.state().get_untracked();
    assert!(!state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn restore_with_record_lands_authenticated() {
    let (service, store) = service_with_store();
    store.save(&User::admin());
    service.restore();
    let state = service.state().get_untracked();
    assert!(!state.loading);
    assert_eq!(state.user, Some(User::admin()));
}

#[test]
fn restore_with_malformed_record_lands_anonymous() {
    let (service, store) = service_with_store();
    store.set_raw("not even json");
    service.restore();
    let state = service.state().get_untracked();
    assert!(!state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn reserved_pair_signs_in_as_admin() {
    let (service, store) = service_with_store();
    let cancel = CancelToken::new();
    let ok = block_on(service.sign_in("cpnow2@yahoo.com", "Passw0rd101", false, &cancel)).unwrap();
    assert!(ok);

    let user = current_user(&service).unwrap();
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.email, "cpnow2@yahoo.com");
    assert_eq!(user.name, "Admin User");
    assert_eq!(store.load(), Some(user));
}

#[test]
fn reserved_pair_ignores_admin_attempt_flag() {
    let (service, _) = service_with_store();
    let cancel = CancelToken::new();
    let ok = block_on(service.sign_in("cpnow2@yahoo.com", "Passw0rd101", true, &cancel)).unwrap();
    assert!(ok);
    assert_eq!(current_user(&service).unwrap().role, Role::Admin);
}

#[test]
fn regular_pair_signs_in_as_user() {
    let (service, store) = service_with_store();
    let cancel = CancelToken::new();
    let ok = block_on(service.sign_in("alice@example.com", "hunter2", false, &cancel)).unwrap();
    assert!(ok);

    let user = current_user(&service).unwrap();
    assert_eq!(user.role, Role::User);
    assert_eq!(user.name, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(store.load(), Some(user));
}

#[test]
fn admin_attempt_flag_never_elevates_regular_credentials() {
    let (service, _) = service_with_store();
    let cancel = CancelToken::new();
    let ok = block_on(service.sign_in("alice@example.com", "hunter2", true, &cancel)).unwrap();
    assert!(ok);
    assert_eq!(current_user(&service).unwrap().role, Role::User);
}

#[test]
fn empty_field_fails_sign_in_without_mutation() {
    let (service, store) = service_with_store();
    let cancel = CancelToken::new();
    block_on(service.sign_in("alice@example.com", "hunter2", false, &cancel)).unwrap();
    let before = current_user(&service);

    let ok = block_on(service.sign_in("", "hunter2", false, &cancel)).unwrap();
    assert!(!ok);
    let ok = block_on(service.sign_in("alice@example.com", "", false, &cancel)).unwrap();
    assert!(!ok);

    assert_eq!(current_user(&service), before);
    assert_eq!(store.load(), before);
    assert!(!service.state().get_untracked().loading);
}

#[test]
fn sign_up_creates_regular_user() {
    let (service, store) = service_with_store();
    let cancel = CancelToken::new();
    let ok = block_on(service.sign_up("Bob", "bob@example.com", "pw", &cancel)).unwrap();
    assert!(ok);

    let user = current_user(&service).unwrap();
    assert_eq!(user.name, "Bob");
    assert_eq!(user.role, Role::User);
    assert_eq!(store.load(), Some(user));
}

#[test]
fn sign_up_with_reserved_email_is_policy_error() {
    let (service, store) = service_with_store();
    let cancel = CancelToken::new();
    let err = block_on(service.sign_up("Bob", "cpnow2@yahoo.com", "x", &cancel)).unwrap_err();
    assert_eq!(err, AuthError::EmailInUse);
    assert_eq!(err.to_string(), "This email is already in use");
    assert_eq!(current_user(&service), None);
    assert_eq!(store.load(), None);
    assert!(!service.state().get_untracked().loading);
}

#[test]
fn sign_up_with_empty_field_reports_failure() {
    let (service, _) = service_with_store();
    let cancel = CancelToken::new();
    assert!(!block_on(service.sign_up("", "bob@example.com", "pw", &cancel)).unwrap());
    assert!(!block_on(service.sign_up("Bob", "", "pw", &cancel)).unwrap());
    assert!(!block_on(service.sign_up("Bob", "bob@example.com", "", &cancel)).unwrap());
    assert_eq!(current_user(&service), None);
}

#[test]
fn sign_out_clears_identity_and_store() {
    let (service, store) = service_with_store();
    let cancel = CancelToken::new();
    block_on(service.sign_in("alice@example.com", "hunter2", false, &cancel)).unwrap();

    service.sign_out();
    assert_eq!(current_user(&service), None);
    assert_eq!(store.load(), None);

    // Idempotent.
    service.sign_out();
    assert_eq!(current_user(&service), None);
}

#[test]
fn social_sign_in_synthesizes_provider_user() {
    let (service, store) = service_with_store();
    let cancel = CancelToken::new();
    let ok = block_on(service.sign_in_with_social(SocialProvider::Google, &cancel)).unwrap();
    assert!(ok);

    let user = current_user(&service).unwrap();
    assert_eq!(user.role, Role::User);
    assert_eq!(user.name, "Google User");
    assert_eq!(user.email, "user@google.example.com");
    assert_eq!(store.load(), Some(user));
}

#[test]
fn social_failure_hook_propagates_without_mutation() {
    let store = Arc::new(MemoryStore::default());
    let service = SessionService::new(store.clone())
        .with_social_failure(|provider| Some(format!("{} is unreachable", provider.display_name())));
    let cancel = CancelToken::new();

    let err = block_on(service.sign_in_with_social(SocialProvider::Apple, &cancel)).unwrap_err();
    assert_eq!(err, AuthError::Provider("Apple is unreachable".to_owned()));
    assert_eq!(current_user(&service), None);
    assert_eq!(store.load(), None);
    assert!(!service.state().get_untracked().loading);
}

#[test]
fn cancelled_token_abandons_result() {
    let (service, store) = service_with_store();
    let cancel = CancelToken::new();
    cancel.cancel();

    let err = block_on(service.sign_in("alice@example.com", "hunter2", false, &cancel)).unwrap_err();
    assert_eq!(err, AuthError::Cancelled);
    assert_eq!(current_user(&service), None);
    assert_eq!(store.load(), None);
    assert!(!service.state().get_untracked().loading);
}

#[test]
fn overlapping_operation_is_rejected() {
    let (service, _) = service_with_store();
    let cancel = CancelToken::new();

    let held = service.begin().unwrap();
    let err = block_on(service.sign_in("alice@example.com", "hunter2", false, &cancel)).unwrap_err();
    assert_eq!(err, AuthError::Busy);
    drop(held);

    // Slot is free again after the guard drops.
    let ok = block_on(service.sign_in("alice@example.com", "hunter2", false, &cancel)).unwrap();
    assert!(ok);
    assert!(!service.state().get_untracked().loading);
}

#[test]
fn loading_resets_after_success() {
    let (service, _) = service_with_store();
    let cancel = CancelToken::new();
    block_on(service.sign_in("alice@example.com", "hunter2", false, &cancel)).unwrap();
    assert!(!service.state().get_untracked().loading);
}
