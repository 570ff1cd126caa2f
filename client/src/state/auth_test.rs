use super::*;

#[test]
fn default_state_is_loading_and_anonymous() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn loading_state_is_never_authenticated() {
    let state = AuthState {
        user: Some(User::admin()),
        loading: true,
    };
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn settled_user_is_authenticated_but_not_admin() {
    let state = AuthState {
        user: Some(User::from_email("alice@example.com")),
        loading: false,
    };
    assert!(state.is_authenticated());
    assert!(!state.is_admin());
}

#[test]
fn settled_admin_is_admin() {
    let state = AuthState {
        user: Some(User::admin()),
        loading: false,
    };
    assert!(state.is_authenticated());
    assert!(state.is_admin());
}

#[test]
fn settled_anonymous_is_neither() {
    let state = AuthState {
        user: None,
        loading: false,
    };
    assert!(!state.is_authenticated());
    assert!(!state.is_admin());
}
