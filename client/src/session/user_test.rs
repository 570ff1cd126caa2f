use super::*;

#[test]
fn admin_identity_is_fixed() {
    let user = User::admin();
    assert_eq!(user.id, "admin-1");
    assert_eq!(user.name, "Admin User");
    assert_eq!(user.email, ADMIN_EMAIL);
    assert_eq!(user.role, Role::Admin);
    assert!(user.avatar.is_some());
}

#[test]
fn from_email_uses_local_part_as_name() {
    let user = User::from_email("alice@example.com");
    assert_eq!(user.name, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, Role::User);
}

#[test]
fn from_email_without_at_sign_keeps_full_value() {
    let user = User::from_email("alice");
    assert_eq!(user.name, "alice");
}

#[test]
fn generated_ids_are_unique() {
    let a = User::from_email("a@example.com");
    let b = User::from_email("a@example.com");
    assert_ne!(a.id, b.id);
}

#[test]
fn from_signup_is_regular_user() {
    let user = User::from_signup("Bob", "bob@example.com");
    assert_eq!(user.name, "Bob");
    assert_eq!(user.role, Role::User);
}

#[test]
fn from_social_encodes_provider() {
    let user = User::from_social(SocialProvider::Google);
    assert_eq!(user.name, "Google User");
    assert_eq!(user.email, "user@google.example.com");
    assert_eq!(user.role, Role::User);

    let user = User::from_social(SocialProvider::Apple);
    assert_eq!(user.name, "Apple User");
    assert_eq!(user.email, "user@apple.example.com");
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn user_round_trips_through_json() {
    let user = User::admin();
    let raw = serde_json::to_string(&user).unwrap();
    let parsed: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, user);
}

#[test]
fn missing_avatar_deserializes_as_none() {
    let raw = r#"{"id":"u1","name":"Jo","email":"jo@example.com","role":"user"}"#;
    let parsed: User = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.avatar, None);
}

#[test]
fn role_labels() {
    assert_eq!(Role::User.label(), "user");
    assert_eq!(Role::Admin.label(), "admin");
}
