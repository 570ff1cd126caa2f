use super::*;
use crate::session::user::Role;

#[test]
fn load_on_empty_store_is_none() {
    let store = MemoryStore::default();
    assert_eq!(store.load(), None);
}

#[test]
fn save_then_load_round_trips() {
    let store = MemoryStore::default();
    let user = User::from_signup("Jo", "jo@example.com");
    store.save(&user);
    assert_eq!(store.load(), Some(user));
}

#[test]
fn save_overwrites_previous_record() {
    let store = MemoryStore::default();
    store.save(&User::from_email("first@example.com"));
    let second = User::admin();
    store.save(&second);
    assert_eq!(store.load(), Some(second));
}

#[test]
fn clear_removes_record() {
    let store = MemoryStore::default();
    store.save(&User::admin());
    store.clear();
    assert_eq!(store.load(), None);
    assert_eq!(store.raw(), None);
}

#[test]
fn malformed_record_loads_as_none() {
    let store = MemoryStore::default();
    store.set_raw("{not json");
    assert_eq!(store.load(), None);

    store.set_raw(r#"{"id":"u1"}"#);
    assert_eq!(store.load(), None);
}

#[test]
fn stored_shape_matches_contract() {
    let store = MemoryStore::default();
    store.save(&User::admin());
    let raw = store.raw().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["id"], "admin-1");
    assert_eq!(value["role"], "admin");
    assert!(value["avatar"].is_string());
}

#[test]
fn role_round_trips_through_store() {
    let store = MemoryStore::default();
    store.save(&User::from_email("alice@example.com"));
    assert_eq!(store.load().unwrap().role, Role::User);
}
