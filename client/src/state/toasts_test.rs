use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push("A", "first", ToastVariant::Info);
    let second = state.push("B", "second", ToastVariant::Destructive);
    assert_ne!(first, second);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].title, "A");
    assert_eq!(state.items[1].variant, ToastVariant::Destructive);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push("A", "", ToastVariant::Info);
    let second = state.push("B", "", ToastVariant::Info);

    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push("A", "", ToastVariant::Info);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.push("A", "", ToastVariant::Info);
    state.dismiss(first);
    let second = state.push("B", "", ToastVariant::Info);
    assert_ne!(first, second);
}

#[test]
fn default_variant_is_info() {
    assert_eq!(ToastVariant::default(), ToastVariant::Info);
}
