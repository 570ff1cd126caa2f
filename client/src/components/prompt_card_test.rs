use super::*;

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|&n| n.to_owned()).collect()
}

#[test]
fn two_or_fewer_tags_show_no_overflow_badge() {
    assert_eq!(hidden_tag_count(&tags(&[])), None);
    assert_eq!(hidden_tag_count(&tags(&["a", "b"])), None);
}

#[test]
fn extra_tags_collapse_into_count() {
    assert_eq!(hidden_tag_count(&tags(&["a", "b", "c"])), Some(1));
    assert_eq!(hidden_tag_count(&tags(&["a", "b", "c", "d", "e"])), Some(3));
}

#[test]
fn favorite_toast_copy_follows_toggle_direction() {
    let (title, description) = favorite_toast(true);
    assert_eq!(title, "Added to favorites");
    assert!(description.contains("added"));

    let (title, description) = favorite_toast(false);
    assert_eq!(title, "Removed from favorites");
    assert!(description.contains("removed"));
}
