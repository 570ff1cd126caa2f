use super::*;

fn complete_draft() -> SubmissionDraft {
    SubmissionDraft {
        title: "Meeting Agenda Builder".to_owned(),
        description: "Draft structured meeting agendas".to_owned(),
        category: "business".to_owned(),
        tags: "meetings, agenda".to_owned(),
        template: "Draft an agenda for a meeting about {topic}.".to_owned(),
    }
}

#[test]
fn parse_tags_splits_and_trims() {
    assert_eq!(
        parse_tags("creative, story , fiction"),
        ["creative", "story", "fiction"]
    );
}

#[test]
fn parse_tags_drops_empty_entries() {
    assert_eq!(parse_tags("a,,b, ,"), ["a", "b"]);
    assert!(parse_tags("").is_empty());
    assert!(parse_tags(" , ,").is_empty());
}

#[test]
fn complete_draft_validates() {
    assert_eq!(validate_submission(&complete_draft()), Ok(()));
}

#[test]
fn any_missing_field_fails_validation() {
    let strips: [fn(&mut SubmissionDraft); 5] = [
        |d| d.title.clear(),
        |d| d.description.clear(),
        |d| d.category.clear(),
        |d| d.tags = "  ,  ".to_owned(),
        |d| d.template = "   ".to_owned(),
    ];
    for strip in strips {
        let mut draft = complete_draft();
        strip(&mut draft);
        assert_eq!(validate_submission(&draft), Err("All fields are required."));
    }
}

#[test]
fn submitted_message_depends_on_role() {
    assert!(submitted_message(Role::Admin).contains("published"));
    assert!(submitted_message(Role::User).contains("pending review"));
}
