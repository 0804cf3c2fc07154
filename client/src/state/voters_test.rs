use super::*;

fn voter(id: i64, has_voted: bool) -> Voter {
    Voter { id, name: format!("Voter {id}"), enrollment: format!("E{id}"), has_voted }
}

#[test]
fn registration_requires_both_fields() {
    let form = RegistrationForm { name: "Ada".to_owned(), enrollment: "  ".to_owned() };
    assert_eq!(form.validate(), Err(IDENTITY_REQUIRED));
    let form = RegistrationForm { name: " Ada ".to_owned(), enrollment: " E1 ".to_owned() };
    assert_eq!(form.validate(), Ok(("Ada".to_owned(), "E1".to_owned())));
}

#[test]
fn clear_resets_identity_fields() {
    let mut form = RegistrationForm { name: "Ada".to_owned(), enrollment: "E1".to_owned() };
    form.clear();
    assert_eq!(form, RegistrationForm::default());
}

#[test]
fn voted_rows_cannot_be_deleted() {
    let voted = VoterRow::from(&voter(1, true));
    let pending = VoterRow::from(&voter(2, false));
    assert_eq!(voted.status_label(), "Voted");
    assert!(!voted.can_delete());
    assert_eq!(pending.status_label(), "Not Voted");
    assert!(pending.can_delete());
}

#[test]
fn empty_list_shows_no_voters() {
    let state = VotersState::from_result::<()>(Ok(Vec::new()));
    assert_eq!(state.placeholder(), Some(NO_VOTERS));
    assert!(state.rows().is_empty());
}

#[test]
fn load_failure_shows_failed_placeholder() {
    let state = VotersState::from_result(Err("boom"));
    assert_eq!(state.placeholder(), Some(LOAD_FAILED));
}

#[test]
fn loaded_rows_keep_server_order() {
    let state = VotersState::from_result::<()>(Ok(vec![voter(3, false), voter(1, true)]));
    assert_eq!(state.placeholder(), None);
    let ids: Vec<_> = state.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 1]);
}
