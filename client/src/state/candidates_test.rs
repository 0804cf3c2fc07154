use super::*;

fn form(name: &str) -> CandidateForm {
    CandidateForm {
        name: name.to_owned(),
        party: " Blue ".to_owned(),
        age: "41".to_owned(),
        qualification: "Graduate".to_owned(),
        qualification_other: String::new(),
    }
}

fn candidate(id: i64, name: &str) -> Candidate {
    Candidate {
        id,
        name: name.to_owned(),
        party: "Blue".to_owned(),
        age: String::new(),
        qualification: String::new(),
        photo: String::new(),
    }
}

// =============================================================
// Form
// =============================================================

#[test]
fn blank_name_is_rejected() {
    assert_eq!(form("   ").validate(), Err(NAME_REQUIRED));
    assert_eq!(form("Ada").validate(), Ok(()));
}

#[test]
fn other_qualification_uses_free_text() {
    let mut f = form("Ada");
    f.qualification = OTHER.to_owned();
    f.qualification_other = "  Bar exam ".to_owned();
    assert!(f.shows_other_field());
    assert_eq!(f.resolved_qualification(), "Bar exam");
}

#[test]
fn multipart_fields_are_trimmed_in_order() {
    let fields = form(" Ada ").multipart_fields();
    let keys: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["name", "party", "age", "qualification"]);
    assert_eq!(fields[0].1, "Ada");
    assert_eq!(fields[1].1, "Blue");
}

// =============================================================
// Cards
// =============================================================

#[test]
fn photo_url_falls_back_to_default() {
    assert_eq!(photo_url(""), DEFAULT_CANDIDATE_PHOTO);
    assert_eq!(photo_url("/uploads/ada.png"), "/uploads/ada.png");
}

#[test]
fn card_marks_missing_details_na() {
    let card = CandidateCard::from(&candidate(1, "Ada"));
    assert_eq!(card.age, "N/A");
    assert_eq!(card.qualification, "N/A");
    assert_eq!(card.photo_url, DEFAULT_CANDIDATE_PHOTO);
}

// =============================================================
// Add outcomes
// =============================================================

#[test]
fn add_with_id_prepends_card_from_response_and_form() {
    let resp = AddCandidateResponse {
        candidate_id: Some(9),
        photo_url: Some("/uploads/ada.png".to_owned()),
        ..Default::default()
    };
    let AddOutcome::Prepend(card) = add_outcome(&resp, &form("Ada")) else {
        panic!("expected prepend");
    };
    assert_eq!(card.id, 9);
    assert_eq!(card.name, "Ada");
    assert_eq!(card.party, "Blue");
    assert_eq!(card.age, "41");
    assert_eq!(card.photo_url, "/uploads/ada.png");
}

#[test]
fn add_without_id_requests_reload() {
    let resp = AddCandidateResponse { message: Some("Candidate added".to_owned()), ..Default::default() };
    assert_eq!(add_outcome(&resp, &form("Ada")), AddOutcome::Reload);
}

#[test]
fn prepend_never_duplicates_existing_card() {
    let mut state = CandidatesState::default();
    state.replace_all(&[candidate(1, "Ada"), candidate(2, "Bo")]);
    let resp = AddCandidateResponse { candidate_id: Some(2), name: Some("Bo".to_owned()), ..Default::default() };
    if let AddOutcome::Prepend(card) = add_outcome(&resp, &form("Bo")) {
        state.prepend(card);
    }
    let ids: Vec<_> = state.cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn empty_placeholder_waits_for_first_load() {
    let mut state = CandidatesState::loading();
    assert!(!state.shows_empty_placeholder());
    state.replace_all(&[]);
    assert!(state.shows_empty_placeholder());
}

#[test]
fn failed_load_hides_empty_placeholder() {
    let mut state = CandidatesState::loading();
    state.loading = false;
    state.error = Some("Failed to load candidates".to_owned());
    assert!(!state.shows_empty_placeholder());
}
