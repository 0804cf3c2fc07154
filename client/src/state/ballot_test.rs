use super::*;

fn entry(id: i64, on_chain_id: i64) -> BallotCandidate {
    BallotCandidate {
        id,
        name: format!("Candidate {id}"),
        party: "Green".to_owned(),
        photo: String::new(),
        on_chain_id,
    }
}

#[test]
fn load_moves_to_choosing_without_selection() {
    let mut state = BallotState::default();
    state.load(&[entry(1, 10), entry(2, 20)]);
    assert_eq!(state.phase, BallotPhase::Choosing);
    assert!(!state.can_submit());
    assert_eq!(state.selection(), Err(SELECT_REQUIRED));
    assert_eq!(state.options[0].photo_url, crate::net::types::DEFAULT_CANDIDATE_PHOTO);
}

#[test]
fn selection_resolves_on_chain_id() {
    let mut state = BallotState::default();
    state.load(&[entry(1, 10), entry(2, 20)]);
    state.select(2);
    assert!(state.can_submit());
    assert_eq!(state.selection().map(|o| o.on_chain_id), Ok(20));
}

#[test]
fn unknown_candidate_is_not_selectable() {
    let mut state = BallotState::default();
    state.load(&[entry(1, 10)]);
    state.select(99);
    assert_eq!(state.selected, None);
}

#[test]
fn cast_ballot_is_closed() {
    let mut state = BallotState::default();
    state.load(&[entry(1, 10)]);
    state.select(1);
    state.phase = BallotPhase::Cast(Some("0xabc".to_owned()));
    assert!(state.is_closed());
    assert!(!state.can_submit());
}
