use super::*;

// =============================================================
// Elections
// =============================================================

#[test]
fn current_election_reports_none_when_missing() {
    let resp: CurrentElectionResponse = serde_json::from_str(r#"{"exists":false}"#).unwrap();
    assert_eq!(resp.election(), None);
}

#[test]
fn current_election_maps_id_and_title() {
    let resp: CurrentElectionResponse =
        serde_json::from_str(r#"{"exists":true,"id":4821,"title":"Student Council"}"#).unwrap();
    assert_eq!(resp.election(), Some(Election { id: 4821, title: "Student Council".to_owned() }));
}

#[test]
fn current_election_without_id_is_none() {
    let resp: CurrentElectionResponse = serde_json::from_str(r#"{"exists":true}"#).unwrap();
    assert_eq!(resp.election(), None);
}

#[test]
fn create_election_existing_payload_keeps_id() {
    let resp: CreateElectionResponse = serde_json::from_str(
        r#"{"success":false,"exists":true,"message":"Election already exists","election_id":7,"election_name":"Board"}"#,
    )
    .unwrap();
    assert!(!resp.success);
    assert!(resp.exists);
    assert_eq!(resp.election_id, Some(7));
}

// =============================================================
// Candidates
// =============================================================

#[test]
fn candidate_age_accepts_number_or_string() {
    let numeric: Candidate = serde_json::from_str(r#"{"id":1,"name":"Ada","age":42}"#).unwrap();
    assert_eq!(numeric.age, "42");
    let text: Candidate = serde_json::from_str(r#"{"id":2,"name":"Bo","age":"35"}"#).unwrap();
    assert_eq!(text.age, "35");
}

#[test]
fn candidate_missing_and_null_fields_default_to_empty() {
    let c: Candidate = serde_json::from_str(r#"{"id":3,"name":"Cy","party":null,"photo":""}"#).unwrap();
    assert_eq!(c.party, "");
    assert_eq!(c.qualification, "");
    assert_eq!(c.photo, "");
}

#[test]
fn candidates_response_ignores_extra_fields() {
    let resp: CandidatesResponse = serde_json::from_str(
        r#"{"candidates":[{"id":1,"name":"Ada","party":"Blue","age":"","qualification":"PhD","photo":"/uploads/a.png","logo":"","onchain_id":1}]}"#,
    )
    .unwrap();
    assert_eq!(resp.candidates.len(), 1);
    assert_eq!(resp.candidates[0].photo, "/uploads/a.png");
}

#[test]
fn ballot_candidate_parses_on_chain_id() {
    let list: Vec<BallotCandidate> =
        serde_json::from_str(r#"[{"id":9,"name":"Ada","party":"Blue","photo":null,"on_chain_id":2}]"#).unwrap();
    assert_eq!(list[0].on_chain_id, 2);
    assert_eq!(list[0].photo, "");
}

// =============================================================
// Voters and auth
// =============================================================

#[test]
fn voters_response_defaults_has_voted() {
    let resp: VotersResponse =
        serde_json::from_str(r#"{"voters":[{"id":1,"name":"Eve","enrollment":"EN-1"}]}"#).unwrap();
    assert!(!resp.voters[0].has_voted);
}

#[test]
fn authenticate_failure_has_no_identity() {
    let resp: AuthenticateResponse =
        serde_json::from_str(r#"{"success":false,"error":"Face mismatch"}"#).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.voter_id, None);
    assert_eq!(resp.error.as_deref(), Some("Face mismatch"));
}

#[test]
fn message_response_prefers_error_text() {
    let resp: MessageResponse =
        serde_json::from_str(r#"{"message":"ok","error":"Cannot delete voter who has already voted"}"#).unwrap();
    assert_eq!(resp.text(), Some("Cannot delete voter who has already voted"));
}

#[test]
fn results_use_camel_case_wire_names() {
    let resp: ResultsResponse = serde_json::from_str(
        r#"{"results":[{"candidate_id":1,"name":"Ada","voteCount":12,"isActive":true}]}"#,
    )
    .unwrap();
    assert_eq!(resp.results[0].vote_count, 12);
    assert!(resp.results[0].is_active);
}
