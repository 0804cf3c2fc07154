use super::*;

fn frames(n: usize) -> FrameSet {
    let mut set = FrameSet::default();
    for i in 0..n {
        set.push(format!("data:image/jpeg;base64,AAA{i}"));
    }
    set
}

// =============================================================
// Paths and payloads
// =============================================================

#[test]
fn delete_endpoints_embed_id() {
    assert_eq!(delete_election_endpoint(4821), "/admin/delete_election/4821");
    assert_eq!(delete_candidate_endpoint(3), "/admin/delete_candidate/3");
    assert_eq!(delete_voter_endpoint(12), "/admin/delete_voter/12");
    assert_eq!(ballot_endpoint(77), "/voter/get_candidates/77");
}

#[test]
fn credentials_payload_has_username_and_password() {
    assert_eq!(
        credentials_payload("root", "hunter2"),
        serde_json::json!({ "username": "root", "password": "hunter2" })
    );
}

#[test]
fn register_faces_payload_serializes_frames_as_array() {
    let payload = register_faces_payload("Eve", "EN-7", &frames(2));
    assert_eq!(payload["name"], "Eve");
    assert_eq!(payload["enrollment"], "EN-7");
    assert_eq!(payload["frames"].as_array().map(Vec::len), Some(2));
    assert_eq!(payload["frames"][0], "data:image/jpeg;base64,AAA0");
}

#[test]
fn authenticate_payload_uses_username_key() {
    let payload = authenticate_payload("eve", "EN-7", &frames(5));
    assert_eq!(payload["username"], "eve");
    assert_eq!(payload["frames"].as_array().map(Vec::len), Some(5));
}

#[test]
fn vote_payload_sends_on_chain_id_as_candidate_id() {
    assert_eq!(vote_payload(4, 2), serde_json::json!({ "voter_id": 4, "candidate_id": 2 }));
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn login_requires_ok_status_and_success_flag() {
    let accepted = LoginResponse { success: true, error: None };
    assert_eq!(login_outcome(200, true, &accepted), Ok(()));

    let refused = LoginResponse { success: false, error: Some("Invalid username or password".to_owned()) };
    assert_eq!(
        login_outcome(401, false, &refused).unwrap_err().user_message("Server error"),
        "Invalid username or password"
    );

    let silent = LoginResponse::default();
    assert_eq!(login_outcome(200, true, &silent).unwrap_err().to_string(), "Invalid credentials");
}

#[test]
fn authenticate_success_builds_session_identity() {
    let body = AuthenticateResponse {
        success: true,
        voter_id: Some(31),
        voter_name: Some("Eve Adams".to_owned()),
        error: None,
    };
    let session = authenticate_outcome("eve", "EN-7", 200, true, &body).unwrap();
    assert_eq!(session.username, "eve");
    assert_eq!(session.enrollment, "EN-7");
    assert_eq!(session.voter_id, "31");
    assert_eq!(session.voter_name, "Eve Adams");
}

#[test]
fn authenticate_failure_surfaces_server_error() {
    let body = AuthenticateResponse { success: false, error: Some("Already voted".to_owned()), ..Default::default() };
    let err = authenticate_outcome("eve", "EN-7", 403, false, &body).unwrap_err();
    assert_eq!(err.user_message("Camera or server error"), "Already voted");
}

#[test]
fn authenticate_success_without_voter_id_is_rejected() {
    let body = AuthenticateResponse { success: true, ..Default::default() };
    let err = authenticate_outcome("eve", "EN-7", 200, true, &body).unwrap_err();
    assert_eq!(err.to_string(), "Face verification failed");
}

#[test]
fn setup_outcome_distinguishes_created_and_existing() {
    let created = SetupAdminResponse { success: true, ..Default::default() };
    assert_eq!(setup_outcome(201, &created), Ok(SetupOutcome::Created));

    let existing = SetupAdminResponse {
        already_exists: true,
        message: Some("Admin already registered".to_owned()),
        ..Default::default()
    };
    assert_eq!(
        setup_outcome(200, &existing),
        Ok(SetupOutcome::AlreadyExists("Admin already registered".to_owned()))
    );

    let failed = SetupAdminResponse { error: Some("Face not detected".to_owned()), ..Default::default() };
    assert_eq!(setup_outcome(400, &failed).unwrap_err().to_string(), "Face not detected");
}

#[test]
fn register_outcomes_follow_status_and_voter_id() {
    let body = RegisterVoterResponse { error: Some("Enrollment number already exists".to_owned()), ..Default::default() };
    assert_eq!(
        register_faces_outcome(400, false, &body).unwrap_err().to_string(),
        "Enrollment number already exists"
    );
    assert_eq!(register_faces_outcome(201, true, &RegisterVoterResponse::default()), Ok(()));

    let created = RegisterVoterResponse { voter_id: Some(8), ..Default::default() };
    assert_eq!(register_image_outcome(201, &created), Ok(8));
    assert_eq!(
        register_image_outcome(500, &RegisterVoterResponse::default()).unwrap_err().to_string(),
        "Voter registration failed"
    );
}

#[test]
fn delete_outcomes_use_error_text() {
    let refused = MessageResponse { error: Some("Candidate not found".to_owned()), ..Default::default() };
    assert!(delete_candidate_outcome(404, &refused).is_err());
    assert_eq!(delete_candidate_outcome(200, &MessageResponse::default()), Ok(()));

    let voted = MessageResponse { error: Some("Cannot delete voter who has already voted".to_owned()), ..Default::default() };
    assert_eq!(
        delete_voter_outcome(400, false, &voted).unwrap_err().to_string(),
        "Cannot delete voter who has already voted"
    );
}

#[test]
fn delete_election_outcome_returns_server_message() {
    let body = MessageResponse { message: Some("Election deleted successfully & voters reset".to_owned()), ..Default::default() };
    assert_eq!(
        delete_election_outcome(200, true, &body),
        Ok("Election deleted successfully & voters reset".to_owned())
    );
    assert_eq!(
        delete_election_outcome(200, true, &MessageResponse::default()),
        Ok("Election deleted".to_owned())
    );
}

#[test]
fn vote_outcome_returns_transaction_hash() {
    let body = VoteResponse { success: true, tx_hash: Some("0xabc".to_owned()), error: None };
    assert_eq!(vote_outcome(200, true, &body), Ok(Some("0xabc".to_owned())));

    let refused = VoteResponse { error: Some("You have already voted".to_owned()), ..Default::default() };
    assert_eq!(vote_outcome(403, false, &refused).unwrap_err().to_string(), "You have already voted");
}

#[test]
fn current_election_gateway_error_is_not_no_election() {
    let body: CurrentElectionResponse = serde_json::from_str(r#"{"error":"Server error"}"#).unwrap();
    let err = current_election_outcome(502, false, &body).unwrap_err();
    assert_eq!(err, ApiError::Rejected { status: 502, message: "Server error".to_owned() });
}

#[test]
fn current_election_reads_exists_flag_on_success() {
    let none: CurrentElectionResponse = serde_json::from_str(r#"{"exists":false}"#).unwrap();
    assert_eq!(current_election_outcome(200, true, &none), Ok(None));

    let active: CurrentElectionResponse = serde_json::from_str(r#"{"exists":true,"id":12,"title":"Council"}"#).unwrap();
    assert_eq!(
        current_election_outcome(200, true, &active),
        Ok(Some(Election { id: 12, title: "Council".to_owned() }))
    );
}

#[test]
fn create_election_keeps_existing_election_reply() {
    let body = CreateElectionResponse { exists: true, election_id: Some(7), ..Default::default() };
    let resp = create_election_outcome(200, true, body).unwrap();
    assert_eq!(resp.election_id, Some(7));
}

#[test]
fn create_election_non_2xx_surfaces_server_text() {
    let gateway: CreateElectionResponse = serde_json::from_str(r#"{"error":"Server error"}"#).unwrap();
    assert_eq!(create_election_outcome(502, false, gateway).unwrap_err().to_string(), "Server error");

    let failed = CreateElectionResponse { message: Some("Election title required".to_owned()), ..Default::default() };
    assert_eq!(create_election_outcome(400, false, failed).unwrap_err().to_string(), "Election title required");

    assert_eq!(
        create_election_outcome(500, false, CreateElectionResponse::default()).unwrap_err().to_string(),
        "Server error while creating election"
    );
}
