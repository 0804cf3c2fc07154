//! REST API helpers for the voting backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. The backend answers most
//! failures with JSON carrying `error` or `message`; those become
//! `ApiError::Rejected` so pages can show the server's own text. Outcome
//! interpretation lives in small pure functions so it can be tested without
//! a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{BallotCandidate, Candidate, Election, ResultRow, Voter};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{
    AuthenticateResponse, CreateElectionResponse, CurrentElectionResponse, LoginResponse, MessageResponse,
    RegisterVoterResponse, SetupAdminResponse, VoteResponse,
};
#[cfg(feature = "hydrate")]
use super::types::{AddCandidateResponse, CandidatesResponse, CheckAdminResponse, ResultsResponse, VotersResponse};
use crate::state::session::VoterSession;
use crate::util::capture::FrameSet;

pub const CHECK_ADMIN: &str = "/admin/check_admin";
pub const ADMIN_LOGIN: &str = "/admin/login";
pub const SETUP_ADMIN: &str = "/admin/setup_admin";
pub const CURRENT_ELECTION: &str = "/admin/current_election";
pub const CREATE_ELECTION: &str = "/admin/create_election";
pub const RESULTS: &str = "/admin/results";
pub const ADD_CANDIDATE: &str = "/admin/add_candidate";
pub const GET_CANDIDATES: &str = "/admin/get_candidates";
pub const REGISTER_VOTER: &str = "/admin/register_voter";
pub const REGISTER_VOTER_FACES: &str = "/admin/register_voter_faces";
pub const GET_VOTERS: &str = "/admin/get_voters";
pub const AUTHENTICATE: &str = "/voter/authenticate";
pub const VOTE: &str = "/voter/vote";

// =============================================================================
// PATHS AND PAYLOADS
// =============================================================================

fn delete_election_endpoint(election_id: i64) -> String {
    format!("/admin/delete_election/{election_id}")
}

fn delete_candidate_endpoint(candidate_id: i64) -> String {
    format!("/admin/delete_candidate/{candidate_id}")
}

fn delete_voter_endpoint(voter_id: i64) -> String {
    format!("/admin/delete_voter/{voter_id}")
}

fn ballot_endpoint(election_id: i64) -> String {
    format!("/voter/get_candidates/{election_id}")
}

fn credentials_payload(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password })
}

fn setup_admin_payload(username: &str, password: &str, frames: &FrameSet) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password, "frames": frames })
}

fn register_faces_payload(name: &str, enrollment: &str, frames: &FrameSet) -> serde_json::Value {
    serde_json::json!({ "name": name, "enrollment": enrollment, "frames": frames })
}

fn authenticate_payload(username: &str, enrollment: &str, frames: &FrameSet) -> serde_json::Value {
    serde_json::json!({ "username": username, "enrollment": enrollment, "frames": frames })
}

fn vote_payload(voter_id: i64, on_chain_id: i64) -> serde_json::Value {
    serde_json::json!({ "voter_id": voter_id, "candidate_id": on_chain_id })
}

// =============================================================================
// OUTCOME INTERPRETATION
// =============================================================================

/// Result of `POST /admin/setup_admin`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupOutcome {
    Created,
    AlreadyExists(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn login_outcome(status: u16, ok: bool, body: &LoginResponse) -> Result<(), ApiError> {
    if ok && body.success {
        return Ok(());
    }
    Err(ApiError::rejected(status, body.error.as_deref(), "Invalid credentials"))
}

#[cfg(any(test, feature = "hydrate"))]
fn setup_outcome(status: u16, body: &SetupAdminResponse) -> Result<SetupOutcome, ApiError> {
    if body.success {
        return Ok(SetupOutcome::Created);
    }
    if body.already_exists {
        let message = body.message.clone().unwrap_or_else(|| "Admin already registered".to_owned());
        return Ok(SetupOutcome::AlreadyExists(message));
    }
    let text = body.error.as_deref().or(body.message.as_deref());
    Err(ApiError::rejected(status, text, "Admin setup failed"))
}

#[cfg(any(test, feature = "hydrate"))]
fn current_election_outcome(status: u16, ok: bool, body: &CurrentElectionResponse) -> Result<Option<Election>, ApiError> {
    if !ok {
        return Err(ApiError::rejected(status, body.error.as_deref(), "Server error"));
    }
    Ok(body.election())
}

/// "Already exists" arrives as 2xx with `success: false`, so only non-2xx is an error.
#[cfg(any(test, feature = "hydrate"))]
fn create_election_outcome(
    status: u16,
    ok: bool,
    body: CreateElectionResponse,
) -> Result<CreateElectionResponse, ApiError> {
    if ok {
        return Ok(body);
    }
    let text = body.error.as_deref().or(body.message.as_deref());
    Err(ApiError::rejected(status, text, "Server error while creating election"))
}

#[cfg(any(test, feature = "hydrate"))]
fn authenticate_outcome(
    username: &str,
    enrollment: &str,
    status: u16,
    ok: bool,
    body: &AuthenticateResponse,
) -> Result<VoterSession, ApiError> {
    match (ok && body.success, body.voter_id) {
        (true, Some(voter_id)) => Ok(VoterSession {
            username: username.to_owned(),
            enrollment: enrollment.to_owned(),
            voter_id: voter_id.to_string(),
            voter_name: body.voter_name.clone().unwrap_or_default(),
        }),
        _ => Err(ApiError::rejected(status, body.error.as_deref(), "Face verification failed")),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn register_faces_outcome(status: u16, ok: bool, body: &RegisterVoterResponse) -> Result<(), ApiError> {
    if ok {
        return Ok(());
    }
    Err(ApiError::rejected(status, body.error.as_deref(), "Registration failed"))
}

#[cfg(any(test, feature = "hydrate"))]
fn register_image_outcome(status: u16, body: &RegisterVoterResponse) -> Result<i64, ApiError> {
    body.voter_id
        .ok_or_else(|| ApiError::rejected(status, body.error.as_deref(), "Voter registration failed"))
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_candidate_outcome(status: u16, body: &MessageResponse) -> Result<(), ApiError> {
    match body.error.as_deref() {
        Some(error) => Err(ApiError::rejected(status, Some(error), "Delete failed")),
        None => Ok(()),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_voter_outcome(status: u16, ok: bool, body: &MessageResponse) -> Result<(), ApiError> {
    if ok {
        return Ok(());
    }
    Err(ApiError::rejected(status, body.error.as_deref(), "Delete failed"))
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_election_outcome(status: u16, ok: bool, body: &MessageResponse) -> Result<String, ApiError> {
    if ok {
        return Ok(body.message.clone().unwrap_or_else(|| "Election deleted".to_owned()));
    }
    Err(ApiError::rejected(status, body.text(), "Election delete failed"))
}

#[cfg(any(test, feature = "hydrate"))]
fn vote_outcome(status: u16, ok: bool, body: &VoteResponse) -> Result<Option<String>, ApiError> {
    if ok && body.success {
        return Ok(body.tx_hash.clone());
    }
    Err(ApiError::rejected(status, body.error.as_deref(), "Vote failed"))
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
struct Reply<T> {
    status: u16,
    ok: bool,
    body: T,
}

#[cfg(feature = "hydrate")]
async fn send<T: serde::de::DeserializeOwned>(request: gloo_net::http::Request) -> Result<Reply<T>, ApiError> {
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let ok = resp.ok();
    let body = resp
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(Reply { status, ok, body })
}

#[cfg(feature = "hydrate")]
async fn get<T: serde::de::DeserializeOwned>(url: &str) -> Result<Reply<T>, ApiError> {
    let request = gloo_net::http::Request::get(url)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await
}

#[cfg(feature = "hydrate")]
async fn delete<T: serde::de::DeserializeOwned>(url: &str) -> Result<Reply<T>, ApiError> {
    let request = gloo_net::http::Request::delete(url)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(url: &str, payload: &serde_json::Value) -> Result<Reply<T>, ApiError> {
    let request = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    send(request).await
}

#[cfg(feature = "hydrate")]
async fn post_form<T: serde::de::DeserializeOwned>(url: &str, form: web_sys::FormData) -> Result<Reply<T>, ApiError> {
    let request = gloo_net::http::Request::post(url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

// =============================================================================
// ADMIN ACCOUNT
// =============================================================================

/// Whether an administrator account exists (`GET /admin/check_admin`).
///
/// # Errors
///
/// Returns an error if the request fails or the server answers non-2xx.
pub async fn check_admin() -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let reply = get::<CheckAdminResponse>(CHECK_ADMIN).await?;
        if !reply.ok {
            return Err(ApiError::rejected(reply.status, None, "Server error while checking admin"));
        }
        Ok(reply.body.exists)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Password login via `POST /admin/login`.
///
/// # Errors
///
/// Returns `Rejected` with the server's `error` text when credentials are refused.
pub async fn admin_login(username: &str, password: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let reply = post_json::<LoginResponse>(ADMIN_LOGIN, &credentials_payload(username, password)).await?;
        login_outcome(reply.status, reply.ok, &reply.body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials_payload(username, password);
        Err(ApiError::Unavailable)
    }
}

/// Register the first administrator with captured face frames.
///
/// # Errors
///
/// Returns `Rejected` when the backend refuses the registration.
pub async fn setup_admin(username: &str, password: &str, frames: &FrameSet) -> Result<SetupOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = setup_admin_payload(username, password, frames);
        let reply = post_json::<SetupAdminResponse>(SETUP_ADMIN, &payload).await?;
        setup_outcome(reply.status, &reply.body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = setup_admin_payload(username, password, frames);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// ELECTIONS
// =============================================================================

/// The currently active election, if any.
///
/// # Errors
///
/// Returns `Rejected` on non-2xx, so an unreachable backend is never read as
/// "no election".
pub async fn current_election() -> Result<Option<Election>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let reply = get::<CurrentElectionResponse>(CURRENT_ELECTION).await?;
        current_election_outcome(reply.status, reply.ok, &reply.body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create an election. The raw response is returned because "already exists"
/// is reported as a successful HTTP call with `success: false`.
///
/// # Errors
///
/// Returns `Rejected` with the backend's `error` or `message` on non-2xx.
#[cfg(feature = "hydrate")]
pub async fn create_election(title: &str) -> Result<CreateElectionResponse, ApiError> {
    let payload = serde_json::json!({ "title": title });
    let reply = post_json::<CreateElectionResponse>(CREATE_ELECTION, &payload).await?;
    create_election_outcome(reply.status, reply.ok, reply.body)
}

/// Delete an election by id and return the server's message.
///
/// # Errors
///
/// Returns `Rejected` when the backend reports a failure.
pub async fn delete_election(election_id: i64) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let reply = delete::<MessageResponse>(&delete_election_endpoint(election_id)).await?;
        delete_election_outcome(reply.status, reply.ok, &reply.body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delete_election_endpoint(election_id);
        Err(ApiError::Unavailable)
    }
}

/// Current on-chain tally for the active election.
///
/// # Errors
///
/// Returns `Rejected` when there is no active election.
pub async fn fetch_results() -> Result<Vec<ResultRow>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let reply = get::<ResultsResponse>(RESULTS).await?;
        if let Some(error) = reply.body.error.as_deref() {
            return Err(ApiError::rejected(reply.status, Some(error), "Failed to load results"));
        }
        Ok(reply.body.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// CANDIDATES
// =============================================================================

/// Submit the candidate form as multipart, with an optional photo file.
///
/// # Errors
///
/// Returns `Rejected` with the backend's `error` (duplicate name, no active
/// election, ...).
#[cfg(feature = "hydrate")]
pub async fn add_candidate(
    form: &crate::state::candidates::CandidateForm,
    photo: Option<web_sys::File>,
) -> Result<AddCandidateResponse, ApiError> {
    let data = web_sys::FormData::new().map_err(|e| js_error(&e))?;
    for (key, value) in form.multipart_fields() {
        data.append_with_str(key, &value).map_err(|e| js_error(&e))?;
    }
    if let Some(photo) = photo {
        data.append_with_blob_and_filename("photo", &photo, &photo.name())
            .map_err(|e| js_error(&e))?;
    }
    let reply = post_form::<AddCandidateResponse>(ADD_CANDIDATE, data).await?;
    if let Some(error) = reply.body.error.as_deref() {
        return Err(ApiError::rejected(reply.status, Some(error), "Error adding candidate"));
    }
    Ok(reply.body)
}

/// List the active election's candidates.
///
/// # Errors
///
/// Returns `Rejected` when there is no active election.
pub async fn fetch_candidates() -> Result<Vec<Candidate>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let reply = get::<CandidatesResponse>(GET_CANDIDATES).await?;
        if let Some(error) = reply.body.error.as_deref() {
            return Err(ApiError::rejected(reply.status, Some(error), "Failed to load candidates"));
        }
        Ok(reply.body.candidates)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Delete a candidate by id.
///
/// # Errors
///
/// Returns `Rejected` when the response carries an `error`.
pub async fn delete_candidate(candidate_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let reply = delete::<MessageResponse>(&delete_candidate_endpoint(candidate_id)).await?;
        delete_candidate_outcome(reply.status, &reply.body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delete_candidate_endpoint(candidate_id);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// VOTERS
// =============================================================================

/// Register a voter with the full captured frame set.
///
/// # Errors
///
/// Returns `Rejected` with the backend's `error` (duplicate enrollment, no face, ...).
pub async fn register_voter_faces(name: &str, enrollment: &str, frames: &FrameSet) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = register_faces_payload(name, enrollment, frames);
        let reply = post_json::<RegisterVoterResponse>(REGISTER_VOTER_FACES, &payload).await?;
        register_faces_outcome(reply.status, reply.ok, &reply.body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = register_faces_payload(name, enrollment, frames);
        Err(ApiError::Unavailable)
    }
}

/// Register a voter from one captured frame uploaded as `face.jpg`.
///
/// # Errors
///
/// Returns `Rejected` when no `voter_id` comes back.
#[cfg(feature = "hydrate")]
pub async fn register_voter_image(name: &str, enrollment: &str, frame: &str) -> Result<i64, ApiError> {
    let blob = crate::util::camera::frame_to_blob(frame)
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let data = web_sys::FormData::new().map_err(|e| js_error(&e))?;
    data.append_with_str("name", name).map_err(|e| js_error(&e))?;
    data.append_with_str("enrollment", enrollment).map_err(|e| js_error(&e))?;
    data.append_with_blob_and_filename("image", &blob, "face.jpg")
        .map_err(|e| js_error(&e))?;
    let reply = post_form::<RegisterVoterResponse>(REGISTER_VOTER, data).await?;
    register_image_outcome(reply.status, &reply.body)
}

/// List every registered voter.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not JSON.
pub async fn fetch_voters() -> Result<Vec<Voter>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let reply = get::<VotersResponse>(GET_VOTERS).await?;
        if !reply.ok {
            return Err(ApiError::rejected(reply.status, None, "Failed to load voters"));
        }
        Ok(reply.body.voters)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Delete a voter by id. The backend refuses voters who already voted.
///
/// # Errors
///
/// Returns `Rejected` with the backend's `error` on non-2xx.
pub async fn delete_voter(voter_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let reply = delete::<MessageResponse>(&delete_voter_endpoint(voter_id)).await?;
        delete_voter_outcome(reply.status, reply.ok, &reply.body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delete_voter_endpoint(voter_id);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// VOTER FLOW
// =============================================================================

/// Verify a voter's face. Success yields the identity to store in the session.
///
/// # Errors
///
/// Returns `Rejected` with the backend's `error` (mismatch, already voted, ...).
pub async fn authenticate_voter(username: &str, enrollment: &str, frames: &FrameSet) -> Result<VoterSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = authenticate_payload(username, enrollment, frames);
        let reply = post_json::<AuthenticateResponse>(AUTHENTICATE, &payload).await?;
        authenticate_outcome(username, enrollment, reply.status, reply.ok, &reply.body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authenticate_payload(username, enrollment, frames);
        Err(ApiError::Unavailable)
    }
}

/// Candidates on the ballot for `election_id`.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers non-2xx.
pub async fn fetch_ballot(election_id: i64) -> Result<Vec<BallotCandidate>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&ballot_endpoint(election_id))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let body = resp.json::<MessageResponse>().await.unwrap_or_default();
            return Err(ApiError::rejected(resp.status(), body.text(), "Failed to load ballot"));
        }
        resp.json::<Vec<BallotCandidate>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ballot_endpoint(election_id);
        Err(ApiError::Unavailable)
    }
}

/// Cast a vote for the candidate's on-chain id. Returns the transaction hash.
///
/// # Errors
///
/// Returns `Rejected` with the backend's `error` (already voted, invalid candidate, ...).
pub async fn cast_vote(voter_id: i64, on_chain_id: i64) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let reply = post_json::<VoteResponse>(VOTE, &vote_payload(voter_id, on_chain_id)).await?;
        vote_outcome(reply.status, reply.ok, &reply.body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = vote_payload(voter_id, on_chain_id);
        Err(ApiError::Unavailable)
    }
}
