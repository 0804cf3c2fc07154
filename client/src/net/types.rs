//! Wire DTOs for the voting backend's JSON responses.
//!
//! DESIGN
//! ======
//! The backend is loose about optional fields and numeric-vs-string values
//! (candidate `age` comes back as either), so most fields default and a few
//! use lenient deserializers instead of failing the whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Image shown when a candidate has no uploaded photo.
pub const DEFAULT_CANDIDATE_PHOTO: &str = "/static/default_candidate.png";

/// The single active election.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Election {
    pub id: i64,
    pub title: String,
}

/// `GET /admin/current_election`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CurrentElectionResponse {
    #[serde(default)]
    pub exists: bool,
    pub id: Option<i64>,
    pub title: Option<String>,
    pub error: Option<String>,
}

impl CurrentElectionResponse {
    /// The election, when the backend reports one with an id.
    pub fn election(&self) -> Option<Election> {
        if !self.exists {
            return None;
        }
        self.id.map(|id| Election { id, title: self.title.clone().unwrap_or_default() })
    }
}

/// `GET /admin/check_admin`.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct CheckAdminResponse {
    #[serde(default)]
    pub exists: bool,
}

/// `POST /admin/create_election`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreateElectionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub exists: bool,
    pub election_id: Option<i64>,
    pub election_name: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Generic `{success?, message?, error?}` body returned by most mutations.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageResponse {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl MessageResponse {
    /// Server-supplied text, preferring `error` over `message`.
    pub fn text(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

/// A candidate as listed by `GET /admin/get_candidates`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub party: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub age: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub qualification: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub photo: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CandidatesResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub error: Option<String>,
}

/// `POST /admin/add_candidate`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AddCandidateResponse {
    pub candidate_id: Option<i64>,
    pub name: Option<String>,
    pub party: Option<String>,
    pub photo_url: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// A candidate on the voter's ballot (`GET /voter/get_candidates/:id`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotCandidate {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub party: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub photo: String,
    pub on_chain_id: i64,
}

/// A registered voter (`GET /admin/get_voters`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    pub id: i64,
    pub name: String,
    pub enrollment: String,
    #[serde(default)]
    pub has_voted: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct VotersResponse {
    #[serde(default)]
    pub voters: Vec<Voter>,
}

/// `POST /admin/login`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub error: Option<String>,
}

/// `POST /admin/setup_admin`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SetupAdminResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub already_exists: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// `POST /admin/register_voter` and `/admin/register_voter_faces`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RegisterVoterResponse {
    pub voter_id: Option<i64>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// `POST /voter/authenticate`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthenticateResponse {
    #[serde(default)]
    pub success: bool,
    pub voter_id: Option<i64>,
    pub voter_name: Option<String>,
    pub error: Option<String>,
}

/// `POST /voter/vote`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VoteResponse {
    #[serde(default)]
    pub success: bool,
    pub tx_hash: Option<String>,
    pub error: Option<String>,
}

/// One row of the on-chain tally (`GET /admin/results`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub candidate_id: i64,
    pub name: String,
    #[serde(rename = "voteCount", default)]
    pub vote_count: u64,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResultsResponse {
    #[serde(default)]
    pub results: Vec<ResultRow>,
    pub error: Option<String>,
}

/// Accept strings, numbers, booleans, or `null` and normalize them to a string.
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}
