//! Election manager state: the active election and the dashboard tally.
//!
//! DESIGN
//! ======
//! Response handling is expressed as pure transitions on `ElectionState` so
//! the dashboard component only wires signals to them.

#[cfg(test)]
#[path = "election_test.rs"]
mod election_test;

use crate::net::error::ApiError;
use crate::net::types::{CreateElectionResponse, Election, ResultRow};
use crate::state::status::StatusMessage;

pub const TITLE_REQUIRED: &str = "Election name required!";

/// Trim the title and reject blanks. A blank title never reaches the network.
pub fn validate_title(raw: &str) -> Result<String, &'static str> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TITLE_REQUIRED);
    }
    Ok(title.to_owned())
}

#[derive(Clone, Debug, Default)]
pub struct ElectionState {
    pub current: Option<Election>,
    pub busy: bool,
    pub status: StatusMessage,
    pub results: Option<Vec<ResultRow>>,
}

impl ElectionState {
    /// Candidate and voter sections are usable only with an election.
    pub fn unlocked(&self) -> bool {
        self.current.is_some()
    }

    pub fn banner(&self) -> Option<String> {
        self.current.as_ref().map(|e| format!("Election Active: {}", e.title))
    }

    pub fn apply_created(&mut self, title: &str, resp: CreateElectionResponse) {
        self.busy = false;
        match (resp.success, resp.election_id) {
            (true, Some(id)) => {
                self.current = Some(Election { id, title: title.to_owned() });
                self.status = StatusMessage::success(format!("Election Created! ID = {id}"));
            }
            (false, Some(id)) => {
                let existing = resp.election_name.unwrap_or_else(|| title.to_owned());
                self.current = Some(Election { id, title: existing });
                self.status =
                    StatusMessage::warning(resp.message.unwrap_or_else(|| "Election already exists".to_owned()));
            }
            _ => {
                self.status =
                    StatusMessage::error(resp.message.unwrap_or_else(|| "Election creation failed".to_owned()));
            }
        }
    }

    pub fn apply_create_error(&mut self, err: &ApiError) {
        self.busy = false;
        self.status = StatusMessage::error(err.user_message("Server error while creating election"));
    }

    pub fn apply_deleted(&mut self, outcome: Result<String, ApiError>) {
        self.busy = false;
        match outcome {
            Ok(message) => {
                self.current = None;
                self.results = None;
                self.status = StatusMessage::success(message);
            }
            Err(err) => self.status = StatusMessage::error(err.user_message("Server error")),
        }
    }

    pub fn apply_results(&mut self, outcome: Result<Vec<ResultRow>, ApiError>) {
        match outcome {
            Ok(rows) => self.results = Some(sorted_results(rows)),
            Err(err) => {
                self.results = None;
                self.status = StatusMessage::error(err.user_message("Failed to load results"));
            }
        }
    }
}

/// Highest vote count first; ties keep ballot order.
pub fn sorted_results(mut rows: Vec<ResultRow>) -> Vec<ResultRow> {
    rows.sort_by(|a, b| b.vote_count.cmp(&a.vote_count));
    rows
}
