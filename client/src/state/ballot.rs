//! Ballot selection and vote submission state.
//!
//! DESIGN
//! ======
//! The ballot page only opens for a verified voter. A cast vote is final for
//! the tab: the voter identity is cleared and the page shows the receipt.

#[cfg(test)]
#[path = "ballot_test.rs"]
mod ballot_test;

use crate::net::types::BallotCandidate;

use super::candidates::photo_url;

pub const SELECT_REQUIRED: &str = "Please select a candidate";
pub const NO_CANDIDATES: &str = "No candidates on this ballot.";

/// Ballot entry as rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BallotOption {
    pub id: i64,
    pub on_chain_id: i64,
    pub name: String,
    pub party: String,
    pub photo_url: String,
}

impl From<&BallotCandidate> for BallotOption {
    fn from(c: &BallotCandidate) -> Self {
        Self {
            id: c.id,
            on_chain_id: c.on_chain_id,
            name: c.name.clone(),
            party: c.party.clone(),
            photo_url: photo_url(&c.photo),
        }
    }
}

/// Where the ballot page is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BallotPhase {
    #[default]
    Loading,
    Choosing,
    Submitting,
    /// Vote recorded; carries the transaction hash when one was returned.
    Cast(Option<String>),
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct BallotState {
    pub options: Vec<BallotOption>,
    pub selected: Option<i64>,
    pub phase: BallotPhase,
}

impl BallotState {
    pub fn load(&mut self, candidates: &[BallotCandidate]) {
        self.options = candidates.iter().map(BallotOption::from).collect();
        self.selected = None;
        self.phase = BallotPhase::Choosing;
    }

    /// Select by candidate id; unknown ids are ignored.
    pub fn select(&mut self, id: i64) {
        if self.options.iter().any(|o| o.id == id) {
            self.selected = Some(id);
        }
    }

    /// The selected option, ready to submit.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message when nothing is selected.
    pub fn selection(&self) -> Result<&BallotOption, &'static str> {
        self.selected
            .and_then(|id| self.options.iter().find(|o| o.id == id))
            .ok_or(SELECT_REQUIRED)
    }

    pub fn can_submit(&self) -> bool {
        self.phase == BallotPhase::Choosing && self.selected.is_some()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.phase, BallotPhase::Cast(_))
    }
}
