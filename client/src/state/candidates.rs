//! Candidate manager state: the add form, the card list, and add outcomes.
//!
//! DESIGN
//! ======
//! Cards are typed view-models built either from the list endpoint or from
//! an add response. The list is keyed by candidate id: prepending a card
//! that is already present replaces it, so the list never shows duplicates.

#[cfg(test)]
#[path = "candidates_test.rs"]
mod candidates_test;

use crate::net::types::{AddCandidateResponse, Candidate, DEFAULT_CANDIDATE_PHOTO};

pub const NAME_REQUIRED: &str = "Candidate name is required!";

/// Qualification choices offered by the form. `Other` reveals a free-text field.
pub const QUALIFICATIONS: [&str; 7] = ["", "High School", "Diploma", "Graduate", "Post Graduate", "Doctorate", OTHER];
pub const OTHER: &str = "Other";

/// Raw values of the add-candidate form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateForm {
    pub name: String,
    pub party: String,
    pub age: String,
    pub qualification: String,
    pub qualification_other: String,
}

impl CandidateForm {
    /// # Errors
    ///
    /// Returns the user-facing message when the name is blank.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err(NAME_REQUIRED);
        }
        Ok(())
    }

    pub fn shows_other_field(&self) -> bool {
        self.qualification == OTHER
    }

    /// The qualification actually submitted.
    pub fn resolved_qualification(&self) -> String {
        if self.shows_other_field() {
            self.qualification_other.trim().to_owned()
        } else {
            self.qualification.clone()
        }
    }

    /// Text fields of the multipart body, in submission order.
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.trim().to_owned()),
            ("party", self.party.trim().to_owned()),
            ("age", self.age.trim().to_owned()),
            ("qualification", self.resolved_qualification()),
        ]
    }
}

/// Resolve a stored photo path to an `<img src>`; blanks use the default image.
pub fn photo_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() { DEFAULT_CANDIDATE_PHOTO.to_owned() } else { raw.to_owned() }
}

fn or_na(value: &str) -> String {
    if value.trim().is_empty() { "N/A".to_owned() } else { value.to_owned() }
}

/// Rendered candidate card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateCard {
    pub id: i64,
    pub name: String,
    pub party: String,
    pub age: String,
    pub qualification: String,
    pub photo_url: String,
}

impl From<&Candidate> for CandidateCard {
    fn from(c: &Candidate) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            party: c.party.clone(),
            age: or_na(&c.age),
            qualification: or_na(&c.qualification),
            photo_url: photo_url(&c.photo),
        }
    }
}

/// What the list should do after a successful add.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The response identified the candidate; show it immediately.
    Prepend(CandidateCard),
    /// No id came back; re-fetch the list.
    Reload,
}

/// Decide how to reflect an accepted add, filling gaps from the submitted form.
pub fn add_outcome(resp: &AddCandidateResponse, form: &CandidateForm) -> AddOutcome {
    let Some(id) = resp.candidate_id else {
        return AddOutcome::Reload;
    };
    let name = resp.name.clone().unwrap_or_else(|| form.name.trim().to_owned());
    let party = resp.party.clone().unwrap_or_else(|| form.party.trim().to_owned());
    AddOutcome::Prepend(CandidateCard {
        id,
        name,
        party,
        age: or_na(&form.age),
        qualification: or_na(&form.resolved_qualification()),
        photo_url: photo_url(resp.photo_url.as_deref().unwrap_or_default()),
    })
}

/// Candidate list for the active election.
#[derive(Clone, Debug, Default)]
pub struct CandidatesState {
    pub cards: Vec<CandidateCard>,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl CandidatesState {
    /// Initial state before the first fetch completes.
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// The empty-list placeholder applies only to a completed, successful load.
    pub fn shows_empty_placeholder(&self) -> bool {
        !self.loading && self.error.is_none() && self.cards.is_empty()
    }

    pub fn replace_all(&mut self, candidates: &[Candidate]) {
        self.cards = candidates.iter().map(CandidateCard::from).collect();
        self.loading = false;
        self.error = None;
    }

    /// Insert at the top, dropping any existing card with the same id.
    pub fn prepend(&mut self, card: CandidateCard) {
        self.cards.retain(|c| c.id != card.id);
        self.cards.insert(0, card);
    }
}
