//! Voter registration form and the admin voter table.

#[cfg(test)]
#[path = "voters_test.rs"]
mod voters_test;

use crate::net::types::Voter;

pub const IDENTITY_REQUIRED: &str = "Name and enrollment required";
pub const NO_VOTERS: &str = "No voters found";
pub const LOAD_FAILED: &str = "Failed to load voters";
pub const DELETE_FAILED: &str = "Delete failed";

/// How the captured frames are submitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegistrationMode {
    /// Every frame as JSON data URLs.
    #[default]
    Faces,
    /// Only the first frame, uploaded as a multipart image.
    SingleImage,
}

impl RegistrationMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Faces => "Full face set",
            Self::SingleImage => "Single photo",
        }
    }
}

/// Identity fields entered before a face capture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub enrollment: String,
}

impl RegistrationForm {
    /// Trimmed `(name, enrollment)`.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message when either field is blank.
    pub fn validate(&self) -> Result<(String, String), &'static str> {
        let name = self.name.trim();
        let enrollment = self.enrollment.trim();
        if name.is_empty() || enrollment.is_empty() {
            return Err(IDENTITY_REQUIRED);
        }
        Ok((name.to_owned(), enrollment.to_owned()))
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.enrollment.clear();
    }
}

/// One rendered row of the voter table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoterRow {
    pub id: i64,
    pub name: String,
    pub enrollment: String,
    pub has_voted: bool,
}

impl VoterRow {
    pub fn status_label(&self) -> &'static str {
        if self.has_voted { "Voted" } else { "Not Voted" }
    }

    /// Voters who already cast a ballot cannot be removed.
    pub fn can_delete(&self) -> bool {
        !self.has_voted
    }
}

impl From<&Voter> for VoterRow {
    fn from(v: &Voter) -> Self {
        Self { id: v.id, name: v.name.clone(), enrollment: v.enrollment.clone(), has_voted: v.has_voted }
    }
}

/// Table contents as last loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VotersState {
    #[default]
    Loading,
    Loaded(Vec<VoterRow>),
    Failed,
}

impl VotersState {
    pub fn from_result<E>(result: Result<Vec<Voter>, E>) -> Self {
        match result {
            Ok(voters) => Self::Loaded(voters.iter().map(VoterRow::from).collect()),
            Err(_) => Self::Failed,
        }
    }

    /// Placeholder text shown instead of rows, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading..."),
            Self::Loaded(rows) if rows.is_empty() => Some(NO_VOTERS),
            Self::Loaded(_) => None,
            Self::Failed => Some(LOAD_FAILED),
        }
    }

    pub fn rows(&self) -> &[VoterRow] {
        match self {
            Self::Loaded(rows) => rows,
            _ => &[],
        }
    }
}
