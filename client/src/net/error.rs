//! Error type shared by every REST helper in `api`.
//!
//! ERROR HANDLING
//! ==============
//! Screens only distinguish two cases: the server answered with its own text
//! (shown verbatim) or something else went wrong (shown as the screen's
//! generic fallback such as "Server error").

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the expected JSON shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The backend answered and rejected the request.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The call is only meaningful in the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a rejection from an optional server text, with a per-screen fallback.
    pub fn rejected(status: u16, message: Option<&str>, fallback: &str) -> Self {
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_owned();
        Self::Rejected { status, message }
    }

    /// Text to show to the user: server text for rejections, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => fallback.to_owned(),
        }
    }
}
