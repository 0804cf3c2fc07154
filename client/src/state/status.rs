//! One-line status messages shown under forms.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// Visual tone of a status line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "status status--info",
            Self::Success => "status status--success",
            Self::Warning => "status status--warning",
            Self::Error => "status status--error",
        }
    }
}

/// Text plus tone for a status line. Empty text renders nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub tone: Tone,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { tone: Tone::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { tone: Tone::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { tone: Tone::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { tone: Tone::Error, text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
