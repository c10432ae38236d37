use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

/// A user-triggered operation against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Scrape,
    Upload,
    Query,
}

impl Action {
    /// All actions in the order they are shown to the user.
    pub const ALL: [Action; 3] = [Action::Scrape, Action::Upload, Action::Query];

    /// Prefix used when a request fails before the backend answers.
    pub fn label(self) -> &'static str {
        match self {
            Action::Scrape => "Scrape",
            Action::Upload => "Upload",
            Action::Query => "Query",
        }
    }

    pub fn success_field(self) -> ReplyField {
        match self {
            Action::Scrape | Action::Upload => ReplyField::Message,
            Action::Query => ReplyField::Answer,
        }
    }

    pub fn error_field(self) -> ReplyField {
        ReplyField::Error
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Action::Scrape => 0,
            Action::Upload => 1,
            Action::Query => 2,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Named fields a backend reply may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyField {
    Message,
    Answer,
    Error,
}

/// Body of every backend response. All fields are optional; unknown keys
/// (e.g. `product_id` on scrape) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct BackendReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl BackendReply {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            message: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            answer: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            error: Some(text.into()),
            ..Self::default()
        }
    }

    /// Returns the field's text, treating an empty string as absent.
    pub fn field(&self, field: ReplyField) -> Option<&str> {
        let value = match field {
            ReplyField::Message => self.message.as_deref(),
            ReplyField::Answer => self.answer.as_deref(),
            ReplyField::Error => self.error.as_deref(),
        };
        value.filter(|text| !text.is_empty())
    }
}

/// One request to the backend, carrying only the input relevant to its action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendRequest {
    Scrape { url: String },
    Upload { path: PathBuf },
    Query { query: String },
}

impl BackendRequest {
    pub fn action(&self) -> Action {
        match self {
            BackendRequest::Scrape { .. } => Action::Scrape,
            BackendRequest::Upload { .. } => Action::Upload,
            BackendRequest::Query { .. } => Action::Query,
        }
    }
}
