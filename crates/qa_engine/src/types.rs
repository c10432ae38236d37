use std::fmt;

use qa_core::{Action, RequestId, RequestOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    RequestSettled {
        request_id: RequestId,
        action: Action,
        outcome: RequestOutcome,
    },
}

/// A request that produced no usable reply. The message is what the user sees
/// after the action label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct BackendError {
    pub kind: FailureKind,
    pub message: String,
}

impl BackendError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidBaseUrl,
    Network,
    Timeout,
    HttpStatus(u16),
    FileRead,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidBaseUrl => write!(f, "invalid base url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::FileRead => write!(f, "file read error"),
        }
    }
}
