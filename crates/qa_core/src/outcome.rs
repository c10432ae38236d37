use std::fmt;

use crate::{Action, BackendReply, ReplyField};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Success,
    Failure,
}

/// Settled result of one backend call, already reduced to display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success(String),
    Failure(String),
}

impl RequestOutcome {
    /// Picks the success field, then the error field. A reply with neither
    /// settles successfully with empty text.
    ///
    /// An application-reported error is still a `Success`: the request itself
    /// completed.
    pub fn from_reply(reply: &BackendReply, success: ReplyField, error: ReplyField) -> Self {
        let text = reply
            .field(success)
            .or_else(|| reply.field(error))
            .unwrap_or_default();
        RequestOutcome::Success(text.to_string())
    }

    /// Projects a finished call for `action` into its outcome.
    pub fn from_result<E: fmt::Display>(action: Action, result: Result<BackendReply, E>) -> Self {
        match result {
            Ok(reply) => Self::from_reply(&reply, action.success_field(), action.error_field()),
            Err(err) => RequestOutcome::Failure(format!("{} error: {}", action.label(), err)),
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        match self {
            RequestOutcome::Success(_) => OutcomeKind::Success,
            RequestOutcome::Failure(_) => OutcomeKind::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind() == OutcomeKind::Success
    }

    pub fn text(&self) -> &str {
        match self {
            RequestOutcome::Success(text) | RequestOutcome::Failure(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            RequestOutcome::Success(text) | RequestOutcome::Failure(text) => text,
        }
    }
}
