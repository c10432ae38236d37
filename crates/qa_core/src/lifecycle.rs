use crate::{OutcomeKind, RequestOutcome};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Settled(OutcomeKind),
}

/// Lifecycle of the requests issued by a single action.
///
/// Triggering again while `Pending` issues another independent request. Every
/// outstanding request settles on its own and the last one to settle owns the
/// display text; the action stays `Pending` until none is outstanding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestLifecycle {
    phase: Phase,
    display_text: String,
    in_flight: Vec<RequestId>,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Outstanding request ids, oldest first.
    pub fn in_flight(&self) -> &[RequestId] {
        &self.in_flight
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Pending
    }

    /// Enters `Pending` for `request_id` and clears the previous text.
    pub fn begin(&mut self, request_id: RequestId) {
        self.phase = Phase::Pending;
        self.display_text.clear();
        self.in_flight.push(request_id);
    }

    /// Applies the outcome of an outstanding request. Unknown or already
    /// settled ids are dropped and return false.
    pub fn settle(&mut self, request_id: RequestId, outcome: RequestOutcome) -> bool {
        let Some(position) = self.in_flight.iter().position(|id| *id == request_id) else {
            return false;
        };
        self.in_flight.remove(position);
        let kind = outcome.kind();
        self.display_text = outcome.into_text();
        if self.in_flight.is_empty() {
            self.phase = Phase::Settled(kind);
        }
        true
    }
}
