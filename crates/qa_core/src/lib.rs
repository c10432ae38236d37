//! Q/A client core: pure state machine and view-model helpers.
mod action;
mod effect;
mod lifecycle;
mod msg;
mod outcome;
mod state;
mod update;
mod view_model;

pub use action::{Action, BackendReply, BackendRequest, ReplyField};
pub use effect::Effect;
pub use lifecycle::{Phase, RequestId, RequestLifecycle};
pub use msg::Msg;
pub use outcome::{OutcomeKind, RequestOutcome};
pub use state::{AppState, SELECT_FILE_NOTICE};
pub use update::update;
pub use view_model::{ActionCardView, AppViewModel, ResponseView};
