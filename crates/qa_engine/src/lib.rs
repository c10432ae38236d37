//! Q/A client engine: backend IO and effect execution.
mod backend;
mod engine;
mod runner;
mod types;
mod upload;

pub use backend::{Backend, ClientSettings, ReqwestBackend, DEFAULT_BASE_URL};
pub use engine::{EngineError, EngineHandle};
pub use runner::run_request;
pub use types::{BackendError, EngineEvent, FailureKind};
pub use upload::mime_for;
