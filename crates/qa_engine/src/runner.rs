use qa_core::{BackendRequest, RequestOutcome};
use qa_logging::{qa_info, qa_warn};

use crate::Backend;

/// Performs one backend call for `request` and reduces it to an outcome.
///
/// Every exit path yields exactly one outcome: replies go through the action's
/// success/error fields, failures become "<Action> error: <message>".
pub async fn run_request(backend: &dyn Backend, request: &BackendRequest) -> RequestOutcome {
    let action = request.action();
    let result = backend.send(request).await;
    if let Err(err) = &result {
        qa_warn!("{} request failed ({}): {}", action, err.kind, err.message);
    }

    let outcome = RequestOutcome::from_result(action, result);
    qa_info!(
        "{} settled success={} text_len={}",
        action,
        outcome.is_success(),
        outcome.text().len()
    );
    outcome
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use qa_core::{BackendReply, BackendRequest, RequestOutcome};

    use super::run_request;
    use crate::{Backend, BackendError, FailureKind};

    struct CannedBackend {
        result: Result<BackendReply, BackendError>,
    }

    #[async_trait::async_trait]
    impl Backend for CannedBackend {
        async fn scrape(&self, _url: &str) -> Result<BackendReply, BackendError> {
            self.result.clone()
        }

        async fn upload(&self, _path: &Path) -> Result<BackendReply, BackendError> {
            self.result.clone()
        }

        async fn query(&self, _query: &str) -> Result<BackendReply, BackendError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn reply_is_projected_through_action_fields() {
        let backend = CannedBackend {
            result: Ok(BackendReply::answer("42")),
        };
        let request = BackendRequest::Query {
            query: "What is X?".to_string(),
        };
        assert_eq!(
            run_request(&backend, &request).await,
            RequestOutcome::Success("42".to_string())
        );
    }

    #[tokio::test]
    async fn failure_is_labelled_with_action() {
        let backend = CannedBackend {
            result: Err(BackendError::new(FailureKind::Timeout, "timeout")),
        };
        let request = BackendRequest::Upload {
            path: PathBuf::from("a.csv"),
        };
        assert_eq!(
            run_request(&backend, &request).await,
            RequestOutcome::Failure("Upload error: timeout".to_string())
        );
    }
}
