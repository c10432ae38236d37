use crate::{BackendRequest, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one backend call; its outcome comes back as `Msg::RequestSettled`.
    Submit {
        request_id: RequestId,
        request: BackendRequest,
    },
}
