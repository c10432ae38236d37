use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use qa_core::{BackendRequest, RequestId};
use qa_logging::{qa_debug, qa_info, qa_warn};

use crate::{run_request, Backend, ClientSettings, EngineEvent, ReqwestBackend};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("could not start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("could not create backend client: {0}")]
    Backend(#[from] crate::BackendError),
    #[error("engine stopped")]
    Stopped,
}

enum EngineCommand {
    Submit {
        request_id: RequestId,
        request: BackendRequest,
    },
    Shutdown,
}

/// Runs backend calls on a dedicated thread.
///
/// Each submitted request becomes an independent task; nothing is queued
/// behind another request, and only [`EngineHandle::shutdown`] stops one that
/// is already running.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, EngineError> {
        let backend = ReqwestBackend::new(settings)?;
        Self::with_backend(Arc::new(backend))
    }

    pub fn with_backend(backend: Arc<dyn Backend>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                if matches!(command, EngineCommand::Shutdown) {
                    qa_info!("engine shutting down");
                    break;
                }
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx).await;
                });
            }
            qa_debug!("engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    /// Hands the request to the engine thread. Fails with
    /// [`EngineError::Stopped`] once that thread is gone, in which case no
    /// event will ever arrive for `request_id`.
    pub fn submit(
        &self,
        request_id: RequestId,
        request: BackendRequest,
    ) -> Result<(), EngineError> {
        self.cmd_tx
            .send(EngineCommand::Submit {
                request_id,
                request,
            })
            .map_err(|_| EngineError::Stopped)
    }

    /// Stops accepting commands. Requests already running are dropped with
    /// the runtime.
    pub fn shutdown(&self) {
        if self.cmd_tx.send(EngineCommand::Shutdown).is_err() {
            qa_warn!("engine already stopped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    backend: &dyn Backend,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            request_id,
            request,
        } => {
            qa_info!("request {} started: {}", request_id, request.action());
            let outcome = run_request(backend, &request).await;
            let _ = event_tx.send(EngineEvent::RequestSettled {
                request_id,
                action: request.action(),
                outcome,
            });
        }
        EngineCommand::Shutdown => {}
    }
}
