use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use qa_core::{BackendReply, BackendRequest, Effect, Msg, RequestId, RequestOutcome};
use qa_engine::{ClientSettings, EngineError, EngineEvent, EngineHandle};
use qa_logging::{qa_debug, qa_error, qa_info};

const EVENT_POLL: Duration = Duration::from_millis(50);

pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings)?;
        Ok(Self::with_engine(engine, msg_tx))
    }

    fn with_engine(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) -> Self {
        let runner = Self { engine, msg_tx };
        runner.spawn_event_loop();
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit {
                    request_id,
                    request,
                } => {
                    log_submit(request_id, &request);
                    let action = request.action();
                    if let Err(err) = self.engine.submit(request_id, request) {
                        qa_error!("Submit #{} not delivered: {}", request_id, err);
                        // Settle it here; the engine will never report back.
                        let outcome =
                            RequestOutcome::from_result(action, Err::<BackendReply, _>(err));
                        let _ = self.msg_tx.send(Msg::RequestSettled {
                            action,
                            request_id,
                            outcome,
                        });
                    }
                }
            }
        }
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            let Some(event) = engine.recv_timeout(EVENT_POLL) else {
                continue;
            };
            match event {
                EngineEvent::RequestSettled {
                    request_id,
                    action,
                    outcome,
                } => {
                    let msg = Msg::RequestSettled {
                        action,
                        request_id,
                        outcome,
                    };
                    if msg_tx.send(msg).is_err() {
                        qa_debug!("UI gone; dropping engine events");
                        break;
                    }
                }
            }
        });
    }
}

fn log_submit(request_id: RequestId, request: &BackendRequest) {
    match request {
        BackendRequest::Scrape { url } => {
            qa_info!("Submit #{} scrape url={}", request_id, url);
        }
        BackendRequest::Upload { path } => {
            qa_info!("Submit #{} upload path={}", request_id, path.display());
        }
        BackendRequest::Query { query } => {
            qa_info!("Submit #{} query len={}", request_id, query.len());
        }
    }
}
