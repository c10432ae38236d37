use crate::{AppState, BackendRequest, Effect, Msg, SELECT_FILE_NOTICE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(url) => {
            state.set_url(url);
            Vec::new()
        }
        Msg::QueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::FileChosen(file) => {
            state.set_selected_file(file);
            Vec::new()
        }
        Msg::ScrapeClicked => {
            let request = BackendRequest::Scrape {
                url: state.url().to_string(),
            };
            submit(&mut state, request)
        }
        Msg::UploadClicked => match state.selected_file() {
            Some(path) => {
                let request = BackendRequest::Upload {
                    path: path.to_path_buf(),
                };
                submit(&mut state, request)
            }
            None => {
                state.set_notice(SELECT_FILE_NOTICE);
                Vec::new()
            }
        },
        Msg::AskClicked => {
            let request = BackendRequest::Query {
                query: state.query().to_string(),
            };
            submit(&mut state, request)
        }
        Msg::RequestSettled {
            action,
            request_id,
            outcome,
        } => {
            state.settle_request(action, request_id, outcome);
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.clear_notice();
            Vec::new()
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState, request: BackendRequest) -> Vec<Effect> {
    let request_id = state.begin_request(request.action());
    state.clear_notice();
    vec![Effect::Submit {
        request_id,
        request,
    }]
}
