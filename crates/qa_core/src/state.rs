use std::path::{Path, PathBuf};

use crate::view_model::{ActionCardView, AppViewModel, ResponseView};
use crate::{Action, RequestId, RequestLifecycle, RequestOutcome};

pub const SELECT_FILE_NOTICE: &str = "Please select a file.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url: String,
    query: String,
    selected_file: Option<PathBuf>,
    /// Indexed by `Action::index`.
    lifecycles: [RequestLifecycle; 3],
    last_settled: Option<Action>,
    notice: Option<String>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let cards = Action::ALL
            .iter()
            .map(|&action| {
                let lifecycle = self.lifecycle(action);
                ActionCardView {
                    action,
                    phase: lifecycle.phase(),
                    loading: lifecycle.is_loading(),
                    display_text: lifecycle.display_text().to_string(),
                }
            })
            .collect();

        let response = ResponseView {
            loading: self.is_any_loading(),
            text: self
                .last_settled
                .map(|action| self.lifecycle(action).display_text().to_string())
                .unwrap_or_default(),
            source: self.last_settled,
        };

        AppViewModel {
            url: self.url.clone(),
            query: self.query.clone(),
            selected_file: self.selected_file.clone(),
            cards,
            response,
            notice: self.notice.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn lifecycle(&self, action: Action) -> &RequestLifecycle {
        &self.lifecycles[action.index()]
    }

    pub fn is_any_loading(&self) -> bool {
        self.lifecycles.iter().any(RequestLifecycle::is_loading)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_url(&mut self, url: String) {
        if self.url != url {
            self.url = url;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_selected_file(&mut self, file: Option<PathBuf>) {
        if self.selected_file != file {
            self.selected_file = file;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
        self.mark_dirty();
    }

    pub(crate) fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Moves the action's lifecycle to `Pending` under a fresh request id.
    pub(crate) fn begin_request(&mut self, action: Action) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.lifecycles[action.index()].begin(request_id);
        self.mark_dirty();
        request_id
    }

    pub(crate) fn settle_request(
        &mut self,
        action: Action,
        request_id: RequestId,
        outcome: RequestOutcome,
    ) -> bool {
        let settled = self.lifecycles[action.index()].settle(request_id, outcome);
        if settled {
            self.last_settled = Some(action);
            self.mark_dirty();
        }
        settled
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
