use std::path::PathBuf;

use crate::{Action, Phase};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url: String,
    pub query: String,
    pub selected_file: Option<PathBuf>,
    /// One card per action, in `Action::ALL` order.
    pub cards: Vec<ActionCardView>,
    pub response: ResponseView,
    pub notice: Option<String>,
}

impl AppViewModel {
    pub fn card(&self, action: Action) -> Option<&ActionCardView> {
        self.cards.iter().find(|card| card.action == action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCardView {
    pub action: Action,
    pub phase: Phase,
    pub loading: bool,
    pub display_text: String,
}

/// The shared response region: shows the most recently settled action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseView {
    pub loading: bool,
    pub text: String,
    pub source: Option<Action>,
}
