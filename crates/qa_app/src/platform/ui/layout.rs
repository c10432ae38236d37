use qa_core::Action;
use ratatui::layout::{Constraint, Layout, Rect};

/// Bordered card: one input line plus one status line.
const CARD_HEIGHT: u16 = 4;

pub struct ScreenLayout {
    pub title: Rect,
    cards: [Rect; 3],
    pub response: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn card(&self, action: Action) -> Rect {
        match action {
            Action::Scrape => self.cards[0],
            Action::Upload => self.cards[1],
            Action::Query => self.cards[2],
        }
    }
}

pub fn screen(area: Rect) -> ScreenLayout {
    let [title, scrape, upload, query, response, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Length(CARD_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenLayout {
        title,
        cards: [scrape, upload, query],
        response,
        status,
    }
}
