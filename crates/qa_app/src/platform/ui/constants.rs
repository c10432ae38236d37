use qa_core::Action;

pub const APP_TITLE: &str = "Q/A Assistant";
pub const RESPONSE_TITLE: &str = "Response";
pub const LOADING_TEXT: &str = "Loading...";
pub const KEY_HINTS: &str = "Tab: next field | Enter: run | Esc: dismiss | Ctrl-Q: quit";
pub const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

pub fn card_title(action: Action) -> &'static str {
    match action {
        Action::Scrape => "Scrape URL",
        Action::Upload => "Upload PDF / CSV / JSON",
        Action::Query => "Ask a Question",
    }
}

pub fn button_label(action: Action) -> &'static str {
    match action {
        Action::Scrape => "Scrape",
        Action::Upload => "Upload & Embed",
        Action::Query => "Ask",
    }
}

pub fn placeholder(action: Action) -> &'static str {
    match action {
        Action::Scrape => "Enter URL",
        Action::Upload => "Path to a .pdf, .csv or .json file",
        Action::Query => "Enter your question",
    }
}
