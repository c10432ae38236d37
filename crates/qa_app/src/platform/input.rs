use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use qa_core::{Action, AppState, Msg};

/// Which card's input line receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Url,
    File,
    Query,
}

impl Focus {
    pub fn action(self) -> Action {
        match self {
            Focus::Url => Action::Scrape,
            Focus::File => Action::Upload,
            Focus::Query => Action::Query,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Focus::Url => Focus::File,
            Focus::File => Focus::Query,
            Focus::Query => Focus::Url,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Url => Focus::Query,
            Focus::File => Focus::Url,
            Focus::Query => Focus::File,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    Send(Msg),
    FocusNext,
    FocusPrev,
    Quit,
    Ignore,
}

pub fn handle_key(focus: Focus, key: KeyEvent, state: &AppState) -> KeyCommand {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => KeyCommand::Quit,
        KeyCode::Tab | KeyCode::Down => KeyCommand::FocusNext,
        KeyCode::BackTab | KeyCode::Up => KeyCommand::FocusPrev,
        KeyCode::Esc => KeyCommand::Send(Msg::NoticeDismissed),
        KeyCode::Enter => KeyCommand::Send(trigger_msg(focus.action())),
        KeyCode::Backspace => {
            let mut text = field_text(focus, state);
            if text.pop().is_none() {
                return KeyCommand::Ignore;
            }
            KeyCommand::Send(edit_msg(focus, text))
        }
        KeyCode::Char(ch) if !ctrl => {
            let mut text = field_text(focus, state);
            text.push(ch);
            KeyCommand::Send(edit_msg(focus, text))
        }
        _ => KeyCommand::Ignore,
    }
}

fn trigger_msg(action: Action) -> Msg {
    match action {
        Action::Scrape => Msg::ScrapeClicked,
        Action::Upload => Msg::UploadClicked,
        Action::Query => Msg::AskClicked,
    }
}

pub fn field_text(focus: Focus, state: &AppState) -> String {
    match focus {
        Focus::Url => state.url().to_string(),
        Focus::Query => state.query().to_string(),
        Focus::File => state
            .selected_file()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
    }
}

fn edit_msg(focus: Focus, text: String) -> Msg {
    match focus {
        Focus::Url => Msg::UrlChanged(text),
        Focus::Query => Msg::QueryChanged(text),
        Focus::File if text.is_empty() => Msg::FileChosen(None),
        Focus::File => Msg::FileChosen(Some(PathBuf::from(text))),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use qa_core::{update, AppState, Msg};

    use super::{handle_key, Focus, KeyCommand};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_appends_to_focused_field() {
        let (state, _) = update(AppState::new(), Msg::UrlChanged("http://a".into()));
        assert_eq!(
            handle_key(Focus::Url, key(KeyCode::Char('b')), &state),
            KeyCommand::Send(Msg::UrlChanged("http://ab".into()))
        );
        assert_eq!(
            handle_key(Focus::Query, key(KeyCode::Char('?')), &state),
            KeyCommand::Send(Msg::QueryChanged("?".into()))
        );
    }

    #[test]
    fn erasing_last_path_char_clears_selection() {
        let (state, _) = update(AppState::new(), Msg::FileChosen(Some(PathBuf::from("a"))));
        assert_eq!(
            handle_key(Focus::File, key(KeyCode::Backspace), &state),
            KeyCommand::Send(Msg::FileChosen(None))
        );
        assert_eq!(
            handle_key(Focus::Url, key(KeyCode::Backspace), &state),
            KeyCommand::Ignore
        );
    }

    #[test]
    fn enter_triggers_focused_action() {
        let state = AppState::new();
        assert_eq!(
            handle_key(Focus::File, key(KeyCode::Enter), &state),
            KeyCommand::Send(Msg::UploadClicked)
        );
        assert_eq!(
            handle_key(Focus::Query, key(KeyCode::Enter), &state),
            KeyCommand::Send(Msg::AskClicked)
        );
    }

    #[test]
    fn ctrl_c_quits_instead_of_typing() {
        let state = AppState::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(Focus::Url, ctrl_c, &state), KeyCommand::Quit);
    }

    #[test]
    fn focus_cycles_through_cards() {
        assert_eq!(Focus::Url.next().next().next(), Focus::Url);
        assert_eq!(Focus::Url.prev(), Focus::Query);
    }
}
