use qa_core::{Action, ActionCardView, AppViewModel, OutcomeKind, Phase, ResponseView};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout::screen;
use crate::platform::input::Focus;

const INPUT_PROMPT: &str = "> ";

pub fn render(frame: &mut Frame, view: &AppViewModel, focus: Focus, spinner: usize) {
    let layout = screen(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(APP_TITLE).style(Style::new().add_modifier(Modifier::BOLD))),
        layout.title,
    );

    for card in &view.cards {
        let focused = focus.action() == card.action;
        render_card(frame, layout.card(card.action), view, card, focused);
    }

    render_response(frame, layout.response, &view.response, spinner);
    render_status(frame, layout.status, view);
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewModel,
    card: &ActionCardView,
    focused: bool,
) {
    let border_style = if focused {
        Style::new().fg(Color::Yellow)
    } else {
        Style::new()
    };
    let block = Block::bordered()
        .border_style(border_style)
        .title(Line::from(format!(" {} ", card_title(card.action))))
        .title(Line::from(format!(" [Enter] {} ", button_label(card.action))).right_aligned());
    let inner = block.inner(area);

    let value = input_text(view, card);
    let input_line = if value.is_empty() {
        Line::from(vec![
            Span::raw(INPUT_PROMPT),
            Span::styled(placeholder(card.action), Style::new().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![Span::raw(INPUT_PROMPT), Span::raw(value.clone())])
    };

    let status_line = match card.phase {
        Phase::Pending => Line::from(LOADING_TEXT).style(Style::new().fg(Color::Cyan)),
        Phase::Settled(OutcomeKind::Failure) => {
            Line::from(first_line(&card.display_text)).style(Style::new().fg(Color::Red))
        }
        Phase::Settled(OutcomeKind::Success) => Line::from(first_line(&card.display_text)),
        Phase::Idle => Line::default(),
    };

    frame.render_widget(Paragraph::new(vec![input_line, status_line]).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let offset = (INPUT_PROMPT.len() + value.chars().count()) as u16;
        let x = inner.x + offset.min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

fn render_response(frame: &mut Frame, area: Rect, response: &ResponseView, spinner: usize) {
    let title = match response.source {
        Some(action) if !response.loading => format!(" {RESPONSE_TITLE}: {} ", action.label()),
        _ => format!(" {RESPONSE_TITLE} "),
    };
    let block = Block::bordered().title(Line::from(title));

    let body = if response.loading {
        let frame_char = SPINNER_FRAMES[spinner % SPINNER_FRAMES.len()];
        Paragraph::new(format!("{LOADING_TEXT} {frame_char}"))
    } else {
        Paragraph::new(response.text.as_str()).wrap(Wrap { trim: false })
    };

    frame.render_widget(body.block(block), area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let line = match &view.notice {
        Some(notice) => Line::from(notice.as_str()).style(
            Style::new()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        None => Line::from(KEY_HINTS).style(Style::new().fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn input_text(view: &AppViewModel, card: &ActionCardView) -> String {
    match card.action {
        Action::Scrape => view.url.clone(),
        Action::Query => view.query.clone(),
        Action::Upload => view
            .selected_file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default(),
    }
}

fn first_line(text: &str) -> String {
    text.lines().next().unwrap_or_default().to_string()
}
