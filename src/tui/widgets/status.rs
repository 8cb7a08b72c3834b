//! Loading and error panels shared by the data views.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::navbar::SPINNER;
use crate::tui::style::Styles;

/// Renders the in-flight panel shown while a fetch cycle runs.
pub fn render_loading(frame: &mut Frame, area: Rect, spinner_frame: usize, what: &str) {
    let spinner = SPINNER[spinner_frame % SPINNER.len()];
    let lines = vec![
        Line::default(),
        Line::styled(format!("{spinner} {what}..."), Styles::loading())
            .alignment(Alignment::Center),
    ];
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("Loading")
            .borders(Borders::ALL)
            .style(Styles::default()),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(panel, area);
}

/// Renders the failure panel with the fetch error and the retry hint.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::default(),
        Line::styled("Something went wrong", Styles::error()).alignment(Alignment::Center),
        Line::default(),
        Line::styled(message.to_string(), Styles::default()).alignment(Alignment::Center),
        Line::default(),
        Line::from(vec![
            Span::styled("Press ", Styles::help()),
            Span::styled("r", Styles::help_key()),
            Span::styled(" to retry", Styles::help()),
        ])
        .alignment(Alignment::Center),
    ];
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("Error")
            .borders(Borders::ALL)
            .style(Styles::error()),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(panel, area);
}
