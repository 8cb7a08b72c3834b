//! Key hint line with context-sensitive hints.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode, Route};
use crate::tui::style::Styles;

/// Renders the bottom key hint line.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let spans = match state.input_mode {
        InputMode::Normal => normal_hints(state),
        InputMode::Form => form_hints(),
    };
    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::help()), area);
}

fn normal_hints(state: &AppState) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::styled("1-4", Styles::help_key()),
        Span::styled(":goto ", Styles::help()),
        Span::styled("Tab", Styles::help_key()),
        Span::styled(":next ", Styles::help()),
    ];

    match state.route {
        Route::Home => {}
        Route::Races => {
            spans.push(Span::styled("↑↓", Styles::help_key()));
            spans.push(Span::styled(":select ", Styles::help()));
            if state.races.data.is_error() {
                spans.push(Span::styled("r", Styles::help_key()));
                spans.push(Span::styled(":retry ", Styles::help()));
            }
        }
        Route::Standings => {
            spans.push(Span::styled("d/c", Styles::help_key()));
            spans.push(Span::styled(":tab ", Styles::help()));
            spans.push(Span::styled("↑↓", Styles::help_key()));
            spans.push(Span::styled(":select ", Styles::help()));
            if state.standings.data.is_error() {
                spans.push(Span::styled("r", Styles::help_key()));
                spans.push(Span::styled(":retry ", Styles::help()));
            }
        }
        Route::Contact => {
            spans.push(Span::styled("Enter", Styles::help_key()));
            spans.push(Span::styled(":write ", Styles::help()));
        }
    }

    spans.push(Span::styled("q", Styles::help_key()));
    spans.push(Span::styled(":quit", Styles::help()));
    spans
}

fn form_hints() -> Vec<Span<'static>> {
    vec![
        Span::styled("Tab/↓", Styles::help_key()),
        Span::styled(":next ", Styles::help()),
        Span::styled("S-Tab/↑", Styles::help_key()),
        Span::styled(":prev ", Styles::help()),
        Span::styled("Enter", Styles::help_key()),
        Span::styled(":advance/send ", Styles::help()),
        Span::styled("Esc", Styles::help_key()),
        Span::styled(":done ", Styles::help()),
        Span::styled("Ctrl-C", Styles::help_key()),
        Span::styled(":quit", Styles::help()),
    ]
}
