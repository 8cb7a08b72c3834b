//! Race schedule table.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Row, Table};

use super::status::{render_error, render_loading};
use crate::fmt;
use crate::tui::state::{AppState, LoadState};
use crate::tui::style::Styles;

const HEADERS: [&str; 6] = ["ROUND", "DATE", "CIRCUIT", "COUNTRY", "SESSION", "NAME"];

const WIDTHS: [Constraint; 6] = [
    Constraint::Length(5),
    Constraint::Length(17),
    Constraint::Fill(1),
    Constraint::Length(16),
    Constraint::Length(12),
    Constraint::Fill(1),
];

/// Renders the race schedule for the current season.
pub fn render_races(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let (rows, title) = match state.races.data.load() {
        LoadState::Loading => {
            render_loading(frame, area, state.spinner_frame, "Fetching the race schedule");
            return;
        }
        LoadState::Error(message) => {
            let message = message.clone();
            render_error(frame, area, &message);
            return;
        }
        LoadState::Loaded(sessions) => {
            // An empty season still renders the header row.
            let rows: Vec<Row<'static>> = sessions
                .iter()
                .map(|s| {
                    Row::new(vec![
                        fmt::format_opt_i64(s.round),
                        fmt::format_session_date(&s.date),
                        s.circuit.clone(),
                        s.country.clone(),
                        s.session.clone(),
                        s.name.clone(),
                    ])
                })
                .collect();
            let title = format!("Races ({} sessions)", sessions.len());
            (rows, title)
        }
    };

    let header_cells: Vec<Span> = HEADERS
        .iter()
        .map(|h| Span::styled(*h, Styles::table_header()))
        .collect();
    let header = Row::new(header_cells).style(Styles::table_header());

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .column_spacing(1)
        .row_highlight_style(Styles::selected());

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(table, area, &mut state.races.table);
}
