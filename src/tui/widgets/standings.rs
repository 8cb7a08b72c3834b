//! Championship standings tables with the drivers/constructors sub-tabs.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState};

use super::status::{render_error, render_loading};
use crate::fmt;
use crate::model::{ConstructorStanding, DriverStanding};
use crate::tui::state::{AppState, LoadState, StandingsTab};
use crate::tui::style::Styles;

const DRIVER_HEADERS: [&str; 5] = ["POS", "NO", "DRIVER", "TEAM", "POINTS"];

const DRIVER_WIDTHS: [Constraint; 5] = [
    Constraint::Length(4),
    Constraint::Length(4),
    Constraint::Fill(2),
    Constraint::Fill(2),
    Constraint::Length(7),
];

const CONSTRUCTOR_HEADERS: [&str; 3] = ["POS", "TEAM", "POINTS"];

const CONSTRUCTOR_WIDTHS: [Constraint; 3] = [
    Constraint::Length(4),
    Constraint::Fill(1),
    Constraint::Length(7),
];

/// Renders the standings route: sub-tab bar on top, the active table below.
pub fn render_standings(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Sub-tabs
        Constraint::Min(3),    // Table
    ])
    .split(area);

    render_subtabs(frame, chunks[0], state);

    match state.standings.data.load() {
        LoadState::Loading => render_loading(
            frame,
            chunks[1],
            state.spinner_frame,
            "Fetching championship standings",
        ),
        LoadState::Error(message) => render_error(frame, chunks[1], message),
        LoadState::Loaded(standings) => match state.standings.tab {
            StandingsTab::Drivers => {
                let headshot = state
                    .standings
                    .selected_driver()
                    .and_then(|d| d.headshot_url.clone());
                render_drivers(
                    frame,
                    chunks[1],
                    &standings.drivers,
                    headshot,
                    &mut state.standings.drivers_table,
                );
            }
            StandingsTab::Constructors => render_constructors(
                frame,
                chunks[1],
                &standings.constructors,
                &mut state.standings.constructors_table,
            ),
        },
    }
}

fn render_subtabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let spans: Vec<Span> = [StandingsTab::Drivers, StandingsTab::Constructors]
        .iter()
        .flat_map(|tab| {
            let style = if *tab == state.standings.tab {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            let key = match tab {
                StandingsTab::Drivers => " d:",
                StandingsTab::Constructors => " c:",
            };
            let name = format!("{} ", tab.name());
            vec![Span::styled(key, Styles::dim()), Span::styled(name, style)]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::default()), area);
}

fn render_drivers(
    frame: &mut Frame,
    area: Rect,
    drivers: &[DriverStanding],
    headshot: Option<String>,
    table_state: &mut TableState,
) {
    let header_cells: Vec<Span> = DRIVER_HEADERS
        .iter()
        .map(|h| Span::styled(*h, Styles::table_header()))
        .collect();
    let header = Row::new(header_cells).style(Styles::table_header());

    // POS is upstream order, not a computed ranking.
    let rows: Vec<Row<'static>> = drivers
        .iter()
        .enumerate()
        .map(|(i, d)| {
            Row::new(vec![
                (i + 1).to_string(),
                fmt::format_opt_i64(d.number),
                fmt::driver_name(d.first_name.as_deref(), d.last_name.as_deref()),
                fmt::format_opt_str(d.team.as_deref()),
                fmt::format_points(d.points),
            ])
        })
        .collect();

    let mut block = Block::default()
        .title(format!("Drivers ({})", drivers.len()))
        .borders(Borders::ALL)
        .style(Styles::default());
    if let Some(url) = headshot {
        block = block.title_bottom(Line::styled(format!(" {url} "), Styles::dim()));
    }

    let table = Table::new(rows, DRIVER_WIDTHS)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Styles::selected());

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(table, area, table_state);
}

fn render_constructors(
    frame: &mut Frame,
    area: Rect,
    constructors: &[ConstructorStanding],
    table_state: &mut TableState,
) {
    let header_cells: Vec<Span> = CONSTRUCTOR_HEADERS
        .iter()
        .map(|h| Span::styled(*h, Styles::table_header()))
        .collect();
    let header = Row::new(header_cells).style(Styles::table_header());

    let rows: Vec<Row<'static>> = constructors
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Row::new(vec![
                (i + 1).to_string(),
                fmt::format_opt_str(c.name.as_deref()),
                fmt::format_points(c.points),
            ])
        })
        .collect();

    let table = Table::new(rows, CONSTRUCTOR_WIDTHS)
        .header(header)
        .block(
            Block::default()
                .title(format!("Constructors ({})", constructors.len()))
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .column_spacing(1)
        .row_highlight_style(Styles::selected());

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(table, area, table_state);
}
