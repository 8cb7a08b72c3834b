//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use super::state::{AppState, Route};
use super::widgets::{
    render_contact, render_footer, render_home, render_navbar, render_races, render_standings,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Main layout: navigation bar, route content, footer
    let chunks = Layout::vertical([
        Constraint::Length(1), // Navigation bar
        Constraint::Min(5),    // Content area
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    render_navbar(frame, chunks[0], state);
    render_content(frame, chunks[1], state);
    render_footer(frame, chunks[2], state);
}

/// Renders content based on the active route.
fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState) {
    match state.route {
        Route::Home => render_home(frame, area),
        Route::Races => render_races(frame, area, state),
        Route::Standings => render_standings(frame, area, state),
        Route::Contact => render_contact(frame, area, state),
    }
}
