//! Navigation bar showing the brand, routes, and fetch activity.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode, Route};
use crate::tui::style::Styles;

/// Spinner frames cycled while a fetch is in flight.
pub const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Renders the navigation bar.
pub fn render_navbar(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(11), // Brand
        Constraint::Min(20),    // Routes
        Constraint::Length(16), // Activity
    ])
    .split(area);

    let brand = Paragraph::new(" PITWALL ").style(Styles::brand());
    frame.render_widget(brand, chunks[0]);

    // Routes
    let tabs: Vec<Span> = Route::all()
        .iter()
        .enumerate()
        .flat_map(|(i, route)| {
            let style = if *route == state.route {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            let num = format!(" {}:", i + 1);
            let name = format!("{} ", route.name());
            vec![Span::styled(num, Styles::dim()), Span::styled(name, style)]
        })
        .collect();
    let tabs_widget = Paragraph::new(Line::from(tabs)).style(Styles::header());
    frame.render_widget(tabs_widget, chunks[1]);

    // Activity: editing indicator, or the fetch spinner
    let (activity, style) = if state.input_mode == InputMode::Form {
        (" EDITING ".to_string(), Styles::header())
    } else if state.is_loading() {
        let spinner = SPINNER[state.spinner_frame % SPINNER.len()];
        (format!(" {spinner} fetching "), Styles::header())
    } else {
        (String::new(), Styles::header())
    };
    frame.render_widget(Paragraph::new(activity).style(style), chunks[2]);
}
