//! Landing page widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

/// Renders the landing page.
pub fn render_home(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::styled("PITWALL", Styles::accent()).alignment(Alignment::Center),
        Line::styled(
            "Formula 1 schedule and standings in your terminal",
            Styles::default(),
        )
        .alignment(Alignment::Center),
        Line::default(),
        Line::styled("Data served live by the OpenF1 API", Styles::dim())
            .alignment(Alignment::Center),
        Line::default(),
        feature("2", "Races", "every session of the current season"),
        feature("3", "Standings", "drivers and constructors"),
        feature("4", "Contact", "drop the team a note"),
        Line::default(),
        Line::from(vec![
            Span::styled("Press ", Styles::help()),
            Span::styled("Tab", Styles::help_key()),
            Span::styled(" or a number key to get going", Styles::help()),
        ])
        .alignment(Alignment::Center),
    ];

    let page = Paragraph::new(lines).block(
        Block::default()
            .title("Home")
            .borders(Borders::ALL)
            .style(Styles::default()),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(page, area);
}

fn feature(key: &str, name: &str, blurb: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key} "), Styles::help_key()),
        Span::styled(format!("{name} "), Styles::accent()),
        Span::styled(blurb.to_string(), Styles::dim()),
    ])
    .alignment(Alignment::Center)
}
