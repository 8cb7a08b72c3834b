//! Contact form widget.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::state::{AppState, ContactField, InputMode};
use crate::tui::style::Styles;

const TEXT_FIELDS: [ContactField; 4] = [
    ContactField::Name,
    ContactField::Email,
    ContactField::Subject,
    ContactField::Message,
];

/// Renders the contact form.
pub fn render_contact(frame: &mut Frame, area: Rect, state: &AppState) {
    let editing = state.input_mode == InputMode::Form;
    let mut lines = vec![
        Line::default(),
        Line::styled("  Get in touch with the team", Styles::accent()),
        Line::default(),
    ];

    for field in TEXT_FIELDS {
        lines.push(field_line(state, field, editing));
    }

    lines.push(Line::default());
    let send_focused = editing && state.contact.focus == ContactField::Send;
    let send_style = if send_focused {
        Styles::selected()
    } else {
        Styles::form_label()
    };
    lines.push(Line::from(vec![
        Span::raw("           "),
        Span::styled("[ Send ]", send_style),
    ]));

    if state.contact.submitted {
        lines.push(Line::default());
        lines.push(Line::styled(
            "  Message sent. We'll get back to you.",
            Styles::success(),
        ));
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .title("Contact")
            .borders(Borders::ALL)
            .style(Styles::default()),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(form, area);
}

fn field_line(state: &AppState, field: ContactField, editing: bool) -> Line<'static> {
    let focused = editing && state.contact.focus == field;
    let value_style = if focused {
        Styles::form_focused()
    } else {
        Styles::default()
    };
    let mut value = state.contact.field_value(field).to_string();
    if focused {
        value.push('█');
    }
    Line::from(vec![
        Span::styled(format!("  {:<9}", format!("{}:", field.label())), Styles::form_label()),
        Span::styled(value, value_style),
    ])
}
