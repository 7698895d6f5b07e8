use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::{AppState, FormField};
use crate::utils::layout;

/// Component for rendering the create/edit form overlay
pub struct FormComponent;

impl FormComponent {
    pub fn render(state: &AppState, f: &mut Frame) {
        let Some(form) = &state.form else {
            return;
        };

        let popup_area = layout::centered_rect(f.size(), 60, 20);
        f.render_widget(Clear, popup_area);

        let mut lines = Vec::new();
        for field in FormField::ALL {
            let is_focused = field == form.focused;
            let marker_style = if is_focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let value_style = if is_focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };

            let mut value = form.field_text(field);
            if is_focused && field != FormField::Status && state.cursor_visible {
                value.push('▏');
            }

            lines.push(Line::from(vec![
                Span::styled(if is_focused { "► " } else { "  " }, marker_style),
                Span::styled(
                    format!("{:<20}", form.field_label_with_hint(field)),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(value, value_style),
            ]));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Tab/↑↓ field • ←→ status • Enter save • Esc cancel",
            Style::default().fg(Color::DarkGray),
        )));

        let title = if form.editing.is_some() {
            " Edit Lead "
        } else {
            " New Lead "
        };
        let popup = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                    .title(title)
                    .title_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .wrap(ratatui::widgets::Wrap { trim: false });

        f.render_widget(popup, popup_area);
    }
}

impl crate::state::LeadForm {
    fn field_label_with_hint(&self, field: FormField) -> String {
        match field {
            FormField::Products => format!("{} (a, b)", field.label()),
            _ => field.label().to_string(),
        }
    }
}
