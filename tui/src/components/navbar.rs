use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{AppState, View};

/// Component for rendering the navigation bar
pub struct NavbarComponent;

impl NavbarComponent {
    pub fn render(state: &AppState, f: &mut Frame, area: Rect) {
        let tab = |label: &str, key: &str, view: View| -> Vec<Span<'static>> {
            let style = if state.view == view {
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            vec![
                Span::styled(format!("[{}] ", key), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{}  ", label), style),
            ]
        };

        let mut spans = vec![Span::styled(
            " FoodBot CRM  ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )];
        spans.extend(tab("Home", "1", View::Home));
        spans.extend(tab("Leads", "2", View::Leads));
        spans.extend(tab("AI Agent", "3", View::Agent));

        if let Some(user) = state.session.user() {
            spans.push(Span::styled(
                format!("  Welcome, {}", user.name),
                Style::default().fg(Color::Gray),
            ));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
