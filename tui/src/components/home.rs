use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::AppState;

/// Component for rendering the landing screen
pub struct HomeComponent;

const FEATURES: [(&str, &str); 4] = [
    (
        "AI-Powered Lead Generation",
        "Automatically extract leads from conversations using advanced AI technology",
    ),
    (
        "Smart CRM Management",
        "Manage your restaurant leads with an intuitive and powerful interface",
    ),
    (
        "Lightning Fast Processing",
        "Process conversations and generate leads in seconds, not hours",
    ),
    (
        "Secure & Reliable",
        "Enterprise-grade security with reliable data protection",
    ),
];

impl HomeComponent {
    pub fn render(state: &AppState, f: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  FoodBot CRM",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "  Turn sales conversations into a restaurant lead pipeline.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];

        for (title, description) in FEATURES {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(Color::Blue)),
                Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", description),
                Style::default().fg(Color::Gray),
            )));
        }

        lines.push(Line::from(""));
        let info = state.store.api_info();
        lines.push(Line::from(Span::styled(
            format!("  Backend: {} ({})", info.name, info.base_url),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Press 2 for Leads, 3 for the AI Agent.",
            Style::default().fg(Color::Yellow),
        )));

        let home = Paragraph::new(Text::from(lines))
            .block(Block::default().borders(Borders::ALL).title(" Home "))
            .wrap(ratatui::widgets::Wrap { trim: false });
        f.render_widget(home, area);
    }
}
