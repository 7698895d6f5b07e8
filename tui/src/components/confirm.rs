use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::state::AppState;
use crate::utils::layout;

/// Component for rendering the delete confirmation overlay.
/// Blocks all other leads-screen input until answered.
pub struct ConfirmComponent;

impl ConfirmComponent {
    pub fn render(state: &AppState, f: &mut Frame) {
        let Some((_, name)) = &state.confirm_delete else {
            return;
        };

        let popup_area = layout::centered_rect(f.size(), 50, 7);
        f.render_widget(Clear, popup_area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Delete lead \"{}\"?", name),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(" delete  •  "),
                Span::styled("n", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw("/Enter/Esc keep"),
            ]),
        ];

        let popup = Paragraph::new(Text::from(lines))
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .title(" Confirm Delete "),
            );

        f.render_widget(popup, popup_area);
    }
}
