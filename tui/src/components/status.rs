use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::state::{AppState, View};

/// Component for rendering the status line
pub struct StatusComponent;

impl StatusComponent {
    pub fn render(state: &AppState, f: &mut Frame, area: Rect) {
        let busy = state.pending || state.agent_loading;

        let status_text = if let Some(flash) = &state.flash {
            flash.clone()
        } else if busy {
            "● Working... | requests in flight".to_string()
        } else {
            let hints = match state.view {
                View::Home => "1/2/3 switch view | Ctrl+O logout | q quit",
                View::Leads => {
                    "↑↓ select | / search | s status | n new | e edit | d delete | r refresh | q quit"
                }
                View::Agent => "type conversation | Ctrl+S parse | Ctrl+E sample | Esc clear",
            };
            format!("Ready - FoodBot CRM | {}", hints)
        };

        let status = Paragraph::new(status_text).style(if state.flash.is_some() {
            Style::default().fg(Color::Cyan)
        } else if busy {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Green)
        });

        f.render_widget(status, area);
    }
}
