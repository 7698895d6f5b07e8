use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::AppState;
use crate::utils::layout;
use foodbot_core::Lead;

/// Component for rendering the AI conversation parser screen
pub struct AgentComponent;

impl AgentComponent {
    pub fn render(state: &AppState, f: &mut Frame, area: Rect) {
        let chunks = layout::create_agent_layout(area);
        Self::render_editor(state, f, chunks[0]);
        Self::render_results(state, f, chunks[1]);
    }

    fn render_editor(state: &AppState, f: &mut Frame, area: Rect) {
        if state.agent_loading {
            let editor = Paragraph::new("Processing...")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title(" Conversation "));
            f.render_widget(editor, area);
            return;
        }

        let text = if state.conversation.is_empty() {
            Text::from(Span::styled(
                "Paste your sales conversation here...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Text::from(state.conversation.as_str())
        };

        let editor = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                    .title(" Conversation (Ctrl+S parse, Ctrl+E sample, Esc clear) "),
            )
            .wrap(ratatui::widgets::Wrap { trim: false });
        f.render_widget(editor, area);

        // Cursor position from explicit newlines before the cursor
        if state.cursor_visible {
            let before = &state.conversation[..state.conversation_cursor];
            let cursor_line = before.matches('\n').count() as u16;
            let cursor_col = before
                .rsplit('\n')
                .next()
                .map_or(0, |line| line.chars().count()) as u16;
            let cursor_x = area.x + 1 + cursor_col;
            let cursor_y = area.y + 1 + cursor_line;
            if cursor_x < area.x + area.width - 1 && cursor_y < area.y + area.height - 1 {
                f.set_cursor(cursor_x, cursor_y);
            }
        }
    }

    fn render_results(state: &AppState, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();

        if state.agent_loading {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "AI is analyzing the conversation...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(error) = &state.agent_error {
            lines.push(Line::from(Span::styled(
                "Error",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else if let Some(lead) = &state.agent_result {
            lines.push(Line::from(Span::styled(
                "✓ Lead created successfully",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "The conversation was analyzed and a new lead was added.",
                Style::default().fg(Color::Green),
            )));
            lines.push(Line::from(""));
            Self::render_lead(&mut lines, lead);
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Press 2 to view all leads.",
                Style::default().fg(Color::Gray),
            )));
        } else {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Submit a conversation to see AI-extracted lead data.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let results = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" AI Processing Results "),
            )
            .wrap(ratatui::widgets::Wrap { trim: false });
        f.render_widget(results, area);
    }

    fn render_lead(lines: &mut Vec<Line<'static>>, lead: &Lead) {
        let field = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<14}", label), Style::default().fg(Color::Gray)),
                Span::raw(value),
            ])
        };
        lines.push(field("Restaurant:", lead.name.clone()));
        lines.push(field("Source:", lead.source.clone()));
        if let Some(email) = lead.email() {
            lines.push(field("Email:", email.to_string()));
        }
        if let Some(phone) = lead.phone() {
            lines.push(field("Phone:", phone.to_string()));
        }
        if !lead.interested_products.is_empty() {
            lines.push(field("Products:", lead.interested_products.join(", ")));
        }
        if let Some(notes) = &lead.notes {
            lines.push(field("Notes:", notes.clone()));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", "Status:"), Style::default().fg(Color::Gray)),
            Span::styled(
                lead.status.as_str(),
                Style::default().fg(Color::Green),
            ),
        ]));
    }
}
