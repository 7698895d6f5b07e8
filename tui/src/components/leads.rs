use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::state::{AppState, LeadsFocus};
use crate::utils::layout;

/// Component for rendering the lead list screen
pub struct LeadsComponent;

impl LeadsComponent {
    pub fn render(state: &mut AppState, f: &mut Frame, area: Rect) {
        let chunks = layout::create_leads_layout(area);
        Self::render_filter_bar(state, f, chunks[0]);
        Self::render_table(state, f, chunks[1]);
    }

    fn render_filter_bar(state: &AppState, f: &mut Frame, area: Rect) {
        let search_focused = state.leads_focus == LeadsFocus::Search;
        let mut spans = vec![
            Span::styled("Search: ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.filter.query.clone(),
                if search_focused {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                },
            ),
        ];
        if search_focused && state.cursor_visible {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        spans.push(Span::styled(
            "    Status: ",
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::styled(
            state.filter.status.label(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(
                "    {} of {} leads",
                state.filtered.len(),
                state.store.leads().len()
            ),
            Style::default().fg(Color::DarkGray),
        ));

        let title = if search_focused {
            " Filter [typing] (Enter/Esc to leave) "
        } else {
            " Filter (/ to search, s to cycle status) "
        };
        let border_style = if search_focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
        f.render_widget(bar, area);
    }

    fn render_table(state: &mut AppState, f: &mut Frame, area: Rect) {
        let header = Row::new(vec![
            "Name", "Status", "Source", "Email", "Phone", "Products", "Created",
        ])
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = state
            .filtered
            .iter()
            .map(|lead| {
                let status_color = match lead.status {
                    foodbot_core::LeadStatus::New => Color::Blue,
                    foodbot_core::LeadStatus::Contacted => Color::Yellow,
                    foodbot_core::LeadStatus::Qualified => Color::Green,
                    foodbot_core::LeadStatus::Closed => Color::DarkGray,
                };
                Row::new(vec![
                    Cell::from(lead.name.clone()),
                    Cell::from(lead.status.as_str())
                        .style(Style::default().fg(status_color)),
                    Cell::from(lead.source.clone()),
                    Cell::from(lead.email().unwrap_or("—").to_string()),
                    Cell::from(lead.phone().unwrap_or("—").to_string()),
                    Cell::from(lead.interested_products.join(", ")),
                    Cell::from(lead.created_at.format("%Y-%m-%d").to_string()),
                ])
            })
            .collect();

        let focused = state.leads_focus == LeadsFocus::Table;
        let border_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let title = if focused {
            " Leads [FOCUSED] (n new, e edit, d delete, r refresh) "
        } else {
            " Leads "
        };

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(20),
                Constraint::Length(10),
                Constraint::Percentage(12),
                Constraint::Percentage(22),
                Constraint::Length(14),
                Constraint::Percentage(20),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

        f.render_stateful_widget(table, area, &mut state.table_state);
    }
}
