/// Utility functions for the TUI application

/// Terminal management utilities
pub mod terminal {
    use anyhow::Result;
    use crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use std::io;

    /// Setup terminal for TUI mode
    pub fn setup() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore terminal to normal mode
    pub fn restore<B: ratatui::backend::Backend + std::io::Write>(
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Layout calculation utilities
pub mod layout {
    use ratatui::layout::{Constraint, Direction, Layout, Rect};

    /// Navbar / body / status line
    pub fn create_main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(1), // Navbar
                    Constraint::Min(1),    // Active view
                    Constraint::Length(1), // Status line
                ]
                .as_ref(),
            )
            .split(area)
            .to_vec()
    }

    /// Filter bar on top of the lead table
    pub fn create_leads_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(3), // Search + status selector
                    Constraint::Min(1),    // Table
                ]
                .as_ref(),
            )
            .split(area)
            .to_vec()
    }

    /// Conversation editor and results panel side by side
    pub fn create_agent_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                [
                    Constraint::Percentage(50), // Conversation input
                    Constraint::Percentage(50), // Parsed result
                ]
                .as_ref(),
            )
            .split(area)
            .to_vec()
    }

    /// Centered popup area for modal overlays
    pub fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
        // Widen before multiplying; u16 math overflows on wide terminals
        let width = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_centered_rect_is_centered() {
            let area = Rect::new(0, 0, 100, 40);
            let popup = centered_rect(area, 60, 20);
            assert_eq!(popup.width, 60);
            assert_eq!(popup.height, 20);
            assert_eq!(popup.x, 20);
            assert_eq!(popup.y, 10);
        }

        #[test]
        fn test_centered_rect_survives_wide_terminals() {
            let area = Rect::new(0, 0, u16::MAX, 5);
            let popup = centered_rect(area, 60, 20);
            assert!(popup.width <= area.width);
            assert_eq!(popup.height, 5);
        }
    }
}
