use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::state::{AppState, FormField, LeadForm, LeadsFocus, View, SAMPLE_CONVERSATION};

/// Handles terminal input for the application
pub struct InputHandler;

impl InputHandler {
    /// Handle input events (keyboard and mouse)
    pub fn handle_event(state: &mut AppState, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Self::handle_key_event(state, key.code, key.modifiers);
            }
            Event::Mouse(mouse_event) => {
                Self::handle_mouse_event(state, mouse_event);
            }
            _ => {}
        }
    }

    fn handle_key_event(state: &mut AppState, key_code: KeyCode, modifiers: KeyModifiers) {
        // Any keystroke retires the previous flash message
        state.flash = None;

        // Chrome-level shortcuts, valid everywhere
        match key_code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                state.should_quit = true;
                return;
            }
            KeyCode::Char('o') if modifiers.contains(KeyModifiers::CONTROL) => {
                state.store.logout();
                return;
            }
            _ => {}
        }

        // Modal overlays swallow everything else first
        if state.confirm_delete.is_some() {
            Self::handle_confirm_key(state, key_code);
            return;
        }
        if state.form.is_some() {
            Self::handle_form_key(state, key_code);
            return;
        }

        // View switching, unless a text field is capturing keystrokes.
        // After a successful parse the editor sits empty behind the result
        // panel, so digits navigate again ("Press 2 to view all leads").
        let agent_editing = state.view == View::Agent
            && !(state.agent_result.is_some() && state.conversation.is_empty());
        let text_entry = agent_editing
            || (state.view == View::Leads && state.leads_focus == LeadsFocus::Search);
        if !text_entry {
            match key_code {
                KeyCode::Char('1') => {
                    state.view = View::Home;
                    return;
                }
                KeyCode::Char('2') => {
                    state.view = View::Leads;
                    return;
                }
                KeyCode::Char('3') => {
                    state.view = View::Agent;
                    return;
                }
                KeyCode::Char('q') => {
                    state.should_quit = true;
                    return;
                }
                _ => {}
            }
        }
        if key_code == KeyCode::Tab {
            state.view = match state.view {
                View::Home => View::Leads,
                View::Leads => View::Agent,
                View::Agent => View::Home,
            };
            state.leads_focus = LeadsFocus::Table;
            return;
        }

        match state.view {
            View::Home => {}
            View::Leads => Self::handle_leads_key(state, key_code),
            View::Agent => Self::handle_agent_key(state, key_code, modifiers),
        }
    }

    fn handle_mouse_event(state: &mut AppState, mouse_event: MouseEvent) {
        if state.view != View::Leads || state.form.is_some() || state.confirm_delete.is_some() {
            return;
        }
        match mouse_event.kind {
            MouseEventKind::ScrollUp => state.select_prev(),
            MouseEventKind::ScrollDown => state.select_next(),
            _ => {}
        }
    }

    fn handle_confirm_key(state: &mut AppState, key_code: KeyCode) {
        match key_code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Some((id, _)) = state.confirm_delete.take() {
                    state.pending = true;
                    state.store.delete(id);
                }
            }
            // Enter takes the (y/N) default: keep the lead
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Enter => {
                state.confirm_delete = None;
            }
            _ => {}
        }
    }

    fn handle_form_key(state: &mut AppState, key_code: KeyCode) {
        match key_code {
            KeyCode::Esc => {
                state.form = None;
                return;
            }
            KeyCode::Enter => {
                Self::submit_form(state);
                return;
            }
            _ => {}
        }
        let Some(form) = state.form.as_mut() else {
            return;
        };
        match key_code {
            KeyCode::Tab | KeyCode::Down => {
                form.focused = form.focused.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.focused = form.focused.prev();
            }
            KeyCode::Left if form.focused == FormField::Status => {
                form.status = form.status.prev();
            }
            KeyCode::Right | KeyCode::Char(' ') if form.focused == FormField::Status => {
                form.status = form.status.next();
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = form.focused_buffer() {
                    buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(buffer) = form.focused_buffer() {
                    buffer.pop();
                }
            }
            _ => {}
        }
    }

    fn submit_form(state: &mut AppState) {
        let Some(form) = &state.form else {
            return;
        };
        if form.name.trim().is_empty() {
            state.flash = Some("Restaurant name is required".to_string());
            return;
        }
        let draft = form.to_draft();
        state.pending = true;
        match form.editing.clone() {
            Some(id) => state.store.submit_update(id, draft),
            None => state.store.submit_create(draft),
        }
        // Form stays open until LeadSaved (or Error) comes back
    }

    fn handle_leads_key(state: &mut AppState, key_code: KeyCode) {
        if state.leads_focus == LeadsFocus::Search {
            match key_code {
                KeyCode::Enter | KeyCode::Esc => {
                    state.leads_focus = LeadsFocus::Table;
                }
                KeyCode::Char(c) => {
                    state.filter.query.push(c);
                    state.apply_filter();
                }
                KeyCode::Backspace => {
                    state.filter.query.pop();
                    state.apply_filter();
                }
                _ => {}
            }
            return;
        }

        match key_code {
            KeyCode::Char('/') => {
                state.leads_focus = LeadsFocus::Search;
            }
            KeyCode::Char('s') => {
                state.filter.status = state.filter.status.next();
                state.apply_filter();
            }
            KeyCode::Up => state.select_prev(),
            KeyCode::Down => state.select_next(),
            KeyCode::Char('n') => {
                state.form = Some(LeadForm::create());
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(lead) = state.selected_lead() {
                    state.form = Some(LeadForm::edit(lead));
                }
            }
            KeyCode::Char('d') => {
                if let Some(lead) = state.selected_lead() {
                    state.confirm_delete = Some((lead.id.clone(), lead.name.clone()));
                }
            }
            KeyCode::Char('r') => {
                state.store.refresh();
            }
            KeyCode::Esc => {
                state.filter.query.clear();
                state.apply_filter();
            }
            _ => {}
        }
    }

    fn handle_agent_key(state: &mut AppState, key_code: KeyCode, modifiers: KeyModifiers) {
        if state.agent_loading {
            return;
        }
        match key_code {
            KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
                Self::submit_conversation(state);
            }
            KeyCode::Char('e') if modifiers.contains(KeyModifiers::CONTROL) => {
                state.conversation = SAMPLE_CONVERSATION.to_string();
                state.conversation_cursor = state.conversation.len();
            }
            KeyCode::Esc => {
                state.conversation.clear();
                state.conversation_cursor = 0;
                state.agent_result = None;
                state.agent_error = None;
            }
            KeyCode::Enter => Self::insert_char(state, '\n'),
            KeyCode::Char(c) => Self::insert_char(state, c),
            KeyCode::Backspace => Self::delete_char(state),
            KeyCode::Left => Self::move_cursor_left(state),
            KeyCode::Right => Self::move_cursor_right(state),
            KeyCode::Home => state.conversation_cursor = 0,
            KeyCode::End => state.conversation_cursor = state.conversation.len(),
            _ => {}
        }
    }

    fn submit_conversation(state: &mut AppState) {
        if state.conversation.trim().is_empty() {
            return;
        }
        state.agent_loading = true;
        state.agent_result = None;
        state.agent_error = None;
        state.store.parse_conversation(state.conversation.clone());
        // `agent_loading` is reset when ParseCompleted or ParseFailed arrives
    }

    /// Insert a character at the cursor position
    fn insert_char(state: &mut AppState, ch: char) {
        if state.conversation_cursor <= state.conversation.len() {
            state.conversation.insert(state.conversation_cursor, ch);
            state.conversation_cursor += ch.len_utf8();
        }
    }

    /// Delete character before cursor
    fn delete_char(state: &mut AppState) {
        if state.conversation_cursor > 0 {
            let mut boundary = state.conversation_cursor - 1;
            while boundary > 0 && !state.conversation.is_char_boundary(boundary) {
                boundary -= 1;
            }
            state.conversation.remove(boundary);
            state.conversation_cursor = boundary;
        }
    }

    /// Move cursor left to the previous character boundary
    fn move_cursor_left(state: &mut AppState) {
        if state.conversation_cursor > 0 {
            let mut new_cursor = state.conversation_cursor - 1;
            while new_cursor > 0 && !state.conversation.is_char_boundary(new_cursor) {
                new_cursor -= 1;
            }
            state.conversation_cursor = new_cursor;
        }
    }

    /// Move cursor right to the next character boundary
    fn move_cursor_right(state: &mut AppState) {
        if state.conversation_cursor < state.conversation.len() {
            let mut new_cursor = state.conversation_cursor + 1;
            while new_cursor < state.conversation.len()
                && !state.conversation.is_char_boundary(new_cursor)
            {
                new_cursor += 1;
            }
            state.conversation_cursor = new_cursor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodbot_core::{ApiFactory, CrmApi, EventBus, LeadStore, Session};

    fn make_state() -> AppState {
        let bus = EventBus::new();
        let sender = bus.sender();
        let store = LeadStore::new(ApiFactory::create_mock(), sender);
        AppState::new(store, Session::default(), bus.into_receiver())
    }

    #[tokio::test]
    async fn test_digit_keys_switch_views() {
        let mut state = make_state();
        InputHandler::handle_key_event(&mut state, KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(state.view, View::Leads);
        InputHandler::handle_key_event(&mut state, KeyCode::Char('3'), KeyModifiers::NONE);
        assert_eq!(state.view, View::Agent);
    }

    #[tokio::test]
    async fn test_search_captures_digits() {
        let mut state = make_state();
        state.view = View::Leads;
        InputHandler::handle_key_event(&mut state, KeyCode::Char('/'), KeyModifiers::NONE);
        assert_eq!(state.leads_focus, LeadsFocus::Search);
        InputHandler::handle_key_event(&mut state, KeyCode::Char('3'), KeyModifiers::NONE);
        assert_eq!(state.view, View::Leads);
        assert_eq!(state.filter.query, "3");
    }

    #[tokio::test]
    async fn test_form_opens_and_cancels() {
        let mut state = make_state();
        state.view = View::Leads;
        InputHandler::handle_key_event(&mut state, KeyCode::Char('n'), KeyModifiers::NONE);
        assert!(state.form.is_some());
        InputHandler::handle_key_event(&mut state, KeyCode::Esc, KeyModifiers::NONE);
        assert!(state.form.is_none());
    }

    #[tokio::test]
    async fn test_form_requires_name() {
        let mut state = make_state();
        state.view = View::Leads;
        state.form = Some(LeadForm::create());
        InputHandler::handle_key_event(&mut state, KeyCode::Enter, KeyModifiers::NONE);
        assert!(state.form.is_some());
        assert!(state.flash.as_deref().unwrap_or("").contains("required"));
        assert!(!state.pending);
    }

    #[tokio::test]
    async fn test_confirm_enter_keeps_the_lead() {
        let mut state = make_state();
        state.view = View::Leads;
        state.confirm_delete = Some(("l1".to_string(), "La Taqueria".to_string()));
        InputHandler::handle_key_event(&mut state, KeyCode::Enter, KeyModifiers::NONE);
        assert!(state.confirm_delete.is_none());
        assert!(!state.pending);
    }

    #[tokio::test]
    async fn test_confirm_y_deletes() {
        let mut state = make_state();
        state.view = View::Leads;
        state.confirm_delete = Some(("l1".to_string(), "La Taqueria".to_string()));
        InputHandler::handle_key_event(&mut state, KeyCode::Char('y'), KeyModifiers::NONE);
        assert!(state.confirm_delete.is_none());
        assert!(state.pending);
    }

    #[tokio::test]
    async fn test_agent_enter_inserts_newline() {
        let mut state = make_state();
        state.view = View::Agent;
        for c in "hi".chars() {
            InputHandler::handle_key_event(&mut state, KeyCode::Char(c), KeyModifiers::NONE);
        }
        InputHandler::handle_key_event(&mut state, KeyCode::Enter, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut state, KeyCode::Char('!'), KeyModifiers::NONE);
        assert_eq!(state.conversation, "hi\n!");
        assert!(!state.agent_loading);
    }

    #[tokio::test]
    async fn test_agent_digits_type_into_editor_while_composing() {
        let mut state = make_state();
        state.view = View::Agent;
        InputHandler::handle_key_event(&mut state, KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(state.view, View::Agent);
        assert_eq!(state.conversation, "2");
    }

    #[tokio::test]
    async fn test_agent_digits_navigate_when_result_is_showing() {
        let mut state = make_state();
        state.view = View::Agent;
        let lead = ApiFactory::create_mock()
            .parse_conversation("Sales: Hi!")
            .await
            .unwrap();
        state.agent_result = Some(lead);
        // Editor was cleared when the result arrived
        InputHandler::handle_key_event(&mut state, KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(state.view, View::Leads);
    }

    #[tokio::test]
    async fn test_ctrl_s_submits_conversation() {
        let mut state = make_state();
        state.view = View::Agent;
        InputHandler::handle_key_event(&mut state, KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(state.conversation, SAMPLE_CONVERSATION);
        InputHandler::handle_key_event(&mut state, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(state.agent_loading);
    }

    #[tokio::test]
    async fn test_empty_conversation_is_not_submitted() {
        let mut state = make_state();
        state.view = View::Agent;
        InputHandler::handle_key_event(&mut state, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(!state.agent_loading);
    }
}
