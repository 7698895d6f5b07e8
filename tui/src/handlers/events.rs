use foodbot_core::AppEvent;
use tracing::{debug, error};

use crate::state::{AppState, View};

/// Handles application events coming back from the store's background tasks
pub struct EventHandler;

impl EventHandler {
    /// Handle application events
    pub fn handle_event(state: &mut AppState, event: AppEvent) {
        debug!("Handling app event: {:?}", event);
        match event {
            AppEvent::LeadsLoaded(leads) => {
                // Replace the cache wholesale and recompute the derived list
                state.store.replace(leads);
                state.apply_filter();
                state.pending = false;
            }
            AppEvent::LeadSaved(lead) => {
                state.form = None;
                state.pending = false;
                state.flash = Some(format!("Saved lead \"{}\"", lead.name));
            }
            AppEvent::LeadDeleted { id } => {
                state.pending = false;
                state.flash = Some("Lead deleted".to_string());
                debug!("Deleted lead {}", id);
            }
            AppEvent::ParseCompleted(lead) => {
                state.agent_loading = false;
                state.agent_error = None;
                // Editor clears on success so the next conversation starts fresh
                state.conversation.clear();
                state.conversation_cursor = 0;
                state.agent_result = Some(lead);
            }
            AppEvent::ParseFailed(message) => {
                state.agent_loading = false;
                state.agent_result = None;
                state.agent_error = Some(message);
            }
            AppEvent::LoggedOut => {
                // The redirect analogue: drop the session and go home
                state.session.clear();
                state.view = View::Home;
                state.flash = Some("Logged out".to_string());
            }
            AppEvent::Error { message } => {
                error!("Request failed: {}", message);
                state.pending = false;
                state.flash = Some(message);
            }
            AppEvent::Quit => {
                state.should_quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodbot_core::{ApiFactory, CrmApi, EventBus, LeadStore, Session, User};

    fn make_state() -> AppState {
        let bus = EventBus::new();
        let sender = bus.sender();
        let store = LeadStore::new(ApiFactory::create_mock(), sender);
        let session = Session::new(Some(User {
            id: "u1".to_string(),
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
        }));
        AppState::new(store, session, bus.into_receiver())
    }

    #[tokio::test]
    async fn test_leads_loaded_replaces_cache_and_refilters() {
        let mut state = make_state();
        let sample = ApiFactory::create_mock().list_leads().await.unwrap();
        EventHandler::handle_event(&mut state, AppEvent::LeadsLoaded(sample.clone()));
        assert_eq!(state.store.leads().len(), sample.len());
        assert_eq!(state.filtered.len(), sample.len());
        assert!(!state.pending);
    }

    #[tokio::test]
    async fn test_logged_out_clears_session_and_redirects_home() {
        let mut state = make_state();
        state.view = View::Leads;
        assert!(state.session.is_authenticated());

        EventHandler::handle_event(&mut state, AppEvent::LoggedOut);

        assert!(!state.session.is_authenticated());
        assert_eq!(state.view, View::Home);
    }

    #[tokio::test]
    async fn test_parse_completed_clears_editor() {
        let mut state = make_state();
        state.agent_loading = true;
        state.conversation = "Sales: Hi!".to_string();
        state.conversation_cursor = state.conversation.len();

        let lead = ApiFactory::create_mock()
            .parse_conversation("Sales: Hi!")
            .await
            .unwrap();
        EventHandler::handle_event(&mut state, AppEvent::ParseCompleted(lead));

        assert!(!state.agent_loading);
        assert!(state.conversation.is_empty());
        assert_eq!(state.conversation_cursor, 0);
        assert!(state.agent_result.is_some());
    }

    #[tokio::test]
    async fn test_error_becomes_flash_message() {
        let mut state = make_state();
        state.pending = true;
        EventHandler::handle_event(
            &mut state,
            AppEvent::Error {
                message: "Lead not found: x".to_string(),
            },
        );
        assert!(!state.pending);
        assert_eq!(state.flash.as_deref(), Some("Lead not found: x"));
    }
}
