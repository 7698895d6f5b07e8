use crate::api::{ApiInfo, CrmApi};
use crate::events::{AppEvent, EventSender};
use crate::lead::{Lead, LeadDraft};
use std::sync::Arc;
use tracing::warn;

/// Client-side cache of the lead list plus the request choreography around it.
///
/// The cache is only ever replaced wholesale after a round trip. Mutations
/// re-fetch the full list on success instead of patching locally, so the
/// server stays the source of truth.
pub struct LeadStore {
    leads: Vec<Lead>,
    api: Arc<dyn CrmApi>,
    event_sender: EventSender,
}

impl LeadStore {
    pub fn new(api: Arc<dyn CrmApi>, event_sender: EventSender) -> Self {
        Self {
            leads: Vec::new(),
            api,
            event_sender,
        }
    }

    /// The cached copy, as of the last successful fetch
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn replace(&mut self, leads: Vec<Lead>) {
        self.leads = leads;
    }

    pub fn api_info(&self) -> ApiInfo {
        self.api.info()
    }

    /// Fetch the full lead list in the background. A failed fetch is logged
    /// and otherwise dropped; the stale cache stays on screen.
    pub fn refresh(&self) {
        let api = self.api.clone();
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            match api.list_leads().await {
                Ok(leads) => {
                    let _ = sender.send_leads_loaded(leads);
                }
                Err(error) => {
                    warn!("failed to fetch leads: {}", error);
                }
            }
        });
    }

    /// Create a lead, then re-fetch the list so the cache reflects the server
    pub fn submit_create(&self, draft: LeadDraft) {
        let api = self.api.clone();
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            match api.create_lead(draft).await {
                Ok(lead) => {
                    let _ = sender.send(AppEvent::LeadSaved(lead));
                    Self::refetch(&api, &sender).await;
                }
                Err(error) => {
                    let _ = sender.send_error(error.to_string());
                }
            }
        });
    }

    /// Update a lead, then re-fetch the list
    pub fn submit_update(&self, id: String, draft: LeadDraft) {
        let api = self.api.clone();
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            match api.update_lead(&id, draft).await {
                Ok(lead) => {
                    let _ = sender.send(AppEvent::LeadSaved(lead));
                    Self::refetch(&api, &sender).await;
                }
                Err(error) => {
                    let _ = sender.send_error(error.to_string());
                }
            }
        });
    }

    /// Delete a lead, then re-fetch the list. The confirm prompt is the UI's
    /// responsibility; by the time this runs the decision is made.
    pub fn delete(&self, id: String) {
        let api = self.api.clone();
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            match api.delete_lead(&id).await {
                Ok(()) => {
                    let _ = sender.send(AppEvent::LeadDeleted { id });
                    Self::refetch(&api, &sender).await;
                }
                Err(error) => {
                    let _ = sender.send_error(error.to_string());
                }
            }
        });
    }

    /// Submit a raw conversation to the AI endpoint. The backend does all the
    /// extraction; we only relay the structured lead it returns.
    pub fn parse_conversation(&self, conversation: String) {
        let api = self.api.clone();
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            match api.parse_conversation(&conversation).await {
                Ok(lead) => {
                    let _ = sender.send(AppEvent::ParseCompleted(lead));
                    // The new lead is already stored server-side.
                    Self::refetch(&api, &sender).await;
                }
                Err(error) => {
                    let _ = sender.send(AppEvent::ParseFailed(error.to_string()));
                }
            }
        });
    }

    /// Tear down the session. The local session dies either way; a failed
    /// logout call only gets a log line.
    pub fn logout(&self) {
        let api = self.api.clone();
        let sender = self.event_sender.clone();
        tokio::spawn(async move {
            if let Err(error) = api.logout().await {
                warn!("logout request failed: {}", error);
            }
            let _ = sender.send(AppEvent::LoggedOut);
        });
    }

    async fn refetch(api: &Arc<dyn CrmApi>, sender: &EventSender) {
        match api.list_leads().await {
            Ok(leads) => {
                let _ = sender.send_leads_loaded(leads);
            }
            Err(error) => {
                warn!("failed to re-fetch leads: {}", error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApi;
    use crate::events::EventBus;
    use crate::lead::{Contact, LeadStatus};
    use tokio::sync::mpsc::UnboundedReceiver;

    fn setup() -> (LeadStore, UnboundedReceiver<AppEvent>) {
        let bus = EventBus::new();
        let sender = bus.sender();
        let store = LeadStore::new(Arc::new(MockApi::with_sample_leads()), sender);
        (store, bus.into_receiver())
    }

    fn draft(name: &str) -> LeadDraft {
        LeadDraft {
            name: name.to_string(),
            source: "Manual".to_string(),
            status: LeadStatus::New,
            contact: Contact::default(),
            interested_products: vec!["POS".to_string(), "CRM".to_string()],
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_refresh_loads_leads() {
        let (mut store, mut receiver) = setup();
        store.refresh();

        match receiver.recv().await.unwrap() {
            AppEvent::LeadsLoaded(leads) => {
                assert_eq!(leads.len(), 2);
                store.replace(leads);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(store.leads().len(), 2);
    }

    #[tokio::test]
    async fn test_create_saves_then_refetches() {
        let (store, mut receiver) = setup();
        store.submit_create(draft("Cafe Uno"));

        match receiver.recv().await.unwrap() {
            AppEvent::LeadSaved(lead) => {
                assert_eq!(lead.name, "Cafe Uno");
                assert_eq!(lead.interested_products, vec!["POS", "CRM"]);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        match receiver.recv().await.unwrap() {
            AppEvent::LeadsLoaded(leads) => assert_eq!(leads.len(), 3),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_create_surfaces_flat_error() {
        let (store, mut receiver) = setup();
        store.submit_create(draft("   "));

        match receiver.recv().await.unwrap() {
            AppEvent::Error { message } => assert!(message.contains("name")),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_then_refetch() {
        let (store, mut receiver) = setup();
        store.refresh();
        let leads = match receiver.recv().await.unwrap() {
            AppEvent::LeadsLoaded(leads) => leads,
            other => panic!("unexpected event: {:?}", other),
        };

        store.delete(leads[0].id.clone());
        match receiver.recv().await.unwrap() {
            AppEvent::LeadDeleted { id } => assert_eq!(id, leads[0].id),
            other => panic!("unexpected event: {:?}", other),
        }
        match receiver.recv().await.unwrap() {
            AppEvent::LeadsLoaded(leads) => assert_eq!(leads.len(), 1),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_parse_completion_carries_lead() {
        let (store, mut receiver) = setup();
        store.parse_conversation("Sales: Hi!".to_string());

        match receiver.recv().await.unwrap() {
            AppEvent::ParseCompleted(lead) => assert_eq!(lead.source, "AI Agent"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_parse_failure_is_flat_message() {
        let (store, mut receiver) = setup();
        store.parse_conversation(String::new());

        match receiver.recv().await.unwrap() {
            AppEvent::ParseFailed(message) => assert!(!message.is_empty()),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_logout_emits_logged_out() {
        let (store, mut receiver) = setup();
        store.logout();
        assert!(matches!(
            receiver.recv().await.unwrap(),
            AppEvent::LoggedOut
        ));
    }
}
