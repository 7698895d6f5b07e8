//! In-memory stand-in for the CRM backend.
//!
//! Used when no FOODBOT_API_URL is configured and as the backend for tests.
//! Behaves like the real API from the client's point of view: ids are
//! assigned server-side and unknown ids are errors.

use crate::api::{ApiError, ApiInfo, CrmApi};
use crate::lead::{Contact, Lead, LeadDraft, LeadStatus};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

pub struct MockApi {
    leads: Mutex<Vec<Lead>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            leads: Mutex::new(Vec::new()),
        }
    }

    pub fn with_sample_leads() -> Self {
        let api = Self::new();
        {
            let mut leads = api.leads.lock().unwrap();
            leads.push(Lead {
                id: Uuid::new_v4().to_string(),
                name: "La Taqueria".to_string(),
                source: "AI Agent".to_string(),
                status: LeadStatus::New,
                contact: Contact {
                    email: Some("la@taqueria.com".to_string()),
                    phone: Some("555-123-4567".to_string()),
                },
                interested_products: vec!["POS".to_string(), "CRM".to_string()],
                notes: Some("Wants customer preference tracking".to_string()),
                created_at: Utc::now(),
            });
            leads.push(Lead {
                id: Uuid::new_v4().to_string(),
                name: "Burger Barn".to_string(),
                source: "Referral".to_string(),
                status: LeadStatus::Contacted,
                contact: Contact {
                    email: Some("owner@burgerbarn.io".to_string()),
                    phone: None,
                },
                interested_products: vec!["Analytics".to_string()],
                notes: None,
                created_at: Utc::now(),
            });
        }
        api
    }

    fn materialize(draft: LeadDraft) -> Lead {
        Lead {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            source: draft.source,
            status: draft.status,
            contact: draft.contact,
            interested_products: draft.interested_products,
            notes: draft.notes,
            created_at: Utc::now(),
        }
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrmApi for MockApi {
    async fn list_leads(&self) -> Result<Vec<Lead>, ApiError> {
        Ok(self.leads.lock().unwrap().clone())
    }

    async fn create_lead(&self, draft: LeadDraft) -> Result<Lead, ApiError> {
        if draft.name.trim().is_empty() {
            return Err(ApiError::Api("Lead name is required".to_string()));
        }
        let lead = Self::materialize(draft);
        self.leads.lock().unwrap().push(lead.clone());
        Ok(lead)
    }

    async fn update_lead(&self, id: &str, draft: LeadDraft) -> Result<Lead, ApiError> {
        let mut leads = self.leads.lock().unwrap();
        let existing = leads
            .iter_mut()
            .find(|lead| lead.id == id)
            .ok_or_else(|| ApiError::Api(format!("Lead not found: {}", id)))?;
        existing.name = draft.name;
        existing.source = draft.source;
        existing.status = draft.status;
        existing.contact = draft.contact;
        existing.interested_products = draft.interested_products;
        existing.notes = draft.notes;
        Ok(existing.clone())
    }

    async fn delete_lead(&self, id: &str) -> Result<(), ApiError> {
        let mut leads = self.leads.lock().unwrap();
        let before = leads.len();
        leads.retain(|lead| lead.id != id);
        if leads.len() == before {
            return Err(ApiError::Api(format!("Lead not found: {}", id)));
        }
        Ok(())
    }

    async fn parse_conversation(&self, conversation: &str) -> Result<Lead, ApiError> {
        if conversation.trim().is_empty() {
            return Err(ApiError::Api("Conversation is empty".to_string()));
        }
        // Canned extraction: the real parsing lives server-side.
        let lead = Lead {
            id: Uuid::new_v4().to_string(),
            name: "Extracted Lead".to_string(),
            source: "AI Agent".to_string(),
            status: LeadStatus::New,
            contact: Contact::default(),
            interested_products: vec!["POS".to_string()],
            notes: Some(conversation.lines().take(1).collect::<String>()),
            created_at: Utc::now(),
        };
        self.leads.lock().unwrap().push(lead.clone());
        Ok(lead)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Ok(())
    }

    fn info(&self) -> ApiInfo {
        ApiInfo {
            name: "Mock backend".to_string(),
            base_url: "in-memory".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    fn draft(name: &str) -> LeadDraft {
        LeadDraft {
            name: name.to_string(),
            source: "Manual".to_string(),
            status: LeadStatus::New,
            contact: Contact::default(),
            interested_products: Vec::new(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let api = MockApi::new();
        let lead = api.create_lead(draft("Cafe Uno")).await.unwrap();
        let leads = api.list_leads().await.unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].id, lead.id);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let api = MockApi::new();
        let lead = api.create_lead(draft("Cafe Uno")).await.unwrap();

        let mut changed = draft("Cafe Dos");
        changed.status = LeadStatus::Qualified;
        let updated = api.update_lead(&lead.id, changed).await.unwrap();

        assert_eq!(updated.id, lead.id);
        assert_eq!(updated.name, "Cafe Dos");
        assert_eq!(updated.status, LeadStatus::Qualified);
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails() {
        let api = MockApi::new();
        let err = api.update_lead("missing", draft("x")).await.unwrap_err();
        assert!(matches!(err, ApiError::Api(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_lead() {
        let api = MockApi::new();
        let lead = api.create_lead(draft("Cafe Uno")).await.unwrap();
        api.delete_lead(&lead.id).await.unwrap();
        assert!(api.list_leads().await.unwrap().is_empty());
        assert!(api.delete_lead(&lead.id).await.is_err());
    }

    #[tokio::test]
    async fn test_parse_conversation_stores_a_lead() {
        let api = MockApi::new();
        let lead = api
            .parse_conversation("Sales: Hi! Are you the owner?")
            .await
            .unwrap();
        assert_eq!(lead.source, "AI Agent");
        assert_eq!(api.list_leads().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_parse_rejects_empty_conversation() {
        let api = MockApi::new();
        assert!(api.parse_conversation("   ").await.is_err());
    }

    #[test]
    fn test_logout_is_accepted() {
        let api = MockApi::new();
        assert_ok!(tokio_test::block_on(api.logout()));
    }
}
