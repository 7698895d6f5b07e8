//! Reqwest-backed client for the CRM REST API.
//!
//! Every endpoint answers with the same envelope:
//! `{ success: bool, leads?: [Lead], lead?: Lead, message?: string }`.
//! A non-2xx status or `success: false` surfaces the backend's message as a
//! flat `ApiError::Api`. No retries.

use crate::api::{ApiError, ApiInfo, CrmApi};
use crate::lead::{Lead, LeadDraft};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpApi {
    pub fn new(base_url: String, token: String) -> Result<Self, ApiError> {
        if base_url.is_empty() {
            return Err(ApiError::Configuration("API base URL is empty".to_string()));
        }
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, req: reqwest::RequestBuilder) -> Result<Envelope, ApiError> {
        let resp = req
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status();
        let envelope: Envelope = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("HTTP {}: {}", status, e)))?;

        if !status.is_success() || !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| format!("request failed with HTTP {}", status));
            return Err(ApiError::Api(message));
        }
        Ok(envelope)
    }
}

#[async_trait]
impl CrmApi for HttpApi {
    async fn list_leads(&self) -> Result<Vec<Lead>, ApiError> {
        let envelope = self.execute(self.client.get(self.url("/api/leads"))).await?;
        envelope
            .leads
            .ok_or_else(|| ApiError::Decode("response is missing 'leads'".to_string()))
    }

    async fn create_lead(&self, draft: LeadDraft) -> Result<Lead, ApiError> {
        let envelope = self
            .execute(self.client.post(self.url("/api/leads")).json(&draft))
            .await?;
        envelope
            .lead
            .ok_or_else(|| ApiError::Decode("response is missing 'lead'".to_string()))
    }

    async fn update_lead(&self, id: &str, draft: LeadDraft) -> Result<Lead, ApiError> {
        let envelope = self
            .execute(
                self.client
                    .put(self.url(&format!("/api/leads/{}", id)))
                    .json(&draft),
            )
            .await?;
        envelope
            .lead
            .ok_or_else(|| ApiError::Decode("response is missing 'lead'".to_string()))
    }

    async fn delete_lead(&self, id: &str) -> Result<(), ApiError> {
        self.execute(self.client.delete(self.url(&format!("/api/leads/{}", id))))
            .await?;
        Ok(())
    }

    async fn parse_conversation(&self, conversation: &str) -> Result<Lead, ApiError> {
        let body = json!({ "conversation": conversation });
        let envelope = self
            .execute(
                self.client
                    .post(self.url("/api/ai-agent/parse-and-create"))
                    .json(&body),
            )
            .await?;
        envelope
            .lead
            .ok_or_else(|| ApiError::Decode("response is missing 'lead'".to_string()))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.execute(self.client.post(self.url("/api/logout")).json(&json!({})))
            .await?;
        Ok(())
    }

    fn info(&self) -> ApiInfo {
        ApiInfo {
            name: "FoodBot CRM".to_string(),
            base_url: self.base_url.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    leads: Option<Vec<Lead>>,
    #[serde(default)]
    lead: Option<Lead>,
    #[serde(default)]
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let api = HttpApi::new("https://crm.example.com/".to_string(), "t".to_string()).unwrap();
        assert_eq!(api.url("/api/leads"), "https://crm.example.com/api/leads");
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        assert!(matches!(
            HttpApi::new(String::new(), "t".to_string()),
            Err(ApiError::Configuration(_))
        ));
    }

    #[test]
    fn test_envelope_decodes_without_payload() {
        let envelope: Envelope =
            serde_json::from_str(r#"{ "success": false, "message": "nope" }"#).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("nope"));
        assert!(envelope.leads.is_none());
        assert!(envelope.lead.is_none());
    }
}
