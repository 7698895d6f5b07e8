use crate::lead::{Lead, LeadDraft};
use async_trait::async_trait;
use thiserror::Error;

pub mod http;
pub mod mock;

pub use http::HttpApi;
pub use mock::MockApi;

/// The seam between the UI and the CRM backend. Every network interaction
/// the client performs goes through this trait.
#[async_trait]
pub trait CrmApi: Send + Sync {
    /// Fetch all leads
    async fn list_leads(&self) -> Result<Vec<Lead>, ApiError>;

    /// Create a lead from form fields
    async fn create_lead(&self, draft: LeadDraft) -> Result<Lead, ApiError>;

    /// Replace an existing lead's fields
    async fn update_lead(&self, id: &str, draft: LeadDraft) -> Result<Lead, ApiError>;

    /// Remove a lead
    async fn delete_lead(&self, id: &str) -> Result<(), ApiError>;

    /// Submit a raw sales conversation; the backend extracts and stores a
    /// structured lead and returns it
    async fn parse_conversation(&self, conversation: &str) -> Result<Lead, ApiError>;

    /// Tear down the server-side session
    async fn logout(&self) -> Result<(), ApiError>;

    /// Describe the backend this client talks to
    fn info(&self) -> ApiInfo;
}

/// Information about a backend
#[derive(Debug, Clone)]
pub struct ApiInfo {
    pub name: String,
    pub base_url: String,
}

/// Errors that can occur while talking to the backend. Flat by design:
/// every failure ends up as a string shown to the user or logged.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Api(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Factory for building the backend client from configuration
pub struct ApiFactory;

impl ApiFactory {
    /// Build an HTTP client from the environment.
    /// Required: FOODBOT_API_URL (e.g. "https://crm.example.com")
    /// Required: FOODBOT_API_TOKEN (bearer token sent on every call)
    pub fn create_http_from_env() -> Result<std::sync::Arc<dyn CrmApi>, ApiError> {
        let base_url = std::env::var("FOODBOT_API_URL")
            .map_err(|_| ApiError::Configuration("Missing FOODBOT_API_URL".to_string()))?;
        let token = std::env::var("FOODBOT_API_TOKEN")
            .map_err(|_| ApiError::Configuration("Missing FOODBOT_API_TOKEN".to_string()))?;
        let api = HttpApi::new(base_url, token)?;
        Ok(std::sync::Arc::new(api))
    }

    /// In-memory backend with a few seeded leads, for running without a server
    pub fn create_mock() -> std::sync::Arc<dyn CrmApi> {
        std::sync::Arc::new(MockApi::with_sample_leads())
    }
}
