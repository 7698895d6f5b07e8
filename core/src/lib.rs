pub mod api;
pub mod auth;
pub mod events;
pub mod filter;
pub mod lead;
pub mod store;

// Re-export main types for convenience
pub use api::{ApiError, ApiFactory, ApiInfo, CrmApi};
pub use auth::{Session, User};
pub use events::{AppEvent, EventBus, EventSender};
pub use filter::{LeadFilter, StatusFilter};
pub use lead::{parse_products, Contact, Lead, LeadDraft, LeadStatus};
pub use store::LeadStore;
