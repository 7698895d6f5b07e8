// UI components for the TUI

pub mod agent;
pub mod confirm;
pub mod form;
pub mod home;
pub mod leads;
pub mod navbar;
pub mod status;

pub use agent::AgentComponent;
pub use confirm::ConfirmComponent;
pub use form::FormComponent;
pub use home::HomeComponent;
pub use leads::LeadsComponent;
pub use navbar::NavbarComponent;
pub use status::StatusComponent;
