//! TUI library for FoodBot CRM, providing the terminal user interface with app structure, components, and event handling.

pub mod app;
pub mod components;
pub mod handlers;
pub mod state;
pub mod utils;

// Re-export main types for convenience
pub use app::App;
