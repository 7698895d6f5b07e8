use anyhow::Result;
use foodbot_core::{ApiFactory, EventBus, LeadStore, Session};
use tracing::info;

mod app;
mod components;
mod handlers;
mod state;
mod utils;

use app::App;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing - only log to stderr and filter out less important messages
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();
    info!("Starting FoodBot CRM TUI");

    // Optional: load .env (ignore errors if missing)
    let _ = dotenvy::dotenv();

    // Choose backend: HTTP if configured, else the in-memory mock
    let api = match std::env::var("FOODBOT_API_URL") {
        Ok(_) => ApiFactory::create_http_from_env().unwrap_or_else(|_| ApiFactory::create_mock()),
        Err(_) => ApiFactory::create_mock(),
    };

    // Create event bus for communication
    let event_bus = EventBus::new();
    let event_sender = event_bus.sender();

    // Create the lead store and an empty session (no hydration endpoint)
    let store = LeadStore::new(api, event_sender.clone());
    let session = Session::default();

    // Create and run the TUI application
    let mut app = App::new(store, session, event_bus.into_receiver());
    app.run().await?;

    info!("FoodBot CRM TUI shutting down");
    Ok(())
}
