use anyhow::Result;
use foodbot_core::{ApiFactory, EventBus, LeadStore, Session};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing - only log to stderr and filter out less important messages
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();
    info!("Starting FoodBot CRM");

    // For now, just launch the TUI
    // In the future, this could parse command line arguments
    // and decide whether to run in TUI mode, headless mode, etc.

    let _ = dotenvy::dotenv();

    let api = match std::env::var("FOODBOT_API_URL") {
        Ok(_) => ApiFactory::create_http_from_env().unwrap_or_else(|_| ApiFactory::create_mock()),
        Err(_) => ApiFactory::create_mock(),
    };

    // Create event bus for communication
    let event_bus = EventBus::new();
    let event_sender = event_bus.sender();

    // Create the lead store and session
    let store = LeadStore::new(api, event_sender.clone());
    let session = Session::default();

    // Create and run the TUI application
    let mut app = foodbot_tui::App::new(store, session, event_bus.into_receiver());
    app.run().await?;

    info!("FoodBot CRM shutting down");
    Ok(())
}
