use crate::lead::Lead;
use tokio::sync::mpsc;

/// Events that flow from background API tasks to the UI loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A fresh copy of the lead list arrived; replaces the cache wholesale
    LeadsLoaded(Vec<Lead>),

    /// A create or update round trip finished successfully
    LeadSaved(Lead),

    /// A delete round trip finished successfully
    LeadDeleted { id: String },

    /// The AI endpoint turned a conversation into a lead
    ParseCompleted(Lead),

    /// The AI endpoint rejected the conversation
    ParseFailed(String),

    /// The session was torn down; the UI should return to the home screen
    LoggedOut,

    /// A request failed; surfaced to the user as a flat message
    Error { message: String },

    /// Application should quit
    Quit,
}

/// Event bus for communication between components
#[derive(Debug)]
pub struct EventBus {
    sender: mpsc::UnboundedSender<AppEvent>,
    receiver: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Get a sender handle for the event bus
    pub fn sender(&self) -> EventSender {
        EventSender {
            inner: self.sender.clone(),
        }
    }

    /// Get the receiver (should only be used by the main event loop)
    pub fn into_receiver(self) -> mpsc::UnboundedReceiver<AppEvent> {
        self.receiver
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for sending events to the event bus
#[derive(Debug, Clone)]
pub struct EventSender {
    inner: mpsc::UnboundedSender<AppEvent>,
}

impl EventSender {
    /// Send an event to the bus
    pub fn send(&self, event: AppEvent) -> Result<(), EventSendError> {
        self.inner
            .send(event)
            .map_err(|_| EventSendError::ChannelClosed)
    }

    /// Send a refreshed lead list
    pub fn send_leads_loaded(&self, leads: Vec<Lead>) -> Result<(), EventSendError> {
        self.send(AppEvent::LeadsLoaded(leads))
    }

    /// Send a flat error message
    pub fn send_error(&self, message: impl Into<String>) -> Result<(), EventSendError> {
        self.send(AppEvent::Error {
            message: message.into(),
        })
    }

    /// Send quit signal
    pub fn send_quit(&self) -> Result<(), EventSendError> {
        self.send(AppEvent::Quit)
    }
}

/// Errors that can occur when sending events
#[derive(Debug, thiserror::Error)]
pub enum EventSendError {
    #[error("Event channel is closed")]
    ChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus() {
        let bus = EventBus::new();
        let sender = bus.sender();
        let mut receiver = bus.into_receiver();

        sender.send_error("boom").unwrap();

        let event = receiver.recv().await.unwrap();
        match event {
            AppEvent::Error { message } => assert_eq!(message, "boom"),
            _ => panic!("Expected Error event"),
        }
    }

    #[tokio::test]
    async fn test_events_arrive_in_order() {
        let bus = EventBus::new();
        let sender = bus.sender();
        let mut receiver = bus.into_receiver();

        sender.send_leads_loaded(Vec::new()).unwrap();
        sender.send_quit().unwrap();

        assert!(matches!(
            receiver.recv().await.unwrap(),
            AppEvent::LeadsLoaded(_)
        ));
        assert!(matches!(receiver.recv().await.unwrap(), AppEvent::Quit));
    }
}
