use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes each domain event as a structured log record; nothing is retained.
#[derive(Debug)]
pub struct LogPublisher {
    topic: String,
}

impl LogPublisher {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
        }
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let payload = serde_json::to_string(event)?;
        info!(topic = self.topic.as_str(), event_id = event.event_id.as_str(),
            kind = ?event.kind, payload = payload.as_str(), "published {}", event.name);
        Ok(())
    }
}
