use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

pub trait EventPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}
