use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

// EventPublisher abstracts where domain change events are delivered
pub trait EventPublisher: Sync + Send {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}
