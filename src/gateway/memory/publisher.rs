use std::sync::{Arc, RwLock};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher records published events so tests can assert on them.
// Clones share the same underlying buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Arc<RwLock<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        match self.events.read() {
            Ok(events) => events.clone(),
            Err(_) => vec![],
        }
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let mut events = self.events.write().map_err(|err| {
            LibraryError::runtime(format!("event buffer lock poisoned {:?}", err).as_str(), None)
        })?;
        events.push(event.clone());
        Ok(())
    }
}
