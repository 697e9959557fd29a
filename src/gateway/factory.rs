use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::memory::publisher::MemoryPublisher;

pub fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogPublisher::new())
        }
        GatewayPublisherVia::Memory => {
            Box::new(MemoryPublisher::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_create_publishers() {
        let event = DomainEvent::added(
            "books", "books", "key", &HashMap::new(), &"data".to_string())
            .expect("build event");
        for via in [GatewayPublisherVia::Logs, GatewayPublisherVia::Memory] {
            let publisher = create_publisher(via);
            publisher.publish(&event).expect("should publish");
        }
    }
}
