use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::circulation::domain::CirculationService;
use crate::circulation::domain::service::CirculationServiceImpl;
use crate::circulation::repository::CheckoutRepository;
use crate::circulation::repository::memory_checkout_repository::MemoryCheckoutRepository;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::patrons::domain::PatronService;
use crate::utils::clock::Clock;

pub fn create_checkout_repository() -> MemoryCheckoutRepository {
    MemoryCheckoutRepository::new()
}

// The caller supplies the collaborating services so that all of them work the
// same shared stores.
pub fn create_circulation_service(config: &Configuration,
                                  checkout_repository: Box<dyn CheckoutRepository>,
                                  patron_service: Box<dyn PatronService>,
                                  catalog_service: Box<dyn CatalogService>,
                                  events_publisher: Box<dyn EventPublisher>,
                                  clock: Arc<dyn Clock>) -> Box<dyn CirculationService> {
    Box::new(CirculationServiceImpl::new(config, checkout_repository,
                                         patron_service, catalog_service,
                                         events_publisher, clock))
}
