use crate::core::domain::Configuration;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::service::PatronServiceImpl;
use crate::patrons::repository::PatronRepository;
use crate::patrons::repository::memory_patron_repository::MemoryPatronRepository;

pub fn create_patron_repository() -> MemoryPatronRepository {
    MemoryPatronRepository::new()
}

pub fn create_patron_service(config: &Configuration,
                             patron_repository: Box<dyn PatronRepository>) -> Box<dyn PatronService> {
    Box::new(PatronServiceImpl::new(config, patron_repository))
}
