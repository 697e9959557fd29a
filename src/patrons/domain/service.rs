use std::collections::HashMap;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::patrons::domain::PatronService;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;
use crate::patrons::repository::PatronRepository;

pub struct PatronServiceImpl {
    patron_repository: Box<dyn PatronRepository>,
}

impl PatronServiceImpl {
    pub fn new(_config: &Configuration, patron_repository: Box<dyn PatronRepository>) -> Self {
        PatronServiceImpl {
            patron_repository,
        }
    }
}

impl PatronService for PatronServiceImpl {
    fn add_patron(&self, patron: &PatronDto) -> LibraryResult<()> {
        self.patron_repository.create(&PatronEntity::from(patron)).map(|_| ())
    }

    fn remove_patron(&self, id: &str) -> LibraryResult<()> {
        self.patron_repository.delete(id).map(|_| ())
    }

    fn update_patron(&self, patron: &PatronDto) -> LibraryResult<()> {
        self.patron_repository.update(&PatronEntity::from(patron)).map(|_| ())
    }

    fn find_patron_by_id(&self, id: &str) -> LibraryResult<PatronDto> {
        self.patron_repository.get(id).map(|p| PatronDto::from(&p))
    }

    fn find_patrons_by_name(&self, name: &str) -> LibraryResult<Vec<PatronDto>> {
        let res = self.patron_repository.find_by_name(name, None, 100)?;
        Ok(res.records.iter().map(PatronDto::from).collect())
    }

    fn list_patrons(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PatronDto>> {
        let res = self.patron_repository.query(&HashMap::new(), page, page_size)?;
        let records = res.records.iter().map(PatronDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            holdings: other.holdings.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&PatronDto> for PatronEntity {
    fn from(other: &PatronDto) -> Self {
        Self {
            patron_id: other.patron_id.to_string(),
            version: other.version,
            name: other.name.to_string(),
            holdings: other.holdings.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
