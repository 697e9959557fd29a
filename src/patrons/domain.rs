pub mod model;
pub mod service;

use crate::core::domain::Identifiable;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::patrons::dto::PatronDto;

pub trait PatronService: Sync + Send {
    fn add_patron(&self, patron: &PatronDto) -> LibraryResult<()>;
    fn remove_patron(&self, id: &str) -> LibraryResult<()>;
    fn update_patron(&self, patron: &PatronDto) -> LibraryResult<()>;
    fn find_patron_by_id(&self, id: &str) -> LibraryResult<PatronDto>;
    fn find_patrons_by_name(&self, name: &str) -> LibraryResult<Vec<PatronDto>>;
    fn list_patrons(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PatronDto>>;
}

pub trait Patron: Identifiable {
    fn holds(&self, book_id: &str) -> bool;
    fn hold_count(&self) -> usize;
}
