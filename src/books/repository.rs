pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {
    fn find_by_title(&self, title: &str,
                     page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>>;
}
