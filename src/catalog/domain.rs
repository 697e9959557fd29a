pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, PaginatedResult};

pub trait CatalogService: Sync + Send {
    fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    fn remove_book(&self, id: &str) -> LibraryResult<()>;
    fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>>;
    fn list_books(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookDto>>;
}
