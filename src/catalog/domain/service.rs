use std::collections::HashMap;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            book_repository,
            events_publisher,
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.book_repository.create(&BookEntity::from(book)).map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "books", "books", book.book_id.as_str(), &HashMap::new(), book)?)?;
        Ok(book.clone())
    }

    fn remove_book(&self, id: &str) -> LibraryResult<()> {
        let res = self.book_repository.delete(id).map(|_| ())?;
        let data = id.to_string();
        let _ = self.events_publisher.publish(&DomainEvent::deleted(
            "books", "books", id, &HashMap::new(), &data)?)?;
        Ok(res)
    }

    fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        self.book_repository.update(&BookEntity::from(book)).map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "books", "books", book.book_id.as_str(), &HashMap::new(), book)?)?;
        Ok(book.clone())
    }

    fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).map(|b| BookDto::from(&b))
    }

    fn find_books_by_title(&self, title: &str) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.find_by_title(title, None, 100)?;
        Ok(res.records.iter().map(BookDto::from).collect())
    }

    fn list_books(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookDto>> {
        let res = self.book_repository.query(&HashMap::new(), page, page_size)?;
        let records = res.records.iter().map(BookDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            dewey_decimal_id: other.dewey_decimal_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            book_status: other.book_status,
            due_date: other.due_date,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            dewey_decimal_id: other.dewey_decimal_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            book_status: other.book_status,
            due_date: other.due_date,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
