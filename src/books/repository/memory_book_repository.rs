use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use chrono::Utc;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::{paginate, Repository};

// In-memory catalog store; insertion order doubles as listing order.
// Clones share the same underlying records.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookRepository {
    books: Arc<RwLock<Vec<BookEntity>>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_store(&self) -> LibraryResult<RwLockReadGuard<'_, Vec<BookEntity>>> {
        self.books.read().map_err(|err| {
            LibraryError::runtime(format!("book store lock poisoned {:?}", err).as_str(), None)
        })
    }

    fn write_store(&self) -> LibraryResult<RwLockWriteGuard<'_, Vec<BookEntity>>> {
        self.books.write().map_err(|err| {
            LibraryError::runtime(format!("book store lock poisoned {:?}", err).as_str(), None)
        })
    }

    fn matches(book: &BookEntity, predicate: &HashMap<String, String>) -> bool {
        predicate.iter().all(|(name, value)| match name.as_str() {
            "book_id" => book.book_id == *value,
            "title" => book.title == *value,
            "author" => book.author == *value,
            "book_status" => book.book_status.to_string() == *value,
            "dewey_decimal_id" => book.dewey_decimal_id == *value,
            _ => false,
        })
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.write_store()?;
        if books.iter().any(|b| b.book_id == entity.book_id) {
            return Err(LibraryError::duplicate_key(
                format!("book {} already exists", entity.book_id).as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.write_store()?;
        if let Some(existing) = books.iter_mut().find(|b| b.book_id == entity.book_id) {
            if existing.version != entity.version {
                return Err(LibraryError::validation(
                    format!("stale version {} for book {}", entity.version, entity.book_id).as_str(),
                    Some("409".to_string())));
            }
            *existing = entity.clone();
            existing.version += 1;
            existing.updated_at = Utc::now().naive_utc();
            Ok(1)
        } else {
            Err(LibraryError::not_found(
                format!("book not found for {}", entity.book_id).as_str()))
        }
    }

    fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.read_store()?
            .iter()
            .find(|b| b.book_id == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut books = self.write_store()?;
        let before = books.len();
        books.retain(|b| b.book_id != id);
        if books.len() == before {
            Err(LibraryError::not_found(format!("book not found for {}", id).as_str()))
        } else {
            Ok(1)
        }
    }

    fn query(&self, predicate: &HashMap<String, String>,
             page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        let books = self.read_store()?;
        let matched: Vec<BookEntity> = books.iter()
            .filter(|b| Self::matches(b, predicate))
            .cloned()
            .collect();
        Ok(paginate(page, page_size, matched))
    }
}

impl BookRepository for MemoryBookRepository {
    fn find_by_title(&self, title: &str,
                     page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<BookEntity>> {
        self.query(&HashMap::from([("title".to_string(), title.to_string())]), page, page_size)
    }
}
