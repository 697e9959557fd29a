use crate::books::repository::memory_book_repository::MemoryBookRepository;

// Returns the concrete store so composition roots can hand shared clones to
// every service that works the same catalog.
pub fn create_book_repository() -> MemoryBookRepository {
    MemoryBookRepository::new()
}
