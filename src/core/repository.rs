use std::cmp;
use std::collections::HashMap;
use crate::core::library::{LibraryResult, PaginatedResult};

// largest slice a single query page may return
pub const MAX_PAGE_SIZE: usize = 500;

// Repository defines common data access operations for entities
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    fn delete(&self, id: &str) -> LibraryResult<usize>;

    // find entities matching the predicate attributes
    fn query(&self, predicate: &HashMap<String, String>,
             page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<Entity>>;
}

// Cuts one page out of an already-filtered record set. The page token is the
// offset of the first record, so the next page token is the end offset.
pub(crate) fn paginate<Entity>(page: Option<&str>, page_size: usize,
                               records: Vec<Entity>) -> PaginatedResult<Entity>
where
    Entity: Clone,
{
    let offset = page.and_then(|p| p.parse::<usize>().ok()).unwrap_or(0);
    let start = cmp::min(offset, records.len());
    let end = cmp::min(start + cmp::min(page_size, MAX_PAGE_SIZE), records.len());
    let next_page = if end < records.len() {
        Some(end.to_string())
    } else {
        None
    };
    PaginatedResult::new(page, page_size, next_page, records[start..end].to_vec())
}

#[cfg(test)]
mod tests {
    use crate::core::repository::paginate;

    #[test]
    fn test_should_paginate_records() {
        let records: Vec<i32> = (0..25).collect();
        let first = paginate(None, 10, records.clone());
        assert_eq!(10, first.records.len());
        assert_eq!(Some("10".to_string()), first.next_page);

        let second = paginate(first.next_page.as_deref(), 10, records.clone());
        assert_eq!(10, second.records.len());
        assert_eq!(10, second.records[0]);
        assert_eq!(Some("20".to_string()), second.next_page);

        let last = paginate(second.next_page.as_deref(), 10, records);
        assert_eq!(5, last.records.len());
        assert_eq!(None, last.next_page);
    }

    #[test]
    fn test_should_treat_bad_page_token_as_first_page() {
        let records: Vec<i32> = (0..5).collect();
        let res = paginate(Some("junk"), 10, records);
        assert_eq!(5, res.records.len());
        assert_eq!(None, res.next_page);
    }
}
