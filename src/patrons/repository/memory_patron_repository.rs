use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use chrono::Utc;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::{paginate, Repository};
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::repository::PatronRepository;

// In-memory member registry; clones share the same underlying records.
#[derive(Debug, Clone, Default)]
pub struct MemoryPatronRepository {
    patrons: Arc<RwLock<Vec<PatronEntity>>>,
}

impl MemoryPatronRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_store(&self) -> LibraryResult<RwLockReadGuard<'_, Vec<PatronEntity>>> {
        self.patrons.read().map_err(|err| {
            LibraryError::runtime(format!("patron store lock poisoned {:?}", err).as_str(), None)
        })
    }

    fn write_store(&self) -> LibraryResult<RwLockWriteGuard<'_, Vec<PatronEntity>>> {
        self.patrons.write().map_err(|err| {
            LibraryError::runtime(format!("patron store lock poisoned {:?}", err).as_str(), None)
        })
    }

    fn matches(patron: &PatronEntity, predicate: &HashMap<String, String>) -> bool {
        predicate.iter().all(|(name, value)| match name.as_str() {
            "patron_id" => patron.patron_id == *value,
            "name" => patron.name == *value,
            _ => false,
        })
    }
}

impl Repository<PatronEntity> for MemoryPatronRepository {
    fn create(&self, entity: &PatronEntity) -> LibraryResult<usize> {
        let mut patrons = self.write_store()?;
        if patrons.iter().any(|p| p.patron_id == entity.patron_id) {
            return Err(LibraryError::duplicate_key(
                format!("patron {} already exists", entity.patron_id).as_str()));
        }
        patrons.push(entity.clone());
        Ok(1)
    }

    fn update(&self, entity: &PatronEntity) -> LibraryResult<usize> {
        let mut patrons = self.write_store()?;
        if let Some(existing) = patrons.iter_mut().find(|p| p.patron_id == entity.patron_id) {
            if existing.version != entity.version {
                return Err(LibraryError::validation(
                    format!("stale version {} for patron {}", entity.version, entity.patron_id).as_str(),
                    Some("409".to_string())));
            }
            *existing = entity.clone();
            existing.version += 1;
            existing.updated_at = Utc::now().naive_utc();
            Ok(1)
        } else {
            Err(LibraryError::not_found(
                format!("patron not found for {}", entity.patron_id).as_str()))
        }
    }

    fn get(&self, id: &str) -> LibraryResult<PatronEntity> {
        self.read_store()?
            .iter()
            .find(|p| p.patron_id == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("patron not found for {}", id).as_str()))
    }

    fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut patrons = self.write_store()?;
        let before = patrons.len();
        patrons.retain(|p| p.patron_id != id);
        if patrons.len() == before {
            Err(LibraryError::not_found(format!("patron not found for {}", id).as_str()))
        } else {
            Ok(1)
        }
    }

    fn query(&self, predicate: &HashMap<String, String>,
             page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PatronEntity>> {
        let patrons = self.read_store()?;
        let matched: Vec<PatronEntity> = patrons.iter()
            .filter(|p| Self::matches(p, predicate))
            .cloned()
            .collect();
        Ok(paginate(page, page_size, matched))
    }
}

impl PatronRepository for MemoryPatronRepository {
    fn find_by_name(&self, name: &str,
                    page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<PatronEntity>> {
        self.query(&HashMap::from([("name".to_string(), name.to_string())]), page, page_size)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;
    use crate::patrons::domain::model::PatronEntity;
    use crate::patrons::repository::PatronRepository;
    use crate::patrons::repository::memory_patron_repository::MemoryPatronRepository;

    #[test]
    fn test_should_create_and_get_patron() {
        let repo = MemoryPatronRepository::new();
        let patron = PatronEntity::new("Alice");
        repo.create(&patron).expect("should create patron");

        let loaded = repo.get(patron.patron_id.as_str()).expect("should get patron");
        assert_eq!(patron.patron_id, loaded.patron_id);
        assert_eq!("Alice", loaded.name.as_str());
    }

    #[test]
    fn test_should_reject_duplicate_patron_id() {
        let repo = MemoryPatronRepository::new();
        let patron = PatronEntity::new("Alice");
        repo.create(&patron).expect("should create patron");
        let err = repo.create(&patron).expect_err("should reject duplicate");
        assert!(matches!(err, LibraryError::DuplicateKey { message: _ }));
    }

    #[test]
    fn test_should_update_holdings_with_version_check() {
        let repo = MemoryPatronRepository::new();
        let mut patron = PatronEntity::new("Alice");
        repo.create(&patron).expect("should create patron");

        patron.check_out_book("book1");
        repo.update(&patron).expect("should update patron");

        let loaded = repo.get(patron.patron_id.as_str()).expect("should get patron");
        assert_eq!(1, loaded.holdings.len());
        assert_eq!(1, loaded.version);

        let err = repo.update(&patron).expect_err("should reject stale update");
        assert!(matches!(err, LibraryError::Validation { message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_delete_patron() {
        let repo = MemoryPatronRepository::new();
        let patron = PatronEntity::new("Alice");
        repo.create(&patron).expect("should create patron");
        repo.delete(patron.patron_id.as_str()).expect("should delete patron");
        assert!(repo.get(patron.patron_id.as_str()).is_err());
    }

    #[test]
    fn test_should_find_by_name() {
        let repo = MemoryPatronRepository::new();
        repo.create(&PatronEntity::new("Alice")).expect("should create patron");
        repo.create(&PatronEntity::new("Bob")).expect("should create patron");

        let res = repo.find_by_name("Alice", None, 10).expect("should query");
        assert_eq!(1, res.records.len());

        let all = repo.query(&HashMap::new(), None, 10).expect("should query");
        assert_eq!(2, all.records.len());
    }
}
