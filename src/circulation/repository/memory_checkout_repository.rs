use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use chrono::{NaiveDate, Utc};
use crate::circulation::domain::model::CheckoutEntity;
use crate::circulation::repository::CheckoutRepository;
use crate::core::library::{LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::{paginate, Repository};

// In-memory circulation ledger; clones share the same underlying rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryCheckoutRepository {
    checkouts: Arc<RwLock<Vec<CheckoutEntity>>>,
}

impl MemoryCheckoutRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_store(&self) -> LibraryResult<RwLockReadGuard<'_, Vec<CheckoutEntity>>> {
        self.checkouts.read().map_err(|err| {
            LibraryError::runtime(format!("checkout store lock poisoned {:?}", err).as_str(), None)
        })
    }

    fn write_store(&self) -> LibraryResult<RwLockWriteGuard<'_, Vec<CheckoutEntity>>> {
        self.checkouts.write().map_err(|err| {
            LibraryError::runtime(format!("checkout store lock poisoned {:?}", err).as_str(), None)
        })
    }

    fn matches(checkout: &CheckoutEntity, predicate: &HashMap<String, String>) -> bool {
        predicate.iter().all(|(name, value)| match name.as_str() {
            "checkout_id" => checkout.checkout_id == *value,
            "branch_id" => checkout.branch_id == *value,
            "book_id" => checkout.book_id == *value,
            "patron_id" => checkout.patron_id == *value,
            "checkout_status" => checkout.checkout_status.to_string() == *value,
            _ => false,
        })
    }
}

impl Repository<CheckoutEntity> for MemoryCheckoutRepository {
    fn create(&self, entity: &CheckoutEntity) -> LibraryResult<usize> {
        let mut checkouts = self.write_store()?;
        if checkouts.iter().any(|c| c.checkout_id == entity.checkout_id) {
            return Err(LibraryError::duplicate_key(
                format!("checkout {} already exists", entity.checkout_id).as_str()));
        }
        checkouts.push(entity.clone());
        Ok(1)
    }

    fn update(&self, entity: &CheckoutEntity) -> LibraryResult<usize> {
        let mut checkouts = self.write_store()?;
        if let Some(existing) = checkouts.iter_mut().find(|c| c.checkout_id == entity.checkout_id) {
            if existing.version != entity.version {
                return Err(LibraryError::validation(
                    format!("stale version {} for checkout {}", entity.version, entity.checkout_id).as_str(),
                    Some("409".to_string())));
            }
            *existing = entity.clone();
            existing.version += 1;
            existing.updated_at = Utc::now().naive_utc();
            Ok(1)
        } else {
            Err(LibraryError::not_found(
                format!("checkout not found for {}", entity.checkout_id).as_str()))
        }
    }

    fn get(&self, id: &str) -> LibraryResult<CheckoutEntity> {
        self.read_store()?
            .iter()
            .find(|c| c.checkout_id == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(format!("checkout not found for {}", id).as_str()))
    }

    fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut checkouts = self.write_store()?;
        let before = checkouts.len();
        checkouts.retain(|c| c.checkout_id != id);
        if checkouts.len() == before {
            Err(LibraryError::not_found(format!("checkout not found for {}", id).as_str()))
        } else {
            Ok(1)
        }
    }

    fn query(&self, predicate: &HashMap<String, String>,
             page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<CheckoutEntity>> {
        let checkouts = self.read_store()?;
        let matched: Vec<CheckoutEntity> = checkouts.iter()
            .filter(|c| Self::matches(c, predicate))
            .cloned()
            .collect();
        Ok(paginate(page, page_size, matched))
    }
}

impl CheckoutRepository for MemoryCheckoutRepository {
    fn query_overdue(&self, today: NaiveDate,
                     page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<CheckoutEntity>> {
        let checkouts = self.read_store()?;
        let matched: Vec<CheckoutEntity> = checkouts.iter()
            .filter(|c| c.is_overdue(today))
            .cloned()
            .collect();
        Ok(paginate(page, page_size, matched))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use chrono::{Duration, NaiveDate};
    use crate::circulation::domain::model::CheckoutEntity;
    use crate::circulation::repository::CheckoutRepository;
    use crate::circulation::repository::memory_checkout_repository::MemoryCheckoutRepository;
    use crate::core::library::CheckoutStatus;
    use crate::core::repository::Repository;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 7, 14).expect("valid date")
    }

    #[test]
    fn test_should_create_and_get_checkout() {
        let repo = MemoryCheckoutRepository::new();
        let checkout = CheckoutEntity::new("branch1", "book1", "patron1", today());
        repo.create(&checkout).expect("should create checkout");

        let loaded = repo.get(checkout.checkout_id.as_str()).expect("should get checkout");
        assert_eq!(checkout.checkout_id, loaded.checkout_id);
    }

    #[test]
    fn test_should_query_open_rows_by_patron_and_book() {
        let repo = MemoryCheckoutRepository::new();
        repo.create(&CheckoutEntity::new("branch1", "book1", "patron1", today()))
            .expect("should create checkout");
        repo.create(&CheckoutEntity::new("branch1", "book2", "patron1", today()))
            .expect("should create checkout");

        let res = repo.query(
            &HashMap::from([
                ("patron_id".to_string(), "patron1".to_string()),
                ("book_id".to_string(), "book1".to_string()),
                ("checkout_status".to_string(), CheckoutStatus::CheckedOut.to_string()),
            ]), None, 10).expect("should query");
        assert_eq!(1, res.records.len());
        assert_eq!("book1", res.records[0].book_id.as_str());
    }

    #[test]
    fn test_should_close_checkout_with_update() {
        let repo = MemoryCheckoutRepository::new();
        let mut checkout = CheckoutEntity::new("branch1", "book1", "patron1", today());
        repo.create(&checkout).expect("should create checkout");

        checkout.checkout_status = CheckoutStatus::Returned;
        repo.update(&checkout).expect("should update checkout");

        let loaded = repo.get(checkout.checkout_id.as_str()).expect("should get checkout");
        assert_eq!(CheckoutStatus::Returned, loaded.checkout_status);
        assert_eq!(1, loaded.version);
    }

    #[test]
    fn test_should_query_overdue_rows_only() {
        let repo = MemoryCheckoutRepository::new();
        let overdue = CheckoutEntity::new("branch1", "book1", "patron1", today() - Duration::days(2));
        let current = CheckoutEntity::new("branch1", "book2", "patron1", today() + Duration::days(2));
        let mut returned = CheckoutEntity::new("branch1", "book3", "patron1", today() - Duration::days(9));
        returned.checkout_status = CheckoutStatus::Returned;
        for row in [&overdue, &current, &returned] {
            repo.create(row).expect("should create checkout");
        }

        let res = repo.query_overdue(today(), None, 10).expect("should query");
        assert_eq!(1, res.records.len());
        assert_eq!("book1", res.records[0].book_id.as_str());
    }
}
