pub mod memory_checkout_repository;

use chrono::NaiveDate;
use crate::circulation::domain::model::CheckoutEntity;
use crate::core::library::{LibraryResult, PaginatedResult};
use crate::core::repository::Repository;

pub trait CheckoutRepository: Repository<CheckoutEntity> {
    // open ledger rows whose due date has passed
    fn query_overdue(&self, today: NaiveDate,
                     page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<CheckoutEntity>>;
}
