use std::collections::HashMap;
use std::sync::Arc;
use chrono::{NaiveDate, Utc};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::circulation::domain::CirculationService;
use crate::circulation::domain::model::CheckoutEntity;
use crate::circulation::dto::CheckoutDto;
use crate::circulation::repository::CheckoutRepository;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, CheckoutStatus, LibraryError, LibraryResult, PaginatedResult};
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;
use crate::patrons::domain::{Patron, PatronService};
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;
use crate::utils::clock::Clock;

pub struct CirculationServiceImpl {
    branch_id: String,
    max_holds: i64,
    daily_fine_rate: f64,
    checkout_repository: Box<dyn CheckoutRepository>,
    patron_service: Box<dyn PatronService>,
    catalog_service: Box<dyn CatalogService>,
    events_publisher: Box<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
}

impl CirculationServiceImpl {
    pub fn new(config: &Configuration, checkout_repository: Box<dyn CheckoutRepository>,
               patron_service: Box<dyn PatronService>, catalog_service: Box<dyn CatalogService>,
               events_publisher: Box<dyn EventPublisher>, clock: Arc<dyn Clock>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            max_holds: config.max_holds,
            daily_fine_rate: config.daily_fine_rate,
            checkout_repository,
            patron_service,
            catalog_service,
            events_publisher,
            clock,
        }
    }

    fn find_open(&self, patron_id: &str, book_id: &str) -> LibraryResult<CheckoutEntity> {
        let res = self.checkout_repository.query(
            &HashMap::from([
                ("patron_id".to_string(), patron_id.to_string()),
                ("book_id".to_string(), book_id.to_string()),
                ("checkout_status".to_string(), CheckoutStatus::CheckedOut.to_string()),
            ]), None, 10)?;
        let mut iter = res.records.iter();
        if let Some(first) = iter.next() {
            Ok(first.clone())
        } else {
            Err(LibraryError::not_found(format!("no open checkout of {} for patron {}",
                                                book_id, patron_id).as_str()))
        }
    }

    fn find_open_by_book(&self, book_id: &str) -> LibraryResult<Option<CheckoutEntity>> {
        let res = self.checkout_repository.query(
            &HashMap::from([
                ("book_id".to_string(), book_id.to_string()),
                ("checkout_status".to_string(), CheckoutStatus::CheckedOut.to_string()),
            ]), None, 10)?;
        Ok(res.records.first().cloned())
    }
}

impl CirculationService for CirculationServiceImpl {
    fn check_out_book(&self, patron_id: &str, book_id: &str, days: i64) -> LibraryResult<bool> {
        // validate everything up front so a rejected checkout never mutates
        // the book, the patron, or the ledger
        let book = match self.catalog_service.find_book_by_id(book_id) {
            Ok(book) => book,
            Err(LibraryError::NotFound { .. }) => {
                tracing::warn!(book_id, "checkout rejected, book is not in the catalog");
                return Ok(false);
            }
            Err(err) => return Err(err),
        };
        if book.status() != BookStatus::Available {
            tracing::warn!(book_id, "checkout rejected, book is already checked out");
            return Ok(false);
        }
        let patron = match self.patron_service.find_patron_by_id(patron_id) {
            Ok(patron) => patron,
            Err(LibraryError::NotFound { .. }) => {
                tracing::warn!(patron_id, "checkout rejected, unknown patron");
                return Ok(false);
            }
            Err(err) => return Err(err),
        };
        if patron.hold_count() >= self.max_holds as usize {
            tracing::warn!(patron_id, "checkout rejected, patron is at the hold limit");
            return Ok(false);
        }

        let today = self.clock.today();
        let mut book_entity = BookEntity::from(&book);
        book_entity.check_out(days, today);
        let due_at = book_entity.due_date().unwrap_or(today);
        self.catalog_service.update_book(&BookDto::from(&book_entity))?;

        let mut patron_entity = PatronEntity::from(&patron);
        patron_entity.check_out_book(book_id);
        self.patron_service.update_patron(&PatronDto::from(&patron_entity))?;

        let checkout = CheckoutDto::from_patron_book(self.branch_id.as_str(), &patron, &book, due_at);
        self.checkout_repository.create(&CheckoutEntity::from(&checkout))?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "book_checkout", "circulation", checkout.checkout_id.as_str(), &HashMap::new(), &checkout)?)?;
        tracing::info!(patron_id, book_id, "book checked out");
        Ok(true)
    }

    fn return_book(&self, patron_id: &str, book_id: &str) -> LibraryResult<Option<CheckoutDto>> {
        let patron = match self.patron_service.find_patron_by_id(patron_id) {
            Ok(patron) => patron,
            Err(LibraryError::NotFound { .. }) => {
                tracing::warn!(patron_id, "return ignored, unknown patron");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        if !patron.holds(book_id) {
            tracing::warn!(patron_id, book_id, "return ignored, patron does not hold the book");
            return Ok(None);
        }

        match self.catalog_service.find_book_by_id(book_id) {
            Ok(book) => {
                let mut book_entity = BookEntity::from(&book);
                book_entity.return_book();
                self.catalog_service.update_book(&BookDto::from(&book_entity))?;
            }
            Err(LibraryError::NotFound { .. }) => {
                tracing::warn!(book_id, "returned book is no longer in the catalog");
            }
            Err(err) => return Err(err),
        }

        let mut patron_entity = PatronEntity::from(&patron);
        patron_entity.return_book(book_id);
        self.patron_service.update_patron(&PatronDto::from(&patron_entity))?;

        match self.find_open(patron_id, book_id) {
            Ok(mut existing) => {
                existing.checkout_status = CheckoutStatus::Returned;
                existing.returned_at = Some(Utc::now().naive_utc());
                self.checkout_repository.update(&existing)?;
                let checkout = CheckoutDto::from(&existing);
                let _ = self.events_publisher.publish(&DomainEvent::deleted(
                    "book_returned", "circulation", checkout.checkout_id.as_str(), &HashMap::new(), &checkout)?)?;
                tracing::info!(patron_id, book_id, "book returned");
                Ok(Some(checkout))
            }
            Err(LibraryError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn return_all(&self, patron_id: &str) -> LibraryResult<Vec<BookDto>> {
        let patron = match self.patron_service.find_patron_by_id(patron_id) {
            Ok(patron) => patron,
            Err(LibraryError::NotFound { .. }) => return Ok(vec![]),
            Err(err) => return Err(err),
        };
        let mut returned = Vec::new();
        for book_id in patron.holdings.iter() {
            let _ = self.return_book(patron_id, book_id.as_str())?;
            if let Ok(book) = self.catalog_service.find_book_by_id(book_id.as_str()) {
                returned.push(book);
            }
        }
        Ok(returned)
    }

    fn set_due_date(&self, book_id: &str, due_date: NaiveDate) -> LibraryResult<BookDto> {
        let book = self.catalog_service.find_book_by_id(book_id)?;
        let mut book_entity = BookEntity::from(&book);
        book_entity.set_due_date(due_date)?;
        let updated = self.catalog_service.update_book(&BookDto::from(&book_entity))?;
        // keep the open ledger row in step with the book
        if let Some(mut open) = self.find_open_by_book(book_id)? {
            open.due_at = due_date;
            self.checkout_repository.update(&open)?;
        }
        Ok(updated)
    }

    fn calculate_fine(&self, patron_id: &str) -> LibraryResult<f64> {
        let patron = match self.patron_service.find_patron_by_id(patron_id) {
            Ok(patron) => patron,
            Err(LibraryError::NotFound { .. }) => return Ok(0.0),
            Err(err) => return Err(err),
        };
        let today = self.clock.today();
        let mut fine = 0.0;
        for book_id in patron.holdings.iter() {
            match self.catalog_service.find_book_by_id(book_id.as_str()) {
                Ok(book) => {
                    let book_entity = BookEntity::from(&book);
                    fine += book_entity.overdue_days(today) as f64 * self.daily_fine_rate;
                }
                // stale id, the book was removed from the catalog
                Err(LibraryError::NotFound { .. }) => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(fine)
    }

    fn query_overdue(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<CheckoutDto>> {
        let res = self.checkout_repository.query_overdue(self.clock.today(), page, page_size)?;
        let records = res.records.iter().map(CheckoutDto::from).collect();
        Ok(PaginatedResult::new(page, page_size, res.next_page, records))
    }
}

impl From<&CheckoutEntity> for CheckoutDto {
    fn from(other: &CheckoutEntity) -> CheckoutDto {
        CheckoutDto {
            checkout_id: other.checkout_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            book_id: other.book_id.to_string(),
            patron_id: other.patron_id.to_string(),
            checkout_status: other.checkout_status,
            checkout_at: other.checkout_at,
            due_at: other.due_at,
            returned_at: other.returned_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&CheckoutDto> for CheckoutEntity {
    fn from(other: &CheckoutDto) -> CheckoutEntity {
        CheckoutEntity {
            checkout_id: other.checkout_id.to_string(),
            version: other.version,
            branch_id: other.branch_id.to_string(),
            book_id: other.book_id.to_string(),
            patron_id: other.patron_id.to_string(),
            checkout_status: other.checkout_status,
            checkout_at: other.checkout_at,
            due_at: other.due_at,
            returned_at: other.returned_at,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
