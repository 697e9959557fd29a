use std::sync::Arc;
use chrono::NaiveDate;
use crate::books::dto::BookDto;
use crate::books::factory::create_book_repository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::circulation::command::calculate_fine_cmd::{CalculateFineCommand, CalculateFineCommandRequest};
use crate::circulation::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use crate::circulation::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::circulation::command::set_due_date_cmd::{SetDueDateCommand, SetDueDateCommandRequest};
use crate::circulation::domain::CirculationService;
use crate::circulation::dto::CheckoutDto;
use crate::circulation::factory::{create_checkout_repository, create_circulation_service};
use crate::circulation::repository::memory_checkout_repository::MemoryCheckoutRepository;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::patrons::command::add_patron_cmd::{AddPatronCommand, AddPatronCommandRequest};
use crate::patrons::command::get_patron_cmd::{GetPatronCommand, GetPatronCommandRequest};
use crate::patrons::command::list_patrons_cmd::{ListPatronsCommand, ListPatronsCommandRequest};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;
use crate::patrons::factory::{create_patron_repository, create_patron_service};
use crate::patrons::repository::memory_patron_repository::MemoryPatronRepository;
use crate::utils::clock::{Clock, SystemClock};

const LIST_PAGE_SIZE: usize = 100;

// Library composes the catalog, the member registry, and the circulation desk
// over shared in-memory stores and exposes the lending operations in process.
pub struct Library {
    config: Configuration,
    publisher_via: GatewayPublisherVia,
    clock: Arc<dyn Clock>,
    book_repository: MemoryBookRepository,
    patron_repository: MemoryPatronRepository,
    checkout_repository: MemoryCheckoutRepository,
}

impl Library {
    pub fn new(config: Configuration) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Configuration, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            publisher_via: GatewayPublisherVia::Logs,
            clock,
            book_repository: create_book_repository(),
            patron_repository: create_patron_repository(),
            checkout_repository: create_checkout_repository(),
        }
    }

    fn catalog_service(&self) -> Box<dyn CatalogService> {
        create_catalog_service(
            &self.config,
            Box::new(self.book_repository.clone()),
            create_publisher(self.publisher_via))
    }

    fn patron_service(&self) -> Box<dyn PatronService> {
        create_patron_service(&self.config, Box::new(self.patron_repository.clone()))
    }

    fn circulation_service(&self) -> Box<dyn CirculationService> {
        create_circulation_service(
            &self.config,
            Box::new(self.checkout_repository.clone()),
            self.patron_service(),
            self.catalog_service(),
            create_publisher(self.publisher_via),
            self.clock.clone())
    }

    pub fn add_book(&self, title: &str, author: &str) -> Result<BookDto, CommandError> {
        AddBookCommand::new(self.catalog_service())
            .execute(AddBookCommandRequest::new(title, author))
            .map(|res| res.book)
    }

    pub fn remove_book(&self, book_id: &str) -> Result<(), CommandError> {
        RemoveBookCommand::new(self.catalog_service())
            .execute(RemoveBookCommandRequest::new(book_id))
            .map(|_| ())
    }

    pub fn find_book(&self, book_id: &str) -> Result<BookDto, CommandError> {
        GetBookCommand::new(self.catalog_service())
            .execute(GetBookCommandRequest::new(book_id))
            .map(|res| res.book)
    }

    pub fn add_patron(&self, name: &str) -> Result<PatronDto, CommandError> {
        AddPatronCommand::new(self.patron_service())
            .execute(AddPatronCommandRequest::new(name))
            .map(|res| res.patron)
    }

    pub fn find_patron(&self, patron_id: &str) -> Result<PatronDto, CommandError> {
        GetPatronCommand::new(self.patron_service())
            .execute(GetPatronCommandRequest::new(patron_id))
            .map(|res| res.patron)
    }

    pub fn check_out_book(&self, patron_id: &str, book_id: &str, days: i64) -> Result<bool, CommandError> {
        CheckoutBookCommand::new(self.circulation_service())
            .execute(CheckoutBookCommandRequest::new(patron_id, book_id, days))
            .map(|res| res.checked_out)
    }

    pub fn return_book(&self, patron_id: &str, book_id: &str) -> Result<Option<CheckoutDto>, CommandError> {
        ReturnBookCommand::new(self.circulation_service())
            .execute(ReturnBookCommandRequest::new(patron_id, book_id))
            .map(|res| res.checkout)
    }

    pub fn return_all(&self, patron_id: &str) -> Result<Vec<BookDto>, CommandError> {
        self.circulation_service().return_all(patron_id).map_err(CommandError::from)
    }

    pub fn set_due_date(&self, book_id: &str, due_date: NaiveDate) -> Result<BookDto, CommandError> {
        SetDueDateCommand::new(self.circulation_service())
            .execute(SetDueDateCommandRequest::new(book_id, due_date))
            .map(|res| res.book)
    }

    pub fn calculate_fine(&self, patron_id: &str) -> Result<f64, CommandError> {
        CalculateFineCommand::new(self.circulation_service())
            .execute(CalculateFineCommandRequest::new(patron_id))
            .map(|res| res.fine)
    }

    // Every catalog entry, checked out or not.
    pub fn list_available_books(&self) -> Result<Vec<BookDto>, CommandError> {
        let cmd = ListBooksCommand::new(self.catalog_service());
        let mut books = Vec::new();
        let mut page: Option<String> = None;
        loop {
            let res = cmd.execute(ListBooksCommandRequest::new(page.as_deref(), LIST_PAGE_SIZE))?;
            books.extend(res.books);
            match res.next_page {
                Some(next) => page = Some(next),
                None => break,
            }
        }
        Ok(books)
    }

    pub fn list_patrons(&self) -> Result<Vec<PatronDto>, CommandError> {
        let cmd = ListPatronsCommand::new(self.patron_service());
        let mut patrons = Vec::new();
        let mut page: Option<String> = None;
        loop {
            let res = cmd.execute(ListPatronsCommandRequest::new(page.as_deref(), LIST_PAGE_SIZE))?;
            patrons.extend(res.patrons);
            match res.next_page {
                Some(next) => page = Some(next),
                None => break,
            }
        }
        Ok(patrons)
    }

    pub fn overdue_checkouts(&self) -> Result<Vec<CheckoutDto>, CommandError> {
        let svc = self.circulation_service();
        let mut checkouts = Vec::new();
        let mut page: Option<String> = None;
        loop {
            let res = svc.query_overdue(page.as_deref(), LIST_PAGE_SIZE)?;
            checkouts.extend(res.records);
            match res.next_page {
                Some(next) => page = Some(next),
                None => break,
            }
        }
        Ok(checkouts)
    }
}
