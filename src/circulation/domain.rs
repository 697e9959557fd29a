pub mod model;
pub mod service;

use chrono::NaiveDate;
use crate::books::dto::BookDto;
use crate::circulation::dto::CheckoutDto;
use crate::core::library::{LibraryResult, PaginatedResult};

pub trait CirculationService: Sync + Send {
    // Silent boolean protocol: an uncataloged book, a book already out, an
    // unknown patron, or a patron at the hold limit yields Ok(false) and
    // leaves every record untouched.
    fn check_out_book(&self, patron_id: &str, book_id: &str, days: i64) -> LibraryResult<bool>;

    // Returns the closed checkout record, or None when there was nothing to
    // return (unknown patron, unheld book).
    fn return_book(&self, patron_id: &str, book_id: &str) -> LibraryResult<Option<CheckoutDto>>;

    // Returns every book the patron currently holds.
    fn return_all(&self, patron_id: &str) -> LibraryResult<Vec<BookDto>>;

    fn set_due_date(&self, book_id: &str, due_date: NaiveDate) -> LibraryResult<BookDto>;

    // Sum of overdue-days times the daily rate over the books the patron
    // still holds; returned books and unknown ids contribute zero.
    fn calculate_fine(&self, patron_id: &str) -> LibraryResult<f64>;

    fn query_overdue(&self, page: Option<&str>, page_size: usize) -> LibraryResult<PaginatedResult<CheckoutDto>>;
}
