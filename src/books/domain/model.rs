use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::utils::date::{day_serializer, serializer};

// BookEntity abstracts a physical book in the catalog; several copies of the
// same title are distinct entities with distinct identifiers.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub version: i64,
    // 000-999 general classification bucket
    pub dewey_decimal_id: String,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
    // set if and only if the book is checked out
    #[serde(with = "day_serializer")]
    pub due_date: Option<NaiveDate>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            version: 0,
            dewey_decimal_id: format!("{}", rand::thread_rng().gen_range(0..1000)),
            title: title.to_string(),
            author: author.to_string(),
            book_status: BookStatus::Available,
            due_date: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // Re-checkout simply moves the due date forward.
    pub fn check_out(&mut self, days: i64, today: NaiveDate) {
        self.book_status = BookStatus::CheckedOut;
        self.due_date = Some(today + Duration::days(days));
        self.updated_at = Utc::now().naive_utc();
    }

    // Returning a book that is not checked out leaves it untouched.
    pub fn return_book(&mut self) {
        self.book_status = BookStatus::Available;
        self.due_date = None;
        self.updated_at = Utc::now().naive_utc();
    }

    pub fn set_due_date(&mut self, due_date: NaiveDate) -> LibraryResult<()> {
        if !self.is_checked_out() {
            return Err(LibraryError::invalid_state(
                "Cannot set due date for a book that is not checked out."));
        }
        self.due_date = Some(due_date);
        self.updated_at = Utc::now().naive_utc();
        Ok(())
    }

    pub fn is_checked_out(&self) -> bool {
        self.book_status == BookStatus::CheckedOut
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    // Whole days past due; zero for a book that is on the shelf or not yet due.
    pub fn overdue_days(&self, today: NaiveDate) -> i64 {
        match self.due_date {
            Some(due) if self.is_checked_out() => std::cmp::max(0, (today - due).num_days()),
            _ => 0,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use crate::books::domain::model::BookEntity;
    use crate::core::library::{BookStatus, LibraryError};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 7, 14).expect("valid date")
    }

    #[test]
    fn test_should_build_book() {
        let book = BookEntity::new("Brave New World", "Aldous Huxley");
        assert_eq!("Brave New World", book.title());
        assert_eq!("Aldous Huxley", book.author());
        assert_eq!(BookStatus::Available, book.book_status);
        assert!(!book.is_checked_out());
        assert_eq!(None, book.due_date());
    }

    #[test]
    fn test_should_check_out_and_return() {
        let mut book = BookEntity::new("Lord of the Rings", "J.R.R. Tolkien");
        assert!(!book.is_checked_out());
        assert_eq!(None, book.due_date());

        book.check_out(14, today());
        assert!(book.is_checked_out());
        assert_eq!(Some(today() + Duration::days(14)), book.due_date());

        book.return_book();
        assert!(!book.is_checked_out());
        assert_eq!(None, book.due_date());
    }

    #[test]
    fn test_should_overwrite_due_date_on_recheckout() {
        let mut book = BookEntity::new("1984", "George Orwell");
        book.check_out(14, today());
        book.check_out(7, today());
        assert_eq!(Some(today() + Duration::days(7)), book.due_date());
    }

    #[test]
    fn test_should_ignore_return_of_shelved_book() {
        let mut book = BookEntity::new("1984", "George Orwell");
        book.return_book();
        assert!(!book.is_checked_out());
        assert_eq!(None, book.due_date());
    }

    #[test]
    fn test_should_reject_due_date_for_shelved_book() {
        let mut book = BookEntity::new("Pride and Prejudice", "Jane Austen");
        let err = book.set_due_date(today() + Duration::days(7)).expect_err("should reject");
        assert!(matches!(err, LibraryError::InvalidState { message: _ }));
        assert_eq!("Cannot set due date for a book that is not checked out.", err.to_string());

        book.check_out(10, today());
        let new_due = today() + Duration::days(5);
        book.set_due_date(new_due).expect("should set due date");
        assert_eq!(Some(new_due), book.due_date());
    }

    #[test]
    fn test_should_count_overdue_days() {
        let mut book = BookEntity::new("Programming in Java", "John Doe");
        assert_eq!(0, book.overdue_days(today()));

        book.check_out(14, today());
        assert_eq!(0, book.overdue_days(today()));
        assert_eq!(0, book.overdue_days(today() + Duration::days(14)));
        assert_eq!(2, book.overdue_days(today() + Duration::days(16)));

        book.return_book();
        assert_eq!(0, book.overdue_days(today() + Duration::days(16)));
    }
}
