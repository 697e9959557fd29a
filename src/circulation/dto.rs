use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::CheckoutStatus;
use crate::patrons::domain::Patron;
use crate::utils::date::serializer;

// CheckoutDto carries one circulation ledger row across the service boundary.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutDto {
    pub checkout_id: String,
    pub version: i64,
    pub branch_id: String,
    pub book_id: String,
    pub patron_id: String,
    pub checkout_status: CheckoutStatus,
    #[serde(with = "serializer")]
    pub checkout_at: NaiveDateTime,
    pub due_at: NaiveDate,
    pub returned_at: Option<NaiveDateTime>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl CheckoutDto {
    pub fn new(branch_id: &str, book_id: &str, patron_id: &str, due_at: NaiveDate) -> Self {
        Self {
            checkout_id: Uuid::new_v4().to_string(),
            version: 0,
            branch_id: branch_id.to_string(),
            book_id: book_id.to_string(),
            patron_id: patron_id.to_string(),
            checkout_status: CheckoutStatus::CheckedOut,
            checkout_at: Utc::now().naive_utc(),
            due_at,
            returned_at: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn from_patron_book(branch_id: &str, patron: &dyn Patron, book: &dyn Book,
                            due_at: NaiveDate) -> Self {
        CheckoutDto::new(branch_id, book.id().as_str(), patron.id().as_str(), due_at)
    }
}

impl Identifiable for CheckoutDto {
    fn id(&self) -> String {
        self.checkout_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use crate::books::dto::BookDto;
    use crate::circulation::dto::CheckoutDto;
    use crate::core::library::CheckoutStatus;
    use crate::patrons::dto::PatronDto;

    #[test]
    fn test_should_build_checkout() {
        let due = Utc::now().date_naive() + Duration::days(14);
        let checkout = CheckoutDto::new("branch1", "book1", "patron1", due);
        assert_eq!("book1", checkout.book_id.as_str());
        assert_eq!("patron1", checkout.patron_id.as_str());
        assert_eq!(CheckoutStatus::CheckedOut, checkout.checkout_status);
    }

    #[test]
    fn test_should_build_checkout_from_patron_and_book() {
        let patron = PatronDto::new("Alice Smith");
        let book = BookDto::new("Design Patterns", "Erich Gamma");
        let due = Utc::now().date_naive() + Duration::days(2);
        let checkout = CheckoutDto::from_patron_book("branch1", &patron, &book, due);
        assert_eq!(patron.patron_id, checkout.patron_id);
        assert_eq!(book.book_id, checkout.book_id);
        assert_eq!(due, checkout.due_at);
        assert_eq!(None, checkout.returned_at);
    }
}
