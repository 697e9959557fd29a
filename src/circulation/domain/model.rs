use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::CheckoutStatus;
use crate::utils::date::serializer;

// CheckoutEntity is one ledger row of the circulation history: a single loan
// of a single book to a single patron, open while the book is out.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CheckoutEntity {
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

impl CheckoutEntity {
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

    pub fn is_open(&self) -> bool {
        self.checkout_status == CheckoutStatus::CheckedOut
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_open() && self.due_at < today
    }
}

impl Identifiable for CheckoutEntity {
    fn id(&self) -> String {
        self.checkout_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, Utc};
    use crate::circulation::domain::model::CheckoutEntity;
    use crate::core::library::CheckoutStatus;

    #[test]
    fn test_should_build_checkout() {
        let due = Utc::now().date_naive() + Duration::days(14);
        let checkout = CheckoutEntity::new("branch1", "book1", "patron1", due);
        assert_eq!("book1", checkout.book_id.as_str());
        assert_eq!("patron1", checkout.patron_id.as_str());
        assert_eq!(CheckoutStatus::CheckedOut, checkout.checkout_status);
        assert_eq!(due, checkout.due_at);
        assert!(checkout.is_open());
    }

    #[test]
    fn test_should_flag_overdue_only_after_due_date() {
        let today = NaiveDate::from_ymd_opt(2023, 7, 14).expect("valid date");
        let mut checkout = CheckoutEntity::new("branch1", "book1", "patron1", today);
        assert!(!checkout.is_overdue(today));
        assert!(checkout.is_overdue(today + Duration::days(1)));

        checkout.checkout_status = CheckoutStatus::Returned;
        assert!(!checkout.is_overdue(today + Duration::days(1)));
    }
}
