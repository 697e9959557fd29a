use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// PatronEntity abstracts a library member and the books they currently hold.
// Holdings keep book ids, never book records; the catalog owns those.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronEntity {
    pub patron_id: String,
    pub version: i64,
    pub name: String,
    pub holdings: Vec<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl PatronEntity {
    pub fn new(name: &str) -> Self {
        Self {
            patron_id: Uuid::new_v4().to_string(),
            version: 0,
            name: name.to_string(),
            holdings: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // Adding a book id the patron already holds is ignored.
    pub fn check_out_book(&mut self, book_id: &str) {
        if !self.holdings.iter().any(|id| id == book_id) {
            self.holdings.push(book_id.to_string());
            self.updated_at = Utc::now().naive_utc();
        }
    }

    pub fn return_book(&mut self, book_id: &str) {
        if self.holdings.iter().any(|id| id == book_id) {
            self.holdings.retain(|id| id != book_id);
            self.updated_at = Utc::now().naive_utc();
        }
    }

    pub fn has_checked_out_book(&self, book_id: &str) -> bool {
        self.holdings.iter().any(|id| id == book_id)
    }

    pub fn checked_out_books(&self) -> &[String] {
        self.holdings.as_slice()
    }
}

impl Identifiable for PatronEntity {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}
