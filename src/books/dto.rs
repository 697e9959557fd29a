use chrono::{NaiveDate, NaiveDateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::{day_serializer, serializer};

// BookDto carries catalog entry state across the service boundary.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: String,
    pub version: i64,
    pub dewey_decimal_id: String,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
    #[serde(with = "day_serializer")]
    pub due_date: Option<NaiveDate>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
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
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn status(&self) -> BookStatus {
        self.book_status
    }

    fn is_checked_out(&self) -> bool {
        self.book_status == BookStatus::CheckedOut
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::dto::BookDto;
    use crate::core::library::BookStatus;

    #[test]
    fn test_should_build_book_dto() {
        let book = BookDto::new("Design Patterns", "Erich Gamma");
        assert_eq!("Design Patterns", book.title.as_str());
        assert_eq!("Erich Gamma", book.author.as_str());
        assert_eq!(BookStatus::Available, book.status());
        assert!(!book.is_checked_out());
        assert_eq!(None, book.due_date);
    }

    #[test]
    fn test_should_assign_distinct_ids_for_same_title() {
        let first = BookDto::new("Moby Dick", "Herman Melville");
        let second = BookDto::new("Moby Dick", "Herman Melville");
        assert_ne!(first.book_id, second.book_id);
    }
}
