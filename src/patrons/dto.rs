use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::patrons::domain::Patron;
use crate::utils::date::serializer;

// PatronDto carries member state across the service boundary.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronDto {
    pub patron_id: String,
    pub version: i64,
    pub name: String,
    pub holdings: Vec<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl PatronDto {
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
}

impl Identifiable for PatronDto {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Patron for PatronDto {
    fn holds(&self, book_id: &str) -> bool {
        self.holdings.iter().any(|id| id == book_id)
    }

    fn hold_count(&self) -> usize {
        self.holdings.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::patrons::domain::Patron;
    use crate::patrons::dto::PatronDto;

    #[test]
    fn test_should_build_patron_dto() {
        let patron = PatronDto::new("Alice Smith");
        assert_eq!("Alice Smith", patron.name.as_str());
        assert_eq!(0, patron.hold_count());
        assert!(!patron.holds("book1"));
    }
}
