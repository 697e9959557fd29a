use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};

pub struct CheckoutBookCommand {
    circulation_service: Box<dyn CirculationService>,
}

impl CheckoutBookCommand {
    pub fn new(circulation_service: Box<dyn CirculationService>) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBookCommandRequest {
    pub patron_id: String,
    pub book_id: String,
    pub days: i64,
}

impl CheckoutBookCommandRequest {
    pub fn new(patron_id: &str, book_id: &str, days: i64) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            book_id: book_id.to_string(),
            days,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutBookCommandResponse {
    pub checked_out: bool,
}

impl CheckoutBookCommandResponse {
    pub fn new(checked_out: bool) -> Self {
        Self {
            checked_out,
        }
    }
}

impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.circulation_service.check_out_book(req.patron_id.as_str(), req.book_id.as_str(), req.days)
            .map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}
