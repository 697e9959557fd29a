use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};

pub struct SetDueDateCommand {
    circulation_service: Box<dyn CirculationService>,
}

impl SetDueDateCommand {
    pub fn new(circulation_service: Box<dyn CirculationService>) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetDueDateCommandRequest {
    pub book_id: String,
    pub due_date: NaiveDate,
}

impl SetDueDateCommandRequest {
    pub fn new(book_id: &str, due_date: NaiveDate) -> Self {
        Self {
            book_id: book_id.to_string(),
            due_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SetDueDateCommandResponse {
    pub book: BookDto,
}

impl SetDueDateCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<SetDueDateCommandRequest, SetDueDateCommandResponse> for SetDueDateCommand {
    fn execute(&self, req: SetDueDateCommandRequest) -> Result<SetDueDateCommandResponse, CommandError> {
        self.circulation_service.set_due_date(req.book_id.as_str(), req.due_date)
            .map_err(CommandError::from).map(SetDueDateCommandResponse::new)
    }
}
