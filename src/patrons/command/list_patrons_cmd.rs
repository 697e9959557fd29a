use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

pub struct ListPatronsCommand {
    patron_service: Box<dyn PatronService>,
}

impl ListPatronsCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListPatronsCommandRequest {
    pub page: Option<String>,
    pub page_size: usize,
}

impl ListPatronsCommandRequest {
    pub fn new(page: Option<&str>, page_size: usize) -> Self {
        Self {
            page: page.map(str::to_string),
            page_size,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListPatronsCommandResponse {
    pub patrons: Vec<PatronDto>,
    pub next_page: Option<String>,
}

impl ListPatronsCommandResponse {
    pub fn new(patrons: Vec<PatronDto>, next_page: Option<String>) -> Self {
        Self {
            patrons,
            next_page,
        }
    }
}

impl Command<ListPatronsCommandRequest, ListPatronsCommandResponse> for ListPatronsCommand {
    fn execute(&self, req: ListPatronsCommandRequest) -> Result<ListPatronsCommandResponse, CommandError> {
        self.patron_service.list_patrons(req.page.as_deref(), req.page_size)
            .map_err(CommandError::from)
            .map(|res| ListPatronsCommandResponse::new(res.records, res.next_page))
    }
}
