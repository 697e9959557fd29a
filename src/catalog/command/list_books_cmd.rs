use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListBooksCommandRequest {
    pub page: Option<String>,
    pub page_size: usize,
}

impl ListBooksCommandRequest {
    pub fn new(page: Option<&str>, page_size: usize) -> Self {
        Self {
            page: page.map(str::to_string),
            page_size,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
    pub next_page: Option<String>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>, next_page: Option<String>) -> Self {
        Self {
            books,
            next_page,
        }
    }
}

impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books(req.page.as_deref(), req.page_size)
            .map_err(CommandError::from)
            .map(|res| ListBooksCommandResponse::new(res.records, res.next_page))
    }
}
