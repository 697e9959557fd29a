use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::factory::create_publisher;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_run_get_book() {
        let svc = factory::create_catalog_service(
            &Configuration::new("test"),
            Box::new(create_book_repository()),
            create_publisher(GatewayPublisherVia::Memory));

        let book = BookDto::new("1984", "George Orwell");
        svc.add_book(&book).expect("should add book");

        let cmd = GetBookCommand::new(svc);
        let res = cmd.execute(GetBookCommandRequest::new(book.book_id.as_str()))
            .expect("should get book");
        assert_eq!(book.book_id, res.book.book_id);
        assert_eq!(book.title, res.book.title);
    }

    #[test]
    fn test_should_fail_for_unknown_book() {
        let svc = factory::create_catalog_service(
            &Configuration::new("test"),
            Box::new(create_book_repository()),
            create_publisher(GatewayPublisherVia::Memory));
        let cmd = GetBookCommand::new(svc);
        let err = cmd.execute(GetBookCommandRequest::new("missing")).expect_err("should fail");
        assert!(matches!(err, CommandError::NotFound { message: _ }));
    }
}
