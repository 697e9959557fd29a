use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::PatronDto;

pub struct GetPatronCommand {
    patron_service: Box<dyn PatronService>,
}

impl GetPatronCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetPatronCommandRequest {
    pub patron_id: String,
}

impl GetPatronCommandRequest {
    pub fn new(patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetPatronCommandResponse {
    pub patron: PatronDto,
}

impl GetPatronCommandResponse {
    pub fn new(patron: PatronDto) -> Self {
        Self {
            patron,
        }
    }
}

impl Command<GetPatronCommandRequest, GetPatronCommandResponse> for GetPatronCommand {
    fn execute(&self, req: GetPatronCommandRequest) -> Result<GetPatronCommandResponse, CommandError> {
        self.patron_service.find_patron_by_id(req.patron_id.as_str())
            .map_err(CommandError::from).map(GetPatronCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::patrons::command::get_patron_cmd::{GetPatronCommand, GetPatronCommandRequest};
    use crate::patrons::domain::PatronService;
    use crate::patrons::dto::PatronDto;
    use crate::patrons::factory;

    #[test]
    fn test_should_run_get_patron() {
        let repo = factory::create_patron_repository();
        let svc = factory::create_patron_service(&Configuration::new("test"), Box::new(repo));

        let patron = PatronDto::new("Bob");
        svc.add_patron(&patron).expect("should add patron");

        let cmd = GetPatronCommand::new(svc);
        let res = cmd.execute(GetPatronCommandRequest::new(patron.patron_id.as_str()))
            .expect("should get patron");
        assert_eq!(patron.patron_id, res.patron.patron_id);
    }

    #[test]
    fn test_should_fail_for_unknown_patron() {
        let svc = factory::create_patron_service(
            &Configuration::new("test"), Box::new(factory::create_patron_repository()));
        let cmd = GetPatronCommand::new(svc);
        let err = cmd.execute(GetPatronCommandRequest::new("missing")).expect_err("should fail");
        assert!(matches!(err, CommandError::NotFound { message: _ }));
    }
}
