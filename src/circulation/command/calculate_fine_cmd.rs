use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};

pub struct CalculateFineCommand {
    circulation_service: Box<dyn CirculationService>,
}

impl CalculateFineCommand {
    pub fn new(circulation_service: Box<dyn CirculationService>) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CalculateFineCommandRequest {
    pub patron_id: String,
}

impl CalculateFineCommandRequest {
    pub fn new(patron_id: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CalculateFineCommandResponse {
    pub fine: f64,
}

impl CalculateFineCommandResponse {
    pub fn new(fine: f64) -> Self {
        Self {
            fine,
        }
    }
}

impl Command<CalculateFineCommandRequest, CalculateFineCommandResponse> for CalculateFineCommand {
    fn execute(&self, req: CalculateFineCommandRequest) -> Result<CalculateFineCommandResponse, CommandError> {
        self.circulation_service.calculate_fine(req.patron_id.as_str())
            .map_err(CommandError::from).map(CalculateFineCommandResponse::new)
    }
}
