use std::sync::Arc;

use crate::domain::formation::entities::Formation;
use crate::domain::formation::errors::FormationError;
use crate::domain::formation::services::FormationService;

/// Command for creating a catalog entry
#[derive(Debug, Clone)]
pub struct CreateFormationCommand {
  pub label: String,
  pub description: String,
  pub duration_hours: i32,
}

/// Use case for creating a formation
pub struct CreateFormationUseCase {
  formation_service: Arc<FormationService>,
}

impl CreateFormationUseCase {
  pub fn new(formation_service: Arc<FormationService>) -> Self {
    Self { formation_service }
  }

  pub async fn execute(&self, command: CreateFormationCommand) -> Result<Formation, FormationError> {
    self
      .formation_service
      .create(command.label, command.description, command.duration_hours)
      .await
  }
}
