use std::sync::Arc;
use uuid::Uuid;

use crate::domain::formation::entities::Formation;
use crate::domain::formation::errors::FormationError;
use crate::domain::formation::services::FormationService;

/// Command for updating a catalog entry
#[derive(Debug, Clone)]
pub struct UpdateFormationCommand {
  pub id: Uuid,
  pub label: String,
  pub description: String,
  pub duration_hours: i32,
}

/// Use case for updating a formation
pub struct UpdateFormationUseCase {
  formation_service: Arc<FormationService>,
}

impl UpdateFormationUseCase {
  pub fn new(formation_service: Arc<FormationService>) -> Self {
    Self { formation_service }
  }

  /// # Errors
  /// Returns `FormationError::NotFound` if the id does not exist.
  pub async fn execute(&self, command: UpdateFormationCommand) -> Result<Formation, FormationError> {
    self
      .formation_service
      .update(
        command.id,
        command.label,
        command.description,
        command.duration_hours,
      )
      .await
  }
}
