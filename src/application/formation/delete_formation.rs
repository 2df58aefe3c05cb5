use std::sync::Arc;
use uuid::Uuid;

use crate::domain::formation::entities::Formation;
use crate::domain::formation::errors::FormationError;
use crate::domain::formation::services::FormationService;

/// Use case for deleting a formation. Returns the removed record; existing
/// candidatures referencing it are left in place.
pub struct DeleteFormationUseCase {
  formation_service: Arc<FormationService>,
}

impl DeleteFormationUseCase {
  pub fn new(formation_service: Arc<FormationService>) -> Self {
    Self { formation_service }
  }

  /// # Errors
  /// Returns `FormationError::NotFound` if the id does not exist.
  pub async fn execute(&self, id: Uuid) -> Result<Formation, FormationError> {
    self.formation_service.delete(id).await
  }
}
