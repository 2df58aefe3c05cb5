use std::sync::Arc;

use crate::domain::formation::entities::Formation;
use crate::domain::formation::errors::FormationError;
use crate::domain::formation::services::FormationService;

/// Use case for listing the formation catalog
pub struct ListFormationsUseCase {
  formation_service: Arc<FormationService>,
}

impl ListFormationsUseCase {
  pub fn new(formation_service: Arc<FormationService>) -> Self {
    Self { formation_service }
  }

  pub async fn execute(&self) -> Result<Vec<Formation>, FormationError> {
    self.formation_service.list().await
  }
}
